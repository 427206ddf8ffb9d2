use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reservation::{
            ReservationBodyDto, ReservationListDto, ReservationResponseDto, UserFilterQuery,
        },
    },
    server::{
        controller::util::deleted,
        data::room_reservation::RoomReservationRepository,
        error::{api::ApiError, Error},
        factory::Factory,
        model::app::AppState,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// List room reservations, optionally only those of one user
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    params(UserFilterQuery),
    responses(
        (status = 200, description = "Matching reservations", body = ReservationListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    Query(query): Query<UserFilterQuery>,
) -> Result<impl IntoResponse, Error> {
    let reservations = RoomReservationRepository::new(&state.db)
        .get_all(query.user_id)
        .await?;

    Ok(Json(ReservationListDto {
        reservations: reservations.into_iter().map(Into::into).collect(),
    }))
}

/// Reserve a room
///
/// The referenced room, user and session are not checked for existence.
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = ReservationBodyDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let reservation = Factory::new(&state.db)
        .create(entity::room_reservation::ActiveModel::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponseDto {
            reservation: reservation.into(),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted", body = MessageDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = RoomReservationRepository::new(&state.db).delete(id).await?;

    deleted("Reservation", id, result)
}
