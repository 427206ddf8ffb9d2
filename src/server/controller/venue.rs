use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        venue::{
            RoomBodyDto, RoomListDto, RoomResponseDto, VenueBodyDto, VenueListDto,
            VenueResponseDto,
        },
    },
    server::{
        controller::util::deleted,
        data::{room::RoomRepository, venue::VenueRepository},
        error::{api::ApiError, Error},
        factory::Factory,
        model::app::AppState,
    },
};

pub static VENUE_TAG: &str = "venue";

#[utoipa::path(
    get,
    path = "/api/venues",
    tag = VENUE_TAG,
    responses(
        (status = 200, description = "All venues", body = VenueListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venues(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let venues = VenueRepository::new(&state.db).get_all().await?;

    Ok(Json(VenueListDto {
        venues: venues.into_iter().map(Into::into).collect(),
    }))
}

/// Create a venue, generating any field missing from the body
#[utoipa::path(
    post,
    path = "/api/venues",
    tag = VENUE_TAG,
    request_body = VenueBodyDto,
    responses(
        (status = 201, description = "Venue created", body = VenueResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_venue(
    State(state): State<AppState>,
    payload: Result<Json<VenueBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let venue = Factory::new(&state.db)
        .create(entity::venue::ActiveModel::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(VenueResponseDto {
            venue: venue.into(),
        }),
    ))
}

/// Delete a venue, its rooms are kept
#[utoipa::path(
    delete,
    path = "/api/venues/{id}",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Venue deleted", body = MessageDto),
        (status = 404, description = "Venue not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let result = VenueRepository::new(&state.db).delete(id).await?;

    deleted("Venue", id, result)
}

#[utoipa::path(
    get,
    path = "/api/venues/{id}/rooms",
    tag = VENUE_TAG,
    params(("id" = i32, Path, description = "Venue ID")),
    responses(
        (status = 200, description = "Rooms of the venue", body = RoomListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_venue_rooms(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let rooms = RoomRepository::new(&state.db).get_by_venue_id(id).await?;

    Ok(Json(RoomListDto {
        rooms: rooms.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = VENUE_TAG,
    request_body = RoomBodyDto,
    responses(
        (status = 201, description = "Room created", body = RoomResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let room = Factory::new(&state.db)
        .create(entity::room::ActiveModel::from(body))
        .await?;

    Ok((StatusCode::CREATED, Json(RoomResponseDto { room: room.into() })))
}
