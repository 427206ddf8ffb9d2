use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::server::factory::override_with;

/// A room reservation
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub session_id: Option<i32>,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::room_reservation::Model> for ReservationDto {
    fn from(reservation: entity::room_reservation::Model) -> Self {
        Self {
            id: reservation.id,
            room_id: reservation.room_id,
            user_id: reservation.user_id,
            session_id: reservation.session_id,
            starts_at: reservation.starts_at,
            ends_at: reservation.ends_at,
            status: reservation.status,
            created_at: reservation.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReservationListDto {
    pub reservations: Vec<ReservationDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReservationResponseDto {
    pub reservation: ReservationDto,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationBodyDto {
    pub room_id: Option<i32>,
    pub user_id: Option<i32>,
    #[serde(with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub session_id: Option<Option<i32>>,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub status: Option<String>,
}

impl From<ReservationBodyDto> for entity::room_reservation::ActiveModel {
    fn from(body: ReservationBodyDto) -> Self {
        Self {
            room_id: override_with(body.room_id),
            user_id: override_with(body.user_id),
            session_id: override_with(body.session_id),
            starts_at: override_with(body.starts_at),
            ends_at: override_with(body.ends_at),
            status: override_with(body.status),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct UserFilterQuery {
    /// Only return records belonging to this user
    pub user_id: Option<i32>,
}
