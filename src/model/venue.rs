use chrono::NaiveDateTime;
use entity::json::VenueMeta;
use serde::{Deserialize, Serialize};

use crate::server::factory::override_with;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    #[schema(value_type = Object)]
    pub meta: VenueMeta,
    pub created_at: NaiveDateTime,
}

impl From<entity::venue::Model> for VenueDto {
    fn from(venue: entity::venue::Model) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            address: venue.address,
            capacity: venue.capacity,
            meta: venue.meta,
            created_at: venue.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VenueListDto {
    pub venues: Vec<VenueDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VenueResponseDto {
    pub venue: VenueDto,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VenueBodyDto {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    #[schema(value_type = Option<Object>)]
    pub meta: Option<VenueMeta>,
}

impl From<VenueBodyDto> for entity::venue::ActiveModel {
    fn from(body: VenueBodyDto) -> Self {
        Self {
            name: override_with(body.name),
            address: override_with(body.address),
            capacity: override_with(body.capacity),
            meta: override_with(body.meta),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub venue_id: i32,
    pub name: String,
    pub floor: i32,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::room::Model> for RoomDto {
    fn from(room: entity::room::Model) -> Self {
        Self {
            id: room.id,
            venue_id: room.venue_id,
            name: room.name,
            floor: room.floor,
            capacity: room.capacity,
            created_at: room.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomListDto {
    pub rooms: Vec<RoomDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomResponseDto {
    pub room: RoomDto,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomBodyDto {
    pub venue_id: Option<i32>,
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub capacity: Option<i32>,
}

impl From<RoomBodyDto> for entity::room::ActiveModel {
    fn from(body: RoomBodyDto) -> Self {
        Self {
            venue_id: override_with(body.venue_id),
            name: override_with(body.name),
            floor: override_with(body.floor),
            capacity: override_with(body.capacity),
            ..Default::default()
        }
    }
}
