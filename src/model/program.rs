use chrono::NaiveDateTime;
use entity::json::ProgramBenefits;
use serde::{Deserialize, Serialize};

use crate::server::factory::override_with;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDto {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub instructor_id: Option<i32>,
    pub capacity: i32,
    pub price: i32,
    pub benefits: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::program::Model> for ProgramDto {
    fn from(program: entity::program::Model) -> Self {
        Self {
            id: program.id,
            title: program.title,
            category: program.category,
            description: program.description,
            instructor_id: program.instructor_id,
            capacity: program.capacity,
            price: program.price,
            benefits: program.benefits.0,
            created_at: program.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProgramListDto {
    pub programs: Vec<ProgramDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProgramResponseDto {
    pub program: ProgramDto,
}

/// Create or update request for a program
///
/// Every field is optional. On create, missing fields are generated; on update, missing fields
/// are left unchanged. An explicit `null` clears a nullable field.
#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramBodyDto {
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub instructor_id: Option<Option<i32>>,
    pub capacity: Option<i32>,
    pub price: Option<i32>,
    pub benefits: Option<Vec<String>>,
}

impl From<ProgramBodyDto> for entity::program::ActiveModel {
    fn from(body: ProgramBodyDto) -> Self {
        Self {
            title: override_with(body.title),
            category: override_with(body.category),
            description: override_with(body.description),
            instructor_id: override_with(body.instructor_id),
            capacity: override_with(body.capacity),
            price: override_with(body.price),
            benefits: override_with(body.benefits.map(ProgramBenefits)),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProgramQuery {
    /// Only return programs of this category
    pub category: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub id: i32,
    pub program_id: i32,
    pub room_id: Option<i32>,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub status: String,
}

impl From<entity::session::Model> for SessionDto {
    fn from(session: entity::session::Model) -> Self {
        Self {
            id: session.id,
            program_id: session.program_id,
            room_id: session.room_id,
            starts_at: session.starts_at,
            ends_at: session.ends_at,
            status: session.status,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionListDto {
    pub sessions: Vec<SessionDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SessionResponseDto {
    pub session: SessionDto,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionBodyDto {
    pub program_id: Option<i32>,
    #[serde(with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub room_id: Option<Option<i32>>,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub status: Option<String>,
}

impl From<SessionBodyDto> for entity::session::ActiveModel {
    fn from(body: SessionBodyDto) -> Self {
        Self {
            program_id: override_with(body.program_id),
            room_id: override_with(body.room_id),
            starts_at: override_with(body.starts_at),
            ends_at: override_with(body.ends_at),
            status: override_with(body.status),
            ..Default::default()
        }
    }
}
