use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::server::factory::override_with;

/// A logged exchange between a user and the care assistant
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiInteractionDto {
    pub id: i32,
    pub user_id: i32,
    pub prompt: String,
    pub response: String,
    pub model: String,
    pub tokens: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::ai_interaction::Model> for AiInteractionDto {
    fn from(interaction: entity::ai_interaction::Model) -> Self {
        Self {
            id: interaction.id,
            user_id: interaction.user_id,
            prompt: interaction.prompt,
            response: interaction.response,
            model: interaction.model,
            tokens: interaction.tokens,
            created_at: interaction.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AiInteractionListDto {
    pub interactions: Vec<AiInteractionDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AiInteractionResponseDto {
    pub interaction: AiInteractionDto,
}

#[derive(Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AiInteractionBodyDto {
    pub user_id: Option<i32>,
    pub prompt: Option<String>,
    pub response: Option<String>,
    pub model: Option<String>,
    pub tokens: Option<i32>,
}

impl From<AiInteractionBodyDto> for entity::ai_interaction::ActiveModel {
    fn from(body: AiInteractionBodyDto) -> Self {
        Self {
            user_id: override_with(body.user_id),
            prompt: override_with(body.prompt),
            response: override_with(body.response),
            model: override_with(body.model),
            tokens: override_with(body.tokens),
            ..Default::default()
        }
    }
}
