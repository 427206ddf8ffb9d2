use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        ai_interaction::{AiInteractionBodyDto, AiInteractionListDto, AiInteractionResponseDto},
        api::ErrorDto,
        reservation::UserFilterQuery,
    },
    server::{
        data::ai_interaction::AiInteractionRepository,
        error::{api::ApiError, Error},
        factory::Factory,
        model::app::AppState,
    },
};

pub static AI_INTERACTION_TAG: &str = "ai-interaction";

/// List logged assistant interactions, newest first
#[utoipa::path(
    get,
    path = "/api/ai-interactions",
    tag = AI_INTERACTION_TAG,
    params(UserFilterQuery),
    responses(
        (status = 200, description = "Matching interactions", body = AiInteractionListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ai_interactions(
    State(state): State<AppState>,
    Query(query): Query<UserFilterQuery>,
) -> Result<impl IntoResponse, Error> {
    let interactions = AiInteractionRepository::new(&state.db)
        .get_all(query.user_id)
        .await?;

    Ok(Json(AiInteractionListDto {
        interactions: interactions.into_iter().map(Into::into).collect(),
    }))
}

/// Log an assistant interaction
#[utoipa::path(
    post,
    path = "/api/ai-interactions",
    tag = AI_INTERACTION_TAG,
    request_body = AiInteractionBodyDto,
    responses(
        (status = 201, description = "Interaction logged", body = AiInteractionResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ai_interaction(
    State(state): State<AppState>,
    payload: Result<Json<AiInteractionBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(body) = payload.map_err(ApiError::from)?;

    let interaction = Factory::new(&state.db)
        .create(entity::ai_interaction::ActiveModel::from(body))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AiInteractionResponseDto {
            interaction: interaction.into(),
        }),
    ))
}
