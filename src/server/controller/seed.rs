use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, seed::SeedResponseDto},
    server::{error::Error, model::app::AppState, service::seed::SeedService},
};

pub static DEV_TAG: &str = "dev";

/// Clear the mock store and seed it again
///
/// # Responses
/// - 200 (Success): Number of records created per entity
/// - 500 (Internal Server Error): An insert failed, the store is left partially seeded
#[utoipa::path(
    post,
    path = "/api/dev/seed",
    tag = DEV_TAG,
    responses(
        (status = 200, description = "Store reseeded", body = SeedResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let seeded = SeedService::new(&state.db)
        .with_plan(state.seed_plan.clone())
        .with_rng_seed(state.seed_rng)
        .seed_database()
        .await?;

    Ok(Json(SeedResponseDto { seeded }))
}
