//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every mock endpoint is registered here with its OpenAPI specification, and Swagger UI is
//! served at `/api/docs` for browsing them.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login` - Mock account registration and login
/// - `GET /api/users`, `GET|DELETE /api/users/{id}` - User accounts
/// - `GET|POST /api/programs`, `GET|PUT|DELETE /api/programs/{id}` - Programs
/// - `GET /api/programs/{id}/sessions`, `POST /api/sessions` - Program sessions
/// - `GET|POST /api/venues`, `DELETE /api/venues/{id}` - Venues
/// - `GET /api/venues/{id}/rooms`, `POST /api/rooms` - Rooms
/// - `GET|POST /api/reservations`, `DELETE /api/reservations/{id}` - Room reservations
/// - `GET|POST /api/ai-interactions` - Assistant interaction log
/// - `POST /api/dev/seed` - Reseed the mock store
/// - `GET|PUT /api/storage/{key}` - UI local-storage arrays
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Agape", description = "Agape-Care mock admin API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Mock account registration and login"),
        (name = controller::user::USER_TAG, description = "User accounts"),
        (name = controller::program::PROGRAM_TAG, description = "Programs and their sessions"),
        (name = controller::venue::VENUE_TAG, description = "Venues and rooms"),
        (name = controller::reservation::RESERVATION_TAG, description = "Room reservations"),
        (name = controller::ai_interaction::AI_INTERACTION_TAG, description = "Assistant interaction log"),
        (name = controller::seed::DEV_TAG, description = "Development utilities"),
        (name = controller::storage::STORAGE_TAG, description = "UI local-storage arrays"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::program::get_programs,
            controller::program::create_program
        ))
        .routes(routes!(
            controller::program::get_program,
            controller::program::update_program,
            controller::program::delete_program
        ))
        .routes(routes!(controller::program::get_program_sessions))
        .routes(routes!(controller::program::create_session))
        .routes(routes!(
            controller::venue::get_venues,
            controller::venue::create_venue
        ))
        .routes(routes!(controller::venue::delete_venue))
        .routes(routes!(controller::venue::get_venue_rooms))
        .routes(routes!(controller::venue::create_room))
        .routes(routes!(
            controller::reservation::get_reservations,
            controller::reservation::create_reservation
        ))
        .routes(routes!(controller::reservation::delete_reservation))
        .routes(routes!(
            controller::ai_interaction::get_ai_interactions,
            controller::ai_interaction::create_ai_interaction
        ))
        .routes(routes!(controller::seed::seed))
        .routes(routes!(
            controller::storage::get_storage,
            controller::storage::put_storage
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
