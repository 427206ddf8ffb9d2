use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::{api::ApiError, Error},
        model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new member account
///
/// The existing account is left untouched when the email is already registered.
///
/// Passwords are stored as unsalted SHA-256 digests. Only register mock credentials, never real
/// ones.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Malformed body or empty email/password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(registration) = payload.map_err(ApiError::from)?;

    let user = AuthService::new(&state.db).register(registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            message: "회원가입 성공".to_string(),
            user,
        }),
    ))
}

/// Log in with an email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials match an account", body = AuthResponseDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(credentials) = payload.map_err(ApiError::from)?;

    let user = AuthService::new(&state.db).login(credentials).await?;

    Ok(Json(AuthResponseDto {
        message: "로그인 성공".to_string(),
        user,
    }))
}
