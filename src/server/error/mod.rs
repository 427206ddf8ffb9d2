//! Error types for the Agape mock server.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`]. Every error
//! implements `IntoResponse` so handlers can return them directly; the response body is always an
//! [`ErrorDto`].

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{api::ApiError, config::ConfigError},
};

/// Main error type for the Agape mock server.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts domain and library errors.
///
/// # Error Categories
/// - Client errors raised by handlers (not found, conflicts, malformed bodies)
/// - Configuration errors (invalid environment variables)
/// - External library errors (store, socket binding)
#[derive(Error, Debug)]
pub enum Error {
    /// Client-facing error with a specific status code.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Store error (query failures, constraint violations, missing tables).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - The status chosen by [`ApiError`] for client errors
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
