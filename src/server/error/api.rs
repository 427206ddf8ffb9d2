use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by the request rather than by the server.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{resource} ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    #[error("Email {0} is already registered")]
    EmailTaken(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Unknown storage key: {0}")]
    UnknownStorageKey(String),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::UnknownStorageKey(_) => StatusCode::NOT_FOUND,
            Self::EmailTaken(_) => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Message shown to the UI.
    fn message(&self) -> String {
        match self {
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::EmailTaken(_) => "이미 등록된 이메일입니다.".to_string(),
            Self::InvalidCredentials => "이메일 또는 비밀번호가 올바르지 않습니다.".to_string(),
            Self::InvalidBody(reason) => format!("Invalid request body: {}", reason),
            Self::UnknownStorageKey(key) => format!("Unknown storage key: {}", key),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::ApiError;

    /// Expect each client error to map to its conventional status code
    #[test]
    fn maps_status_codes() {
        let cases = [
            (ApiError::not_found("Venue", 1), StatusCode::NOT_FOUND),
            (ApiError::EmailTaken("a@b.com".to_string()), StatusCode::CONFLICT),
            (ApiError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ApiError::InvalidBody("eof".to_string()), StatusCode::BAD_REQUEST),
            (ApiError::UnknownStorageKey("x".to_string()), StatusCode::NOT_FOUND),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
