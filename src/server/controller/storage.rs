use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        storage::{StorageBodyDto, StorageDto, StorageKey},
    },
    server::{
        data::client_storage::ClientStorageRepository,
        error::{api::ApiError, Error},
        model::app::AppState,
    },
};

pub static STORAGE_TAG: &str = "storage";

fn storage_key(key: &str) -> Result<StorageKey, ApiError> {
    StorageKey::parse(key).ok_or_else(|| ApiError::UnknownStorageKey(key.to_string()))
}

/// Read the array stored under a local-storage key
///
/// A key that was never written reads as an empty array.
#[utoipa::path(
    get,
    path = "/api/storage/{key}",
    tag = STORAGE_TAG,
    params(("key" = String, Path, description = "Local-storage key, such as agape_residents")),
    responses(
        (status = 200, description = "The stored array", body = StorageDto),
        (status = 404, description = "Unknown storage key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let key = storage_key(&key)?;

    let items = match ClientStorageRepository::new(&state.db)
        .get(key.as_str())
        .await?
        .map(|entry| entry.items)
    {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    Ok(Json(StorageDto {
        key: key.as_str().to_string(),
        items,
    }))
}

/// Replace the array stored under a local-storage key
#[utoipa::path(
    put,
    path = "/api/storage/{key}",
    tag = STORAGE_TAG,
    params(("key" = String, Path, description = "Local-storage key, such as agape_residents")),
    request_body = StorageBodyDto,
    responses(
        (status = 200, description = "The stored array", body = StorageDto),
        (status = 400, description = "Body is not an object with an items array", body = ErrorDto),
        (status = 404, description = "Unknown storage key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_storage(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Result<Json<StorageBodyDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let key = storage_key(&key)?;
    let Json(body) = payload.map_err(ApiError::from)?;

    let entry = ClientStorageRepository::new(&state.db)
        .upsert(key.as_str(), body.items)
        .await?;

    let items = match entry.items {
        Value::Array(items) => items,
        _ => Vec::new(),
    };

    Ok(Json(StorageDto {
        key: entry.key,
        items,
    }))
}
