use agape::server::{controller::user::get_user, error::Error, model::app::AppState};
use agape_test_utils::{constant::TEST_EMAIL, prelude::*};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::util::{app, delete, get, send};

/// Expect 200 success with user information for existing user
#[tokio::test]
async fn returns_success_for_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user = test.user().insert_user(TEST_EMAIL).await?;

    let result = get_user(State(test.state::<AppState>()), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 not found for user that does not exist
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = get_user(State(test.state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 internal server error when required tables are missing
#[tokio::test]
async fn returns_error_for_missing_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(State(test.state::<AppState>()), Path(1)).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect the users envelope to list every account
#[tokio::test]
async fn lists_users() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    test.user().insert_users(3).await?;
    let app = app(&test);

    let (status, body) = send(&app, get("/api/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["users"].as_array().map(Vec::len), Some(3));

    Ok(())
}

/// Expect 200 on the first delete and 404 once the user is gone
#[tokio::test]
async fn deletes_user_once() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let user = test.user().insert_user(TEST_EMAIL).await?;
    let app = app(&test);
    let uri = format!("/api/users/{}", user.id);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));

    Ok(())
}
