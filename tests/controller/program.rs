use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, delete, get, json, send};

/// Expect the provided fields to be kept and the missing ones to be generated
#[tokio::test]
async fn create_fills_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        json(
            Method::POST,
            "/api/programs",
            json!({"title": "실버 요가", "capacity": 12}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let program = &body["program"];
    assert_eq!(program["title"], "실버 요가");
    assert_eq!(program["capacity"], 12);
    assert!(program["category"].as_str().is_some_and(|c| !c.is_empty()));
    assert!(program["id"].as_i64().is_some());

    Ok(())
}

/// Expect an empty object body to create a fully generated program
#[tokio::test]
async fn create_accepts_empty_body() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, json(Method::POST, "/api/programs", json!({}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["program"]["title"].as_str().is_some());

    Ok(())
}

/// Expect the category query to filter the listed programs
#[tokio::test]
async fn list_filters_by_category() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    test.program().insert_program("실버 요가", "health").await?;
    test.program().insert_program("서예 교실", "culture").await?;
    test.program().insert_program("근력 운동", "health").await?;
    let app = app(&test);

    let (status, all) = send(&app, get("/api/programs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["programs"].as_array().map(Vec::len), Some(3));

    let (status, health) = send(&app, get("/api/programs?category=health")).await;
    assert_eq!(status, StatusCode::OK);
    let programs = health["programs"].as_array().expect("programs array");
    assert_eq!(programs.len(), 2);
    assert!(programs
        .iter()
        .all(|program| program["category"] == "health"));

    Ok(())
}

/// Expect 404 with an error envelope for a program that does not exist
#[tokio::test]
async fn get_missing_program() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, get("/api/programs/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Program not found"}));

    Ok(())
}

/// Expect only the fields in the body to change
#[tokio::test]
async fn update_changes_provided_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let program = test.program().insert_program("실버 요가", "health").await?;
    let app = app(&test);
    let uri = format!("/api/programs/{}", program.id);

    let (status, body) = send(&app, json(Method::PUT, &uri, json!({"price": 5000}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["program"]["price"], 5000);
    assert_eq!(body["program"]["title"], "실버 요가");

    let (_, stored) = send(&app, get(&uri)).await;
    assert_eq!(stored["program"]["price"], 5000);

    Ok(())
}

/// Expect a missing nullable field to stay unchanged and an explicit null to clear it
#[tokio::test]
async fn update_clears_nullable_fields() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let program = test.program().insert_program("실버 요가", "health").await?;
    let app = app(&test);
    let uri = format!("/api/programs/{}", program.id);

    let (status, body) = send(
        &app,
        json(Method::PUT, &uri, json!({"description": "매주 화요일 오전"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["program"]["description"], "매주 화요일 오전");

    let (_, body) = send(&app, json(Method::PUT, &uri, json!({"price": 3000}))).await;
    assert_eq!(body["program"]["description"], "매주 화요일 오전");

    let (status, body) = send(
        &app,
        json(Method::PUT, &uri, json!({"description": null, "instructorId": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["program"]["description"].is_null());
    assert!(body["program"]["instructorId"].is_null());

    let (_, stored) = send(&app, get(&uri)).await;
    assert!(stored["program"]["description"].is_null());
    assert_eq!(stored["program"]["price"], 3000);

    Ok(())
}

/// Expect 404 when updating a program that does not exist
#[tokio::test]
async fn update_missing_program() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        json(Method::PUT, "/api/programs/7", json!({"title": "없음"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a deleted program to be gone and a repeated delete to return 404
#[tokio::test]
async fn delete_program() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let program = test.program().insert_program("실버 요가", "health").await?;
    let app = app(&test);
    let uri = format!("/api/programs/{}", program.id);

    let (status, body) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the sessions of a program and a created session to be listed under it
#[tokio::test]
async fn sessions_of_program() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let program = test.program().insert_program("실버 요가", "health").await?;
    test.program().insert_session(program.id, None).await?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        json(
            Method::POST,
            "/api/sessions",
            json!({"programId": program.id, "status": "scheduled"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["session"]["programId"], program.id);

    let (status, body) = send(&app, get(&format!("/api/programs/{}/sessions", program.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessions"].as_array().map(Vec::len), Some(2));

    Ok(())
}
