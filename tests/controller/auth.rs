use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, get, json, raw_json, send};

/// Expect 201 on the first registration and 409 with the original account intact on the second
#[tokio::test]
async fn register_twice_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);
    let body = json!({"email": "a@b.com", "name": "X", "password": "p"});

    let (status, first) = send(&app, json(Method::POST, "/api/auth/register", body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["message"], "회원가입 성공");
    assert_eq!(first["user"]["email"], "a@b.com");
    assert!(first["user"].get("passwordHash").is_none());

    let (status, second) = send(
        &app,
        json(
            Method::POST,
            "/api/auth/register",
            json!({"email": "a@b.com", "name": "Y", "password": "q"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second, json!({"error": "이미 등록된 이메일입니다."}));

    let id = first["user"]["id"].as_i64().expect("user id");
    let (status, stored) = send(&app, get(&format!("/api/users/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["user"]["name"], "X");

    Ok(())
}

/// Expect 400 when the email or password is missing
#[tokio::test]
async fn register_requires_email_and_password() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        json(Method::POST, "/api/auth/register", json!({"name": "X"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 400 with an error envelope for a body that is not valid JSON
#[tokio::test]
async fn register_rejects_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        raw_json(Method::POST, "/api/auth/register", "{\"email\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());

    Ok(())
}

/// Expect 200 for the registered password and 401 for any other
#[tokio::test]
async fn login_checks_password() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);
    send(
        &app,
        json(
            Method::POST,
            "/api/auth/register",
            json!({"email": "a@b.com", "name": "X", "password": "p"}),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        json(
            Method::POST,
            "/api/auth/login",
            json!({"email": "a@b.com", "password": "p"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "로그인 성공");
    assert_eq!(body["user"]["email"], "a@b.com");

    let (status, body) = send(
        &app,
        json(
            Method::POST,
            "/api/auth/login",
            json!({"email": "a@b.com", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "이메일 또는 비밀번호가 올바르지 않습니다.");

    Ok(())
}

/// Expect the register route documentation to warn against real credentials
#[tokio::test]
async fn register_docs_warn_about_hashing() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, doc) = send(&app, get("/api/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let description = doc["paths"]["/api/auth/register"]["post"]["description"]
        .as_str()
        .expect("register description");
    assert!(description.contains("unsalted SHA-256"));
    assert!(description.contains("mock credentials"));

    Ok(())
}
