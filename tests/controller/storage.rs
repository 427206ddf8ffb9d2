use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, get, json, raw_json, send, send_raw};

/// Expect a key that was never written to read as an empty array
#[tokio::test]
async fn unwritten_key_reads_empty() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, get("/api/storage/agape_residents")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"key": "agape_residents", "items": []}));

    Ok(())
}

/// Expect a written array to read back unchanged
#[tokio::test]
async fn round_trips_items() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);
    let items = json!([
        {"id": 1, "name": "김영희", "room": "101", "allergies": ["땅콩"]},
        {"id": 2, "name": "이철수", "room": null, "notes": {"diet": "저염식"}},
        "free text",
        42
    ]);

    let (status, written) = send(
        &app,
        json(
            Method::PUT,
            "/api/storage/agape_residents",
            json!({"items": items.clone()}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(written["items"], items);

    let (status, read) = send(&app, get("/api/storage/agape_residents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read["items"], items);

    Ok(())
}

/// Expect object keys to read back in the order they were written
#[tokio::test]
async fn keeps_object_key_order() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        raw_json(
            Method::PUT,
            "/api/storage/agape_residents",
            r#"{"items":[{"zeta":1,"alpha":2,"mid":{"y":true,"b":null}}]}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_raw(&app, get("/api/storage/agape_residents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"key":"agape_residents","items":[{"zeta":1,"alpha":2,"mid":{"y":true,"b":null}}]}"#
    );

    Ok(())
}

/// Expect the last write to replace the stored array
#[tokio::test]
async fn last_write_wins() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    for items in [json!([{"drug": "아스피린"}]), json!([{"drug": "메트포르민"}])] {
        let (status, _) = send(
            &app,
            json(
                Method::PUT,
                "/api/storage/admin_medications",
                json!({"items": items}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, get("/api/storage/admin_medications")).await;
    assert_eq!(body["items"], json!([{"drug": "메트포르민"}]));

    Ok(())
}

/// Expect 404 for a key outside the known set
#[tokio::test]
async fn rejects_unknown_key() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, get("/api/storage/not_a_key")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        json(Method::PUT, "/api/storage/not_a_key", json!({"items": []})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a body without an items array
#[tokio::test]
async fn rejects_invalid_body() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        json(
            Method::PUT,
            "/api/storage/agape_care_history",
            json!({"items": "not an array"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        raw_json(Method::PUT, "/api/storage/agape_care_history", "[1, 2"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    Ok(())
}
