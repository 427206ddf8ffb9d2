use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, get, json, send};

/// Expect a logged interaction to be listed in the interactions envelope
#[tokio::test]
async fn logs_and_lists_interactions() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    test.program().insert_ai_interaction(2, "복약 시간 알려줘").await?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        json(
            Method::POST,
            "/api/ai-interactions",
            json!({"userId": 1, "prompt": "오늘 일정 알려줘"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["interaction"]["prompt"], "오늘 일정 알려줘");
    assert!(created["interaction"]["response"].as_str().is_some());

    let (status, all) = send(&app, get("/api/ai-interactions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all["interactions"].as_array().map(Vec::len), Some(2));

    let (status, mine) = send(&app, get("/api/ai-interactions?userId=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine["interactions"].as_array().map(Vec::len), Some(1));
    assert_eq!(mine["interactions"][0]["userId"], 1);

    Ok(())
}
