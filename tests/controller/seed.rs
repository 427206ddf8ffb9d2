use agape::server::service::seed::plan::SeedPlan;
use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, get, json, send};

/// Expect the seed route to report the planned counts and to replace rather than add records
#[tokio::test]
async fn reseeds_store() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);
    let plan = SeedPlan::small();

    for _ in 0..2 {
        let (status, body) = send(&app, json(Method::POST, "/api/dev/seed", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["seeded"]["users"], plan.users);
        assert_eq!(body["seeded"]["programs"], plan.programs);
        assert_eq!(body["seeded"]["roomReservations"], plan.room_reservations);
    }

    let (_, users) = send(&app, get("/api/users")).await;
    assert_eq!(users["users"].as_array().map(Vec::len), Some(plan.users));

    Ok(())
}

/// Expect the seeded demo administrator to be able to log in
#[tokio::test]
async fn seeded_admin_can_log_in() -> Result<(), TestError> {
    use agape::server::service::seed::{DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD};

    let test = test_setup_with_all_tables!()?;
    let app = app(&test);
    send(&app, json(Method::POST, "/api/dev/seed", json!({}))).await;

    let (status, body) = send(
        &app,
        json(
            Method::POST,
            "/api/auth/login",
            json!({"email": DEMO_ADMIN_EMAIL, "password": DEMO_ADMIN_PASSWORD}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "admin");

    Ok(())
}

/// Expect 500 with the generic error envelope when the store has no tables
#[tokio::test]
async fn reports_internal_error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, json(Method::POST, "/api/dev/seed", json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));

    Ok(())
}
