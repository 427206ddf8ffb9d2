use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, delete, get, json, send};

/// Expect the userId query to return only that user's reservations
#[tokio::test]
async fn list_filters_by_user() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    test.program().insert_room_reservation(1, 10).await?;
    test.program().insert_room_reservation(2, 11).await?;
    test.program().insert_room_reservation(3, 10).await?;
    let app = app(&test);

    let (status, body) = send(&app, get("/api/reservations?userId=10")).await;

    assert_eq!(status, StatusCode::OK);
    let reservations = body["reservations"].as_array().expect("reservations array");
    assert_eq!(reservations.len(), 2);
    assert!(reservations
        .iter()
        .all(|reservation| reservation["userId"] == 10));

    Ok(())
}

/// Expect a reservation referencing a nonexistent room to be accepted
#[tokio::test]
async fn create_without_referential_checks() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        json(
            Method::POST,
            "/api/reservations",
            json!({"roomId": 9999, "userId": 1, "sessionId": null}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["reservation"]["roomId"], 9999);
    assert_eq!(body["reservation"]["userId"], 1);

    Ok(())
}

/// Expect 200 when deleting an existing reservation and 404 for a missing one
#[tokio::test]
async fn delete_reservation() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let reservation = test.program().insert_room_reservation(1, 10).await?;
    let app = app(&test);

    let (status, _) = send(&app, delete(&format!("/api/reservations/{}", reservation.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, delete("/api/reservations/12345")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Reservation not found"}));

    Ok(())
}
