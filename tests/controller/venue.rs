use agape_test_utils::prelude::*;
use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::util::{app, delete, get, json, send};

/// Expect a created venue to appear in the venue list
#[tokio::test]
async fn create_and_list_venues() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        json(
            Method::POST,
            "/api/venues",
            json!({"name": "마포 복지관", "meta": {"amenities": ["엘리베이터"], "parking": true}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["venue"]["name"], "마포 복지관");
    assert_eq!(created["venue"]["meta"]["parking"], true);

    let (status, body) = send(&app, get("/api/venues")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["venues"][0]["id"], created["venue"]["id"]);

    Ok(())
}

/// Expect rooms to be listed under their venue, even after the venue is deleted
#[tokio::test]
async fn rooms_outlive_their_venue() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let venue = test.venue().insert_venue("마포 복지관").await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        json(
            Method::POST,
            "/api/rooms",
            json!({"venueId": venue.id, "name": "101호"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, delete(&format!("/api/venues/{}", venue.id))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get(&format!("/api/venues/{}/rooms", venue.id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rooms"][0]["name"], "101호");

    Ok(())
}

/// Expect 404 when deleting a venue that does not exist
#[tokio::test]
async fn delete_missing_venue() -> Result<(), TestError> {
    let test = test_setup_with_all_tables!()?;
    let app = app(&test);

    let (status, body) = send(&app, delete("/api/venues/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Venue not found"}));

    Ok(())
}
