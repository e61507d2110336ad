mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_event_lifecycle() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;

    let response = app.request(
        "POST",
        "/api/v1/calendar-events",
        &alice.token,
        Some(json!({
            "title": "Sprint planning",
            "start_at": "2026-09-01T09:00:00Z",
            "end_at": "2026-09-01T10:00:00Z",
            "location": "Room 4"
        })),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let event = parse_body(response).await;
    let event_id = event["id"].as_str().unwrap().to_string();
    assert_eq!(event["owner_id"], alice.id.as_str());
    assert_eq!(event["all_day"], false);

    // Patch the title; the schedule stays put.
    let response = app.request(
        "PUT",
        &format!("/api/v1/calendar-events/{}", event_id),
        &alice.token,
        Some(json!({"title": "Sprint planning (moved agenda)"})),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_body(response).await;
    assert_eq!(updated["title"], "Sprint planning (moved agenda)");
    assert_eq!(updated["start_at"], event["start_at"]);
    assert_eq!(updated["location"], "Room 4");

    let response = app.request(
        "DELETE",
        &format!("/api/v1/calendar-events/{}", event_id),
        &alice.token,
        None,
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request(
        "GET",
        &format!("/api/v1/calendar-events/{}", event_id),
        &alice.token,
        None,
    ).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_events_are_owner_private() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;
    let bob = app.register("Bob", "bob@example.com", "secret123").await;

    let response = app.request(
        "POST",
        "/api/v1/calendar-events",
        &alice.token,
        Some(json!({"title": "1:1 with manager", "start_at": "2026-09-02T14:00:00Z"})),
    ).await;
    let event = parse_body(response).await;
    let event_uri = format!("/api/v1/calendar-events/{}", event["id"].as_str().unwrap());

    let response = app.request("GET", &event_uri, &bob.token, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.request("PUT", &event_uri, &bob.token, Some(json!({"title": "x"}))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.request("DELETE", &event_uri, &bob.token, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Bob's own listing never shows it.
    let response = app.request("GET", "/api/v1/calendar-events", &bob.token, None).await;
    let events = parse_body(response).await;
    assert_eq!(events.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_range_filter() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;

    for (title, start, end) in [
        ("January", "2026-01-10T09:00:00Z", Some("2026-01-10T10:00:00Z")),
        ("June", "2026-06-10T09:00:00Z", Some("2026-06-10T10:00:00Z")),
        // Starts inside the queried window but runs past its upper bound.
        ("June retreat", "2026-06-20T09:00:00Z", Some("2026-08-01T17:00:00Z")),
        ("Open ended", "2026-06-25T09:00:00Z", None),
        ("December", "2026-12-10T09:00:00Z", Some("2026-12-10T10:00:00Z")),
    ] {
        let mut payload = json!({"title": title, "start_at": start});
        if let Some(end) = end {
            payload["end_at"] = json!(end);
        }
        let response = app.request("POST", "/api/v1/calendar-events", &alice.token, Some(payload)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.request("GET", "/api/v1/calendar-events", &alice.token, None).await;
    let events = parse_body(response).await;
    assert_eq!(events.as_array().unwrap().len(), 5);

    // Bounded both ways: only the event fully inside matches. The retreat
    // ends after `to` and the open-ended one has no end time at all.
    let response = app.request(
        "GET",
        "/api/v1/calendar-events?from=2026-05-01T00:00:00Z&to=2026-07-01T00:00:00Z",
        &alice.token,
        None,
    ).await;
    assert_eq!(response.status(), StatusCode::OK);
    let events = parse_body(response).await;
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "June");

    // Open-ended lower bound puts them all back in.
    let response = app.request(
        "GET",
        "/api/v1/calendar-events?from=2026-06-01T00:00:00Z",
        &alice.token,
        None,
    ).await;
    let events = parse_body(response).await;
    assert_eq!(events.as_array().unwrap().len(), 4);
}
