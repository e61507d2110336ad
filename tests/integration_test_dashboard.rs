mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_empty_dashboard() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;

    let response = app.request("GET", "/api/v1/dashboard", &alice.token, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let summary = parse_body(response).await;
    assert_eq!(summary["projects"]["total"], 0);
    assert_eq!(summary["projects"]["active"], 0);
    assert_eq!(summary["tasks"]["total"], 0);
    assert_eq!(summary["tasks"]["completed"], 0);
    assert_eq!(summary["upcoming"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_dashboard_aggregates() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;
    let bob = app.register("Bob", "bob@example.com", "secret123").await;

    // Two projects for Alice, one of them active; Bob's project is invisible
    // to her.
    app.request("POST", "/api/v1/projects", &alice.token,
        Some(json!({"name": "Alpha", "status": "in_progress"}))).await;
    app.request("POST", "/api/v1/projects", &alice.token,
        Some(json!({"name": "Beta", "status": "completed"}))).await;
    app.request("POST", "/api/v1/projects", &bob.token,
        Some(json!({"name": "Gamma", "status": "in_progress"}))).await;

    let soon = (Utc::now().date_naive() + Duration::days(2)).to_string();
    let far = (Utc::now().date_naive() + Duration::days(30)).to_string();

    // Task counts are over assignments, so all of these go to Alice.
    app.request("POST", "/api/v1/tasks", &bob.token,
        Some(json!({"title": "Due soon", "assignee_id": alice.id, "due_date": soon}))).await;
    app.request("POST", "/api/v1/tasks", &bob.token,
        Some(json!({"title": "Due far out", "assignee_id": alice.id, "due_date": far}))).await;
    app.request("POST", "/api/v1/tasks", &bob.token,
        Some(json!({"title": "Already done", "assignee_id": alice.id, "status": "done", "due_date": soon}))).await;
    // Created by Alice but assigned elsewhere: not hers to count.
    app.request("POST", "/api/v1/tasks", &alice.token,
        Some(json!({"title": "Delegated", "assignee_id": bob.id, "due_date": soon}))).await;

    let response = app.request("GET", "/api/v1/dashboard", &alice.token, None).await;
    let summary = parse_body(response).await;

    assert_eq!(summary["projects"]["total"], 2);
    assert_eq!(summary["projects"]["active"], 1);
    assert_eq!(summary["tasks"]["total"], 3);
    assert_eq!(summary["tasks"]["completed"], 1);

    // Only the open task due inside the lookahead window shows up.
    let upcoming = summary["upcoming"].as_array().unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0]["title"], "Due soon");
}
