mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_comment_thread_roundtrip() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;
    let bob = app.register("Bob", "bob@example.com", "secret123").await;

    let response = app.request(
        "POST",
        "/api/v1/tasks",
        &alice.token,
        Some(json!({"title": "Spec the API", "assignee_id": bob.id})),
    ).await;
    let task = parse_body(response).await;
    let task_id = task["id"].as_str().unwrap().to_string();
    let comments_uri = format!("/api/v1/tasks/{}/comments", task_id);

    let response = app.request(
        "POST", &comments_uri, &alice.token,
        Some(json!({"content": "First draft is up"})),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The assignee can reply.
    let response = app.request(
        "POST", &comments_uri, &bob.token,
        Some(json!({"content": "Reviewing now"})),
    ).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.request("GET", &comments_uri, &alice.token, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let comments = parse_body(response).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "First draft is up");
    assert_eq!(comments[0]["author_id"], alice.id.as_str());
    assert_eq!(comments[1]["author_id"], bob.id.as_str());
}

#[tokio::test]
async fn test_comments_follow_task_access() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;
    let mallory = app.register("Mallory", "mallory@example.com", "secret123").await;

    let response = app.request(
        "POST",
        "/api/v1/tasks",
        &alice.token,
        Some(json!({"title": "Private task"})),
    ).await;
    let task = parse_body(response).await;
    let comments_uri = format!("/api/v1/tasks/{}/comments", task["id"].as_str().unwrap());

    let response = app.request(
        "POST", &comments_uri, &mallory.token,
        Some(json!({"content": "hello?"})),
    ).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app.request("GET", &comments_uri, &mallory.token, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_blank_comment_rejected() {
    let app = TestApp::new().await;
    let alice = app.register("Alice", "alice@example.com", "secret123").await;

    let response = app.request(
        "POST",
        "/api/v1/tasks",
        &alice.token,
        Some(json!({"title": "Some task"})),
    ).await;
    let task = parse_body(response).await;
    let comments_uri = format!("/api/v1/tasks/{}/comments", task["id"].as_str().unwrap());

    let response = app.request(
        "POST", &comments_uri, &alice.token,
        Some(json!({"content": "   "})),
    ).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
