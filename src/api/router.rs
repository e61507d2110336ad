use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, calendar, comment, dashboard, health, member, project, task, user};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))

        // Users
        .route("/api/v1/users", get(user::list_users))
        .route("/api/v1/users/me", get(auth::me))
        .route("/api/v1/users/{user_id}", get(user::get_user).put(user::update_profile))

        // Projects & membership
        .route("/api/v1/projects", post(project::create_project).get(project::list_projects))
        .route("/api/v1/projects/{project_id}", get(project::get_project).put(project::update_project))
        .route("/api/v1/projects/{project_id}/tasks", get(project::list_project_tasks))
        .route("/api/v1/projects/{project_id}/members", post(member::add_member).get(member::list_members))
        .route("/api/v1/projects/{project_id}/members/{user_id}", delete(member::remove_member))

        // Tasks & comments
        .route("/api/v1/tasks", post(task::create_task).get(task::list_tasks))
        .route("/api/v1/tasks/{task_id}", get(task::get_task).put(task::update_task))
        .route("/api/v1/tasks/{task_id}/comments", post(comment::add_comment).get(comment::list_comments))

        // Calendar
        .route("/api/v1/calendar-events", post(calendar::create_event).get(calendar::list_events))
        .route(
            "/api/v1/calendar-events/{event_id}",
            get(calendar::get_event)
                .put(calendar::update_event)
                .delete(calendar::delete_event),
        )

        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::summary))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
