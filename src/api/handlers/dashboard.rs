use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::dashboard;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;

pub async fn summary(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let projects = state.project_repo.list_by_member(&user.id).await?;
    let assigned = state.task_repo.list_by_assignee(&user.id).await?;

    let summary = dashboard::build_summary(
        &projects,
        &assigned,
        Utc::now().date_naive(),
        state.config.dashboard_lookahead_days,
    );

    Ok(Json(summary))
}
