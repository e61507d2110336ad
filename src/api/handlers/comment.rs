use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateCommentRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::task::TaskComment;
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Comment visibility and write access both mirror task access: there is no
/// separate "can comment but not edit" tier.
pub async fn add_comment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::Validation("Comment content is required".into()));
    }

    let task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    let member_ids = match &task.project_id {
        Some(project_id) => Some(state.member_repo.list_user_ids(project_id).await?),
        None => None,
    };
    guard::access_task(&user.id, &task, member_ids.as_deref()).require()?;

    let comment = TaskComment::new(task.id.clone(), user.id.clone(), payload.content);
    let created = state.comment_repo.create(&comment).await?;

    info!("Added comment {} to task {}", created.id, task.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    let member_ids = match &task.project_id {
        Some(project_id) => Some(state.member_repo.list_user_ids(project_id).await?),
        None => None,
    };
    guard::access_task(&user.id, &task, member_ids.as_deref()).require()?;

    let comments = state.comment_repo.list_by_task(&task.id).await?;
    Ok(Json(comments))
}
