use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::AddMemberRequest;
use crate::api::dtos::responses::UserResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::project::{MemberRole, ProjectMember};
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn add_member(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(project_id): Path<String>,
    Json(payload): Json<AddMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    guard::manage_members(&user.id, &project).require()?;

    let target = state
        .user_repo
        .find_by_id(&payload.user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if state.member_repo.find(&project.id, &target.id).await?.is_some() {
        return Err(AppError::Conflict("User is already a member of this project".into()));
    }

    let member = ProjectMember::new(
        project.id.clone(),
        target.id.clone(),
        payload.role.unwrap_or(MemberRole::Member),
    );
    let created = state.member_repo.add(&member).await?;

    info!("Added user {} to project {}", target.id, project.id);

    Ok(Json(created))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    let member_ids = state.member_repo.list_user_ids(&project.id).await?;
    guard::read_project(&user.id, &member_ids).require()?;

    let mut members = Vec::with_capacity(member_ids.len());
    for user_id in &member_ids {
        if let Some(member) = state.user_repo.find_by_id(user_id).await? {
            members.push(UserResponse::from(member));
        }
    }

    Ok(Json(members))
}

pub async fn remove_member(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path((project_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    guard::manage_members(&user.id, &project).require()?;

    // The creator's membership is what keeps the member set non-empty.
    if user_id == project.created_by {
        return Err(AppError::Conflict("The project creator cannot be removed".into()));
    }

    if state.member_repo.find(&project.id, &user_id).await?.is_none() {
        return Err(AppError::NotFound("User is not a member of this project".into()));
    }

    state.member_repo.remove(&project.id, &user_id).await?;

    info!("Removed user {} from project {}", user_id, project.id);

    Ok(Json(serde_json::json!({ "success": true })))
}
