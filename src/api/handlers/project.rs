use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateProjectRequest, UpdateProjectRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::project::{MemberRole, Project, ProjectMember};
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().len() < 2 {
        return Err(AppError::Validation("Project name must be at least 2 characters".into()));
    }

    let project = Project::new(
        payload.name,
        payload.description,
        payload.start_date,
        payload.end_date,
        payload.status,
        user.id.clone(),
    );

    let created = state.project_repo.create(&project).await?;

    // The creator is always a member; membership is established atomically
    // with creation from the caller's point of view.
    let owner = ProjectMember::new(created.id.clone(), user.id.clone(), MemberRole::Owner);
    state.member_repo.add(&owner).await?;

    info!("Created project {} by user {}", created.id, user.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Only projects the principal is a member of.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let projects = state.project_repo.list_by_member(&user.id).await?;
    Ok(Json(projects))
}

pub async fn get_project(
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

    Ok(Json(project))
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(project_id): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut project = state
        .project_repo
        .find_by_id(&project_id)
        .await?
        .ok_or(AppError::NotFound("Project not found".into()))?;

    guard::update_project(&user.id, &project).require()?;

    if let Some(name) = &payload.name {
        if name.trim().len() < 2 {
            return Err(AppError::Validation("Project name must be at least 2 characters".into()));
        }
    }

    project.apply_update(payload);
    let updated = state.project_repo.update(&project).await?;

    info!("Updated project {}", updated.id);

    Ok(Json(updated))
}

/// Tasks bound to a project, visible to its members.
pub async fn list_project_tasks(
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

    let tasks = state.task_repo.list_by_project(&project.id).await?;
    Ok(Json(tasks))
}
