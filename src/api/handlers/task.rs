use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateTaskRequest, TaskListQuery, UpdateTaskRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::task::Task;
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Member ids of the task's bound project, or None for unbound tasks.
async fn bound_project_members(
    state: &AppState,
    task: &Task,
) -> Result<Option<Vec<String>>, AppError> {
    match &task.project_id {
        Some(project_id) => Ok(Some(state.member_repo.list_user_ids(project_id).await?)),
        None => Ok(None),
    }
}

/// The assignee reference must resolve before it is stored.
async fn check_assignee(state: &AppState, assignee_id: &str) -> Result<(), AppError> {
    state
        .user_repo
        .find_by_id(assignee_id)
        .await?
        .ok_or(AppError::NotFound("Assignee not found".into()))?;
    Ok(())
}

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().len() < 2 {
        return Err(AppError::Validation("Task title must be at least 2 characters".into()));
    }

    let member_ids = match &payload.project_id {
        Some(project_id) => {
            state
                .project_repo
                .find_by_id(project_id)
                .await?
                .ok_or(AppError::NotFound("Project not found".into()))?;
            Some(state.member_repo.list_user_ids(project_id).await?)
        }
        None => None,
    };

    guard::create_task(&user.id, member_ids.as_deref()).require()?;

    if let Some(assignee_id) = &payload.assignee_id {
        check_assignee(&state, assignee_id).await?;
    }

    let task = Task::new(
        payload.title,
        payload.description,
        payload.status,
        payload.priority,
        payload.project_id,
        user.id.clone(),
        payload.assignee_id,
        payload.due_date,
    );

    let created = state.task_repo.create(&task).await?;

    info!("Created task {} by user {}", created.id, user.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Without a filter: tasks the principal created or is assigned to. With
/// `?project_id=`: the project's tasks, membership-gated.
pub async fn list_tasks(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(query): Query<TaskListQuery>,
) -> Result<impl IntoResponse, AppError> {
    match query.project_id {
        Some(project_id) => {
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
        None => {
            let tasks = state.task_repo.list_for_user(&user.id).await?;
            Ok(Json(tasks))
        }
    }
}

pub async fn get_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    let member_ids = bound_project_members(&state, &task).await?;
    guard::access_task(&user.id, &task, member_ids.as_deref()).require()?;

    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(task_id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut task = state
        .task_repo
        .find_by_id(&task_id)
        .await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    let member_ids = bound_project_members(&state, &task).await?;
    guard::access_task(&user.id, &task, member_ids.as_deref()).require()?;

    if let Some(title) = &payload.title {
        if title.trim().len() < 2 {
            return Err(AppError::Validation("Task title must be at least 2 characters".into()));
        }
    }

    if let Some(assignee_id) = &payload.assignee_id {
        check_assignee(&state, assignee_id).await?;
    }

    task.apply_update(payload);
    let updated = state.task_repo.update(&task).await?;

    info!("Updated task {}", updated.id);

    Ok(Json(updated))
}
