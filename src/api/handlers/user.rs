use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::UpdateProfileRequest;
use crate::api::dtos::responses::UserResponse;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// The directory is visible to any authenticated principal.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let users = state.user_repo.list().await?;
    let safe: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(safe))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    guard::update_user(&actor, &user_id).require()?;

    let mut target = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(name) = &payload.name {
        if name.trim().len() < 2 {
            return Err(AppError::Validation("Name must be at least 2 characters".into()));
        }
    }

    target.apply_profile(payload);
    let updated = state.user_repo.update(&target).await?;

    info!("Updated profile for user {}", updated.id);

    Ok(Json(UserResponse::from(updated)))
}
