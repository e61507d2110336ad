use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::dtos::responses::{AuthResponse, UserResponse};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().len() < 2 {
        return Err(AppError::Validation("Name must be at least 2 characters".into()));
    }
    if !payload.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    if payload.password.len() < 6 {
        return Err(AppError::Validation("Password must be at least 6 characters".into()));
    }

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let mut user = User::new(payload.name, payload.email, password_hash);
    user.position = payload.position;
    user.department = payload.department;
    user.phone = payload.phone;

    let created = state.user_repo.create(&user).await?;
    let token = state.auth_service.issue_token(&created.id)?;

    info!("Registered user: {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(created),
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(&payload.email).await?;

    // Verification runs even when the email is unknown, so the two failure
    // modes are indistinguishable on the wire and in timing.
    let verified = state
        .auth_service
        .verify_password(user.as_ref().map(|u| u.password_hash.as_str()), &payload.password);

    let user = match (verified, user) {
        (true, Some(user)) => user,
        _ => return Err(AppError::Unauthorized),
    };

    let token = state.auth_service.issue_token(&user.id)?;

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

pub async fn me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(UserResponse::from(user)))
}
