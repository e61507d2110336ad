use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CalendarRangeQuery, CreateCalendarEventRequest, UpdateCalendarEventRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::calendar_event::CalendarEvent;
use crate::domain::services::guard;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateCalendarEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().len() < 2 {
        return Err(AppError::Validation("Event title must be at least 2 characters".into()));
    }

    let event = CalendarEvent::new(
        user.id.clone(),
        payload.title,
        payload.description,
        payload.start_at,
        payload.end_at,
        payload.all_day,
        payload.location,
        payload.color,
    );

    let created = state.event_repo.create(&event).await?;

    info!("Created calendar event {} for user {}", created.id, user.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Query(range): Query<CalendarRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = state
        .event_repo
        .list_by_owner(&user.id, range.from, range.to)
        .await?;

    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Calendar event not found".into()))?;

    guard::access_event(&user.id, &event).require()?;

    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateCalendarEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Calendar event not found".into()))?;

    guard::access_event(&user.id, &event).require()?;

    event.apply_update(payload);
    let updated = state.event_repo.update(&event).await?;

    info!("Updated calendar event {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Calendar event not found".into()))?;

    guard::access_event(&user.id, &event).require()?;

    state.event_repo.delete(&event.id).await?;

    info!("Deleted calendar event {}", event.id);

    Ok(Json(serde_json::json!({ "success": true })))
}
