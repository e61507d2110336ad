use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::api::dtos::requests::UpdateCalendarEventRequest;

/// Strictly single-owner: no sharing or collaborator concept.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CalendarEvent {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub location: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner_id: String,
        title: String,
        description: Option<String>,
        start_at: DateTime<Utc>,
        end_at: Option<DateTime<Utc>>,
        all_day: Option<bool>,
        location: Option<String>,
        color: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id,
            title,
            description,
            start_at,
            end_at,
            all_day: all_day.unwrap_or(false),
            location,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, patch: UpdateCalendarEventRequest) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(start_at) = patch.start_at {
            self.start_at = start_at;
        }
        if let Some(end_at) = patch.end_at {
            self.end_at = Some(end_at);
        }
        if let Some(all_day) = patch.all_day {
            self.all_day = all_day;
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        self.updated_at = Utc::now();
    }
}
