use crate::domain::{models::calendar_event::CalendarEvent, ports::CalendarEventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteCalendarRepo {
    pool: SqlitePool,
}

impl SqliteCalendarRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarEventRepository for SqliteCalendarRepo {
    async fn create(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "INSERT INTO calendar_events (id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at",
        )
            .bind(&event.id)
            .bind(&event.owner_id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_at)
            .bind(event.end_at)
            .bind(event.all_day)
            .bind(&event.location)
            .bind(&event.color)
            .bind(event.created_at)
            .bind(event.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CalendarEvent>, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "SELECT id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at FROM calendar_events WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "UPDATE calendar_events SET title = ?, description = ?, start_at = ?, end_at = ?, all_day = ?, location = ?, color = ?, updated_at = ? WHERE id = ? RETURNING id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at",
        )
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.start_at)
            .bind(event.end_at)
            .bind(event.all_day)
            .bind(&event.location)
            .bind(&event.color)
            .bind(event.updated_at)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(
        &self,
        owner_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<CalendarEvent>, AppError> {
        // The upper bound compares the end time, so an event spilling past
        // `to` is out, and so is an open-ended one.
        let mut sql = String::from(
            "SELECT id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at FROM calendar_events WHERE owner_id = ?",
        );
        if from.is_some() {
            sql.push_str(" AND start_at >= ?");
        }
        if to.is_some() {
            sql.push_str(" AND end_at <= ?");
        }
        sql.push_str(" ORDER BY start_at");

        let mut query = sqlx::query_as::<_, CalendarEvent>(&sql).bind(owner_id);
        if let Some(from) = from {
            query = query.bind(from);
        }
        if let Some(to) = to {
            query = query.bind(to);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM calendar_events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
