use crate::domain::{models::calendar_event::CalendarEvent, ports::CalendarEventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresCalendarRepo {
    pool: PgPool,
}

impl PostgresCalendarRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarEventRepository for PostgresCalendarRepo {
    async fn create(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "INSERT INTO calendar_events (id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at",
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
            "SELECT id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at FROM calendar_events WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &CalendarEvent) -> Result<CalendarEvent, AppError> {
        sqlx::query_as::<_, CalendarEvent>(
            "UPDATE calendar_events SET title = $1, description = $2, start_at = $3, end_at = $4, all_day = $5, location = $6, color = $7, updated_at = $8 WHERE id = $9 RETURNING id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at",
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
            "SELECT id, owner_id, title, description, start_at, end_at, all_day, location, color, created_at, updated_at FROM calendar_events WHERE owner_id = $1",
        );
        let mut arg = 1;
        if from.is_some() {
            arg += 1;
            sql.push_str(&format!(" AND start_at >= ${arg}"));
        }
        if to.is_some() {
            arg += 1;
            sql.push_str(&format!(" AND end_at <= ${arg}"));
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
        sqlx::query("DELETE FROM calendar_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
