use crate::domain::{models::task::Task, ports::TaskRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTaskRepo {
    pool: PgPool,
}

impl PostgresTaskRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepo {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at",
        )
            .bind(&task.id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status)
            .bind(task.priority)
            .bind(&task.project_id)
            .bind(&task.creator_id)
            .bind(&task.assignee_id)
            .bind(task.due_date)
            .bind(task.created_at)
            .bind(task.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $1, description = $2, status = $3, priority = $4, assignee_id = $5, due_date = $6, updated_at = $7 WHERE id = $8 RETURNING id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at",
        )
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.status)
            .bind(task.priority)
            .bind(&task.assignee_id)
            .bind(task.due_date)
            .bind(task.updated_at)
            .bind(&task.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_project(&self, project_id: &str) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE project_id = $1",
        )
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE creator_id = $1 OR assignee_id = $1",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_assignee(&self, user_id: &str) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE assignee_id = $1",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
