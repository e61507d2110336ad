use crate::domain::{models::task::Task, ports::TaskRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTaskRepo {
    pool: SqlitePool,
}

impl SqliteTaskRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepo {
    async fn create(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at",
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
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, task: &Task) -> Result<Task, AppError> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = ?, description = ?, status = ?, priority = ?, assignee_id = ?, due_date = ?, updated_at = ? WHERE id = ? RETURNING id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at",
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
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE project_id = ?",
        )
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE creator_id = ? OR assignee_id = ?",
        )
            .bind(user_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_assignee(&self, user_id: &str) -> Result<Vec<Task>, AppError> {
        sqlx::query_as::<_, Task>(
            "SELECT id, title, description, status, priority, project_id, creator_id, assignee_id, due_date, created_at, updated_at FROM tasks WHERE assignee_id = ?",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
