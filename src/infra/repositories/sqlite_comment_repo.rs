use crate::domain::{models::task::TaskComment, ports::TaskCommentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCommentRepo {
    pool: SqlitePool,
}

impl SqliteCommentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskCommentRepository for SqliteCommentRepo {
    async fn create(&self, comment: &TaskComment) -> Result<TaskComment, AppError> {
        sqlx::query_as::<_, TaskComment>(
            "INSERT INTO task_comments (id, task_id, author_id, content, created_at) VALUES (?, ?, ?, ?, ?) RETURNING id, task_id, author_id, content, created_at",
        )
            .bind(&comment.id)
            .bind(&comment.task_id)
            .bind(&comment.author_id)
            .bind(&comment.content)
            .bind(comment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_task(&self, task_id: &str) -> Result<Vec<TaskComment>, AppError> {
        sqlx::query_as::<_, TaskComment>(
            "SELECT id, task_id, author_id, content, created_at FROM task_comments WHERE task_id = ? ORDER BY created_at ASC",
        )
            .bind(task_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
