use crate::domain::{models::project::Project, ports::ProjectRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProjectRepo {
    pool: SqlitePool,
}

impl SqliteProjectRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqliteProjectRepo {
    async fn create(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (id, name, description, start_date, end_date, status, created_by, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id, name, description, start_date, end_date, status, created_by, created_at, updated_at",
        )
            .bind(&project.id)
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.start_date)
            .bind(project.end_date)
            .bind(project.status)
            .bind(&project.created_by)
            .bind(project.created_at)
            .bind(project.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            "SELECT id, name, description, start_date, end_date, status, created_by, created_at, updated_at FROM projects WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, project: &Project) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = ?, description = ?, start_date = ?, end_date = ?, status = ?, updated_at = ? WHERE id = ? RETURNING id, name, description, start_date, end_date, status, created_by, created_at, updated_at",
        )
            .bind(&project.name)
            .bind(&project.description)
            .bind(project.start_date)
            .bind(project.end_date)
            .bind(project.status)
            .bind(project.updated_at)
            .bind(&project.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, user_id: &str) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            "SELECT p.id, p.name, p.description, p.start_date, p.end_date, p.status, p.created_by, p.created_at, p.updated_at FROM projects p INNER JOIN project_members pm ON pm.project_id = p.id WHERE pm.user_id = ?",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
