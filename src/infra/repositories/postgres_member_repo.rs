use crate::domain::{models::project::ProjectMember, ports::ProjectMemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectMemberRepository for PostgresMemberRepo {
    async fn add(&self, member: &ProjectMember) -> Result<ProjectMember, AppError> {
        sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (id, project_id, user_id, role) VALUES ($1, $2, $3, $4) RETURNING id, project_id, user_id, role",
        )
            .bind(&member.id)
            .bind(&member.project_id)
            .bind(&member.user_id)
            .bind(member.role)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find(&self, project_id: &str, user_id: &str) -> Result<Option<ProjectMember>, AppError> {
        sqlx::query_as::<_, ProjectMember>(
            "SELECT id, project_id, user_id, role FROM project_members WHERE project_id = $1 AND user_id = $2",
        )
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_user_ids(&self, project_id: &str) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query(
            "SELECT user_id FROM project_members WHERE project_id = $1",
        )
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(|row| row.get("user_id")).collect())
    }

    async fn remove(&self, project_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM project_members WHERE project_id = $1 AND user_id = $2")
            .bind(project_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
