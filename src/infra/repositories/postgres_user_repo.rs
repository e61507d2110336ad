use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at",
        )
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.position)
            .bind(&user.department)
            .bind(&user.phone)
            .bind(&user.bio)
            .bind(&user.avatar_url)
            .bind(user.is_admin)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at FROM users WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at FROM users WHERE email = $1",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $1, position = $2, department = $3, phone = $4, bio = $5, avatar_url = $6 WHERE id = $7 RETURNING id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at",
        )
            .bind(&user.name)
            .bind(&user.position)
            .bind(&user.department)
            .bind(&user.phone)
            .bind(&user.bio)
            .bind(&user.avatar_url)
            .bind(&user.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, position, department, phone, bio, avatar_url, is_admin, created_at FROM users ORDER BY name ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
