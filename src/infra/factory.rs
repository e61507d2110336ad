use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    postgres_calendar_repo::PostgresCalendarRepo, postgres_comment_repo::PostgresCommentRepo,
    postgres_member_repo::PostgresMemberRepo, postgres_project_repo::PostgresProjectRepo,
    postgres_task_repo::PostgresTaskRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_calendar_repo::SqliteCalendarRepo, sqlite_comment_repo::SqliteCommentRepo,
    sqlite_member_repo::SqliteMemberRepo, sqlite_project_repo::SqliteProjectRepo,
    sqlite_task_repo::SqliteTaskRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config.clone()));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            project_repo: Arc::new(PostgresProjectRepo::new(pool.clone())),
            member_repo: Arc::new(PostgresMemberRepo::new(pool.clone())),
            task_repo: Arc::new(PostgresTaskRepo::new(pool.clone())),
            comment_repo: Arc::new(PostgresCommentRepo::new(pool.clone())),
            event_repo: Arc::new(PostgresCalendarRepo::new(pool.clone())),
            auth_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            project_repo: Arc::new(SqliteProjectRepo::new(pool.clone())),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            task_repo: Arc::new(SqliteTaskRepo::new(pool.clone())),
            comment_repo: Arc::new(SqliteCommentRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteCalendarRepo::new(pool.clone())),
            auth_service,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
