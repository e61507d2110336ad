use taskboard_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_calendar_repo::SqliteCalendarRepo,
        sqlite_comment_repo::SqliteCommentRepo,
        sqlite_member_repo::SqliteMemberRepo,
        sqlite_project_repo::SqliteProjectRepo,
        sqlite_task_repo::SqliteTaskRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    domain::services::auth_service::AuthService,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: String,
    pub token: String,
    pub email: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret-not-for-production".to_string(),
            token_ttl_days: 7,
            dashboard_lookahead_days: 7,
            auth_issuer: "test-issuer".to_string(),
        };

        let auth_service = Arc::new(AuthService::new(config.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            project_repo: Arc::new(SqliteProjectRepo::new(pool.clone())),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            task_repo: Arc::new(SqliteTaskRepo::new(pool.clone())),
            comment_repo: Arc::new(SqliteCommentRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteCalendarRepo::new(pool.clone())),
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a fresh account and returns its id and bearer token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestUser {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Registration failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        TestUser {
            id: body["user"]["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
            email: email.to_string(),
        }
    }

    #[allow(dead_code)]
    pub async fn login(&self, email: &str, password: &str) -> String {
        let payload = serde_json::json!({
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let body = parse_body(response).await;
        body["token"].as_str().unwrap().to_string()
    }

    /// Authenticated request with a JSON body.
    #[allow(dead_code)]
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json");

        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
