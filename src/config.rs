use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    /// Access token lifetime in days.
    pub token_ttl_days: i64,
    /// Window for the "upcoming deadlines" dashboard aggregate.
    pub dashboard_lookahead_days: i64,
    pub auth_issuer: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_days: env::var("TOKEN_TTL_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("TOKEN_TTL_DAYS must be a number"),
            dashboard_lookahead_days: env::var("DASHBOARD_LOOKAHEAD_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .expect("DASHBOARD_LOOKAHEAD_DAYS must be a number"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://api.taskboard.local".to_string()),
        }
    }
}
