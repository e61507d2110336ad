use crate::config::Config;
use crate::domain::models::auth::Claims;
use crate::error::AppError;
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use uuid::Uuid;

pub struct AuthService {
    config: Config,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    // Verified against when the email is unknown, so failed logins take
    // comparable time whether or not the account exists.
    dummy_hash: String,
}

impl AuthService {
    pub fn new(config: Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = Argon2::default()
            .hash_password(Uuid::new_v4().to_string().as_bytes(), &salt)
            .expect("argon2 hashing failed at startup")
            .to_string();

        Self { config, encoding_key, decoding_key, dummy_hash }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string())
    }

    /// Constant outcome shape: unknown account and wrong password are both
    /// plain `false`, and both run a full argon2 verification.
    pub fn verify_password(&self, stored_hash: Option<&str>, password: &str) -> bool {
        let hash = stored_hash.unwrap_or(&self.dummy_hash);
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };
        let matched = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        matched && stored_hash.is_some()
    }

    pub fn issue_token(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.config.auth_issuer.clone(),
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(self.config.token_ttl_days)).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("JWT encoding failed: {}", e);
                AppError::Internal
            })
    }

    /// Signature, expiry and issuer checks; any failure is `Unauthorized`.
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.auth_issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> AuthService {
        AuthService::new(Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            token_ttl_days: 7,
            dashboard_lookahead_days: 7,
            auth_issuer: "test-issuer".to_string(),
        })
    }

    #[test]
    fn password_roundtrip() {
        let service = test_service();
        let hash = service.hash_password("hunter22").unwrap();
        assert!(service.verify_password(Some(&hash), "hunter22"));
        assert!(!service.verify_password(Some(&hash), "hunter23"));
    }

    #[test]
    fn missing_account_never_verifies() {
        let service = test_service();
        assert!(!service.verify_password(None, "anything"));
    }

    #[test]
    fn token_roundtrip_carries_subject() {
        let service = test_service();
        let token = service.issue_token("user-42").unwrap();
        let claims = service.decode_token(&token).unwrap();
        assert_eq!(claims.sub, "user-42");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        let service = test_service();
        assert!(matches!(
            service.decode_token("not-a-jwt"),
            Err(AppError::Unauthorized)
        ));
    }
}
