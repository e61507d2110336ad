use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// The authenticated principal, loaded fresh from the identity store so a
/// token for a deleted user is treated as revoked.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.decode_token(token)?;

        let user = app_state
            .user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", user.id.as_str());

        Ok(AuthUser(user))
    }
}
