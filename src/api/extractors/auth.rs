use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use crate::state::AppState;
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "session_token";

/// Any logged-in user, resolved from the session cookie.
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(AppError::Internal)?;

        let token = cookies.get(SESSION_COOKIE)
            .ok_or(AppError::Unauthorized)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let session = app_state.auth_service.resolve_session(&token).await?;

        let user = app_state.user_repo.find_by_id(&session.user_id).await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", user.id.as_str());

        Ok(AuthUser(user))
    }
}

/// A logged-in user that must hold the ADMIN role.
pub struct AdminUser(pub User);

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin role required".into()));
        }

        Ok(AdminUser(user))
    }
}
