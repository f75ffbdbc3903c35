use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::dtos::responses::{AuthResponse, UserProfile};
use crate::api::extractors::auth::{AuthUser, SESSION_COOKIE};
use crate::domain::models::user::User;
use std::sync::Arc;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use chrono::Utc;
use tracing::{info, warn};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.password != payload.confirm_password {
        return Err(AppError::Validation("Passwords do not match".into()));
    }

    if state.user_repo.find_by_username(&payload.username).await?.is_some() {
        return Err(AppError::Conflict("Username already taken".into()));
    }
    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        return Err(AppError::Conflict("Email already in use".into()));
    }

    let password_hash = state.auth_service.hash_password(&payload.password)?;
    let user = User::new(payload.username, payload.email, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("User registered: {}", created.id);

    Ok((StatusCode::CREATED, Json(UserProfile::from(&created))))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_username(&payload.username).await?
        .ok_or(AppError::Unauthorized)?;

    state.auth_service.verify_password(&payload.password, &user.password_hash)?;

    let remember = payload.remember.unwrap_or(false);
    let (token, expires_at) = state.auth_service.open_session(&user, remember).await?;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    if remember {
        // Persistent cookie for "remember me"; otherwise it stays a
        // browser-session cookie while the server side expires on its own.
        let max_age = expires_at - Utc::now();
        cookie.set_max_age(time::Duration::seconds(max_age.num_seconds()));
    }
    cookies.add(cookie);

    info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        user: UserProfile::from(&user),
    }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    // Logout is best-effort: the cookie is cleared even if the session row
    // could not be removed, so the failure is only logged.
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Err(e) = state.auth_service.close_session(cookie.value()).await {
            warn!("Failed to remove session during logout: {}", e);
        }
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out");

    Ok(StatusCode::OK)
}

pub async fn me(AuthUser(user): AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(UserProfile::from(&user)))
}
