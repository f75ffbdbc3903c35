use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use sha2::{Digest, Sha256};

use crate::domain::models::{session::SessionRecord, user::User};
use crate::domain::ports::SessionRepository;
use crate::error::AppError;

const SESSION_TTL_HOURS: i64 = 24;
const REMEMBER_TTL_DAYS: i64 = 30;

pub struct AuthService {
    sessions: Arc<dyn SessionRepository>,
}

impl AuthService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Ok(Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string())
    }

    pub fn verify_password(&self, password: &str, password_hash: &str) -> Result<(), AppError> {
        let parsed_hash = PasswordHash::new(password_hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized)
    }

    /// Creates a DB-backed session and returns the raw cookie token with its
    /// expiry. `remember` trades the short-lived session for a persistent one.
    pub async fn open_session(
        &self,
        user: &User,
        remember: bool,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let raw_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();

        let now = Utc::now();
        let expires_at = if remember {
            now + Duration::days(REMEMBER_TTL_DAYS)
        } else {
            now + Duration::hours(SESSION_TTL_HOURS)
        };

        let record = SessionRecord {
            token_hash: self.hash_token(&raw_token),
            user_id: user.id.clone(),
            expires_at,
            created_at: now,
        };

        self.sessions.create(&record).await?;
        Ok((raw_token, expires_at))
    }

    pub async fn resolve_session(&self, raw_token: &str) -> Result<SessionRecord, AppError> {
        let token_hash = self.hash_token(raw_token);

        let record = self
            .sessions
            .find_by_token_hash(&token_hash)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if record.expires_at < Utc::now() {
            self.sessions.delete_by_token_hash(&token_hash).await?;
            return Err(AppError::Unauthorized);
        }

        Ok(record)
    }

    pub async fn close_session(&self, raw_token: &str) -> Result<(), AppError> {
        let token_hash = self.hash_token(raw_token);
        self.sessions.delete_by_token_hash(&token_hash).await
    }

    pub fn hash_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
