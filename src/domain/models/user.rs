use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            role: ROLE_USER.to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn new_admin(username: String, email: String, password_hash: String) -> Self {
        Self {
            role: ROLE_ADMIN.to_string(),
            ..Self::new(username, email, password_hash)
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
