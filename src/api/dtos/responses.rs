use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::domain::models::{order::Order, user::User};

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct OrderActionResponse {
    pub order: Order,
    pub message: String,
}
