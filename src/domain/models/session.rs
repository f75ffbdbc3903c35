use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Server-side login session. Only the SHA-256 hash of the cookie token is
/// persisted, never the raw token.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SessionRecord {
    pub token_hash: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
