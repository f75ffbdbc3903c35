use crate::domain::{models::session::SessionRecord, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteSessionRepo {
    pool: SqlitePool,
}

impl SqliteSessionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepo {
    async fn create(&self, session: &SessionRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO sessions (token_hash, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
            .bind(&session.token_hash).bind(&session.user_id)
            .bind(session.expires_at).bind(session.created_at)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError> {
        sqlx::query_as::<_, SessionRecord>("SELECT * FROM sessions WHERE token_hash = ?")
            .bind(token_hash).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete_expired(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(Utc::now()).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
