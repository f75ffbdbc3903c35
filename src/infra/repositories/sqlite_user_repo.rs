use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUserRepo {
    pool: SqlitePool,
}

impl SqliteUserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, email, password_hash, role, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&user.id).bind(&user.username).bind(&user.email)
            .bind(&user.password_hash).bind(&user.role).bind(user.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
}
