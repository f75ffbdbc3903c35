use crate::domain::{models::tour::Tour, ports::TourRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTourRepo {
    pool: SqlitePool,
}

impl SqliteTourRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourRepository for SqliteTourRepo {
    async fn create(&self, tour: &Tour) -> Result<Tour, AppError> {
        sqlx::query_as::<_, Tour>(
            "INSERT INTO tours (id, name, description, price, duration_days, destination, image_url, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&tour.id).bind(&tour.name).bind(&tour.description).bind(tour.price)
            .bind(tour.duration_days).bind(&tour.destination).bind(&tour.image_url)
            .bind(tour.is_active).bind(tour.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE is_active = 1 ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, tour: &Tour) -> Result<Tour, AppError> {
        sqlx::query_as::<_, Tour>(
            "UPDATE tours SET name=?, description=?, price=?, duration_days=?, destination=?, image_url=?, is_active=?
             WHERE id=?
             RETURNING *",
        )
            .bind(&tour.name).bind(&tour.description).bind(tour.price).bind(tour.duration_days)
            .bind(&tour.destination).bind(&tour.image_url).bind(tour.is_active)
            .bind(&tour.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tours WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tour not found".into()));
        }
        Ok(())
    }
}
