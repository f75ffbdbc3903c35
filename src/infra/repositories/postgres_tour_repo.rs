use crate::domain::{models::tour::Tour, ports::TourRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresTourRepo {
    pool: PgPool,
}

impl PostgresTourRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TourRepository for PostgresTourRepo {
    async fn create(&self, tour: &Tour) -> Result<Tour, AppError> {
        sqlx::query_as::<_, Tour>(
            "INSERT INTO tours (id, name, description, price, duration_days, destination, image_url, is_active, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
            .bind(&tour.id)
            .bind(&tour.name)
            .bind(&tour.description)
            .bind(tour.price)
            .bind(tour.duration_days)
            .bind(&tour.destination)
            .bind(&tour.image_url)
            .bind(tour.is_active)
            .bind(tour.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours WHERE is_active = TRUE ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Tour>, AppError> {
        sqlx::query_as::<_, Tour>("SELECT * FROM tours ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, tour: &Tour) -> Result<Tour, AppError> {
        sqlx::query_as::<_, Tour>(
            "UPDATE tours SET name=$1, description=$2, price=$3, duration_days=$4, destination=$5, image_url=$6, is_active=$7
             WHERE id=$8
             RETURNING *",
        )
            .bind(&tour.name)
            .bind(&tour.description)
            .bind(tour.price)
            .bind(tour.duration_days)
            .bind(&tour.destination)
            .bind(&tour.image_url)
            .bind(tour.is_active)
            .bind(&tour.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tours WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tour not found".into()));
        }
        Ok(())
    }
}
