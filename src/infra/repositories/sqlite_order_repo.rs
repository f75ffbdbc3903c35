use crate::domain::{models::order::{Order, OrderStatus}, ports::OrderRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

pub struct SqliteOrderRepo {
    pool: SqlitePool,
}

impl SqliteOrderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for SqliteOrderRepo {
    async fn create(&self, order: &Order) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>(
            "INSERT INTO orders (id, user_id, tour_id, guests_count, total_price, start_date, end_date, contact_phone, contact_email, special_requests, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
            .bind(&order.id).bind(&order.user_id).bind(&order.tour_id).bind(order.guests_count)
            .bind(order.total_price).bind(order.start_date).bind(order.end_date)
            .bind(&order.contact_phone).bind(&order.contact_email).bind(&order.special_requests)
            .bind(order.status).bind(order.created_at).bind(order.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE user_id = ? ORDER BY created_at DESC")
            .bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = ?, updated_at = ? WHERE id = ? RETURNING *",
        )
            .bind(status).bind(Utc::now()).bind(id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order not found".into()));
        }
        Ok(())
    }

    async fn count_by_tour(&self, tour_id: &str) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM orders WHERE tour_id = ?")
            .bind(tour_id).fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
