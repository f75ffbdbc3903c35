use crate::domain::models::{
    order::{Order, OrderStatus},
    session::SessionRecord,
    tour::Tour,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn create(&self, tour: &Tour) -> Result<Tour, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError>;
    async fn list_active(&self) -> Result<Vec<Tour>, AppError>;
    async fn list_all(&self) -> Result<Vec<Tour>, AppError>;
    async fn update(&self, tour: &Tour) -> Result<Tour, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<Order, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Order>, AppError>;
    async fn list_all(&self) -> Result<Vec<Order>, AppError>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn count_by_tour(&self, tour_id: &str) -> Result<i64, AppError>;
}

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: &SessionRecord) -> Result<(), AppError>;
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<SessionRecord>, AppError>;
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_expired(&self) -> Result<(), AppError>;
}
