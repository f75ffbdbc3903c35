pub mod sqlite_user_repo;
pub mod sqlite_tour_repo;
pub mod sqlite_order_repo;
pub mod sqlite_session_repo;

pub mod postgres_user_repo;
pub mod postgres_tour_repo;
pub mod postgres_order_repo;
pub mod postgres_session_repo;
