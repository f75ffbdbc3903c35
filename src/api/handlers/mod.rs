pub mod auth;
pub mod health;
pub mod order;
pub mod tour;
