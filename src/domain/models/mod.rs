pub mod order;
pub mod session;
pub mod tour;
pub mod user;
