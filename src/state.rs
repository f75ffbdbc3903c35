use std::sync::Arc;
use crate::domain::ports::{OrderRepository, SessionRepository, TourRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub tour_repo: Arc<dyn TourRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub auth_service: Arc<AuthService>,
}
