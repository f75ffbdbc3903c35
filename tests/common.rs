use tours_backend::{
    api::router::create_router,
    config::Config,
    domain::models::user::User,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_order_repo::SqliteOrderRepo,
        sqlite_session_repo::SqliteSessionRepo,
        sqlite_tour_repo::SqliteTourRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_username: "admin".to_string(),
            admin_email: "admin@tours.local".to_string(),
            admin_password: "admin-secret".to_string(),
            seed_demo_tours: false,
        };

        let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(session_repo.clone()));

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            tour_repo: Arc::new(SqliteTourRepo::new(pool.clone())),
            order_repo: Arc::new(SqliteOrderRepo::new(pool.clone())),
            session_repo,
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Inserts an admin account directly, bypassing the public registration
    /// path which only ever produces regular users.
    #[allow(dead_code)]
    pub async fn create_admin(&self, username: &str, password: &str) -> User {
        let password_hash = self.state.auth_service.hash_password(password).unwrap();
        let admin = User::new_admin(
            username.to_string(),
            format!("{}@tours.local", username),
            password_hash,
        );
        self.state.user_repo.create(&admin).await.unwrap()
    }

    #[allow(dead_code)]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> axum::response::Response {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
            "confirm_password": password
        });

        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    /// Logs in and returns the raw session token from the Set-Cookie header.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let payload = serde_json::json!({
            "username": username,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let session_cookie = cookies.iter()
            .find(|c| c.contains("session_token="))
            .expect("No session_token cookie returned");

        let start = session_cookie.find("session_token=").unwrap() + 14;
        let end = session_cookie[start..].find(';').unwrap_or(session_cookie.len() - start);
        session_cookie[start..start + end].to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
