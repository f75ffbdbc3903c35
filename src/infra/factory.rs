use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::models::tour::{NewTourParams, Tour};
use crate::domain::models::user::User;
use crate::domain::services::auth_service::AuthService;
use crate::error::AppError;
use crate::infra::repositories::{
    postgres_order_repo::PostgresOrderRepo, postgres_session_repo::PostgresSessionRepo,
    postgres_tour_repo::PostgresTourRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_order_repo::SqliteOrderRepo, sqlite_session_repo::SqliteSessionRepo,
    sqlite_tour_repo::SqliteTourRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let session_repo = Arc::new(PostgresSessionRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(session_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            tour_repo: Arc::new(PostgresTourRepo::new(pool.clone())),
            order_repo: Arc::new(PostgresOrderRepo::new(pool.clone())),
            session_repo,
            auth_service,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let session_repo = Arc::new(SqliteSessionRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(session_repo.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            tour_repo: Arc::new(SqliteTourRepo::new(pool.clone())),
            order_repo: Arc::new(SqliteOrderRepo::new(pool.clone())),
            session_repo,
            auth_service,
        }
    };

    seed_initial_data(&state)
        .await
        .expect("Failed to seed initial data");

    state
}

/// Ensures the configured admin account exists and, when enabled, fills an
/// empty catalog with the demo tours. Also sweeps sessions that expired
/// while the server was down.
async fn seed_initial_data(state: &AppState) -> Result<(), AppError> {
    state.session_repo.delete_expired().await?;

    if state.user_repo.find_by_username(&state.config.admin_username).await?.is_none() {
        let password_hash = state.auth_service.hash_password(&state.config.admin_password)?;
        let admin = User::new_admin(
            state.config.admin_username.clone(),
            state.config.admin_email.clone(),
            password_hash,
        );
        state.user_repo.create(&admin).await?;
        info!("Admin account created: {}", admin.username);
    }

    if state.config.seed_demo_tours && state.tour_repo.list_all().await?.is_empty() {
        for params in demo_tours() {
            state.tour_repo.create(&Tour::new(params)).await?;
        }
        info!("Demo tours seeded");
    }

    Ok(())
}

fn demo_tours() -> Vec<NewTourParams> {
    vec![
        NewTourParams {
            name: "Parisian Romance".to_string(),
            description: "A romantic walk through Paris with visits to the Eiffel Tower and the Louvre.".to_string(),
            price: 1500.0,
            duration_days: 7,
            destination: "Paris, France".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1502602898536-47ad22581b52?auto=format&fit=crop&w=1000&q=80".to_string()),
        },
        NewTourParams {
            name: "Alpine Adventures".to_string(),
            description: "Trekking and skiing in the Swiss Alps.".to_string(),
            price: 2500.0,
            duration_days: 10,
            destination: "Alps, Switzerland".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?auto=format&fit=crop&w=1000&q=80".to_string()),
        },
        NewTourParams {
            name: "Beach Relaxation in Bali".to_string(),
            description: "Unwind on white-sand beaches with yoga and spa.".to_string(),
            price: 2000.0,
            duration_days: 14,
            destination: "Bali, Indonesia".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1518548419970-58e3b4079ab2?auto=format&fit=crop&w=1000&q=80".to_string()),
        },
    ]
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
