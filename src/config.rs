use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_password: String,
    pub seed_demo_tours: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@tours.local".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set"),
            seed_demo_tours: env::var("SEED_DEMO_TOURS").map(|v| v == "true" || v == "1").unwrap_or(false),
        }
    }
}
