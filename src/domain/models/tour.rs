use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/300x200?text=Tour+Image";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Tour {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: i32,
    pub destination: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewTourParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: i32,
    pub destination: String,
    pub image_url: Option<String>,
}

impl Tour {
    pub fn new(params: NewTourParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            description: params.description,
            price: params.price,
            duration_days: params.duration_days,
            destination: params.destination,
            image_url: params.image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
