use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateTourRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration_days: i32,
    pub destination: String,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTourRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration_days: Option<i32>,
    pub destination: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub guests_count: i32,
    pub start_date: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub special_requests: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}
