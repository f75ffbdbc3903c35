use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateTourRequest, UpdateTourRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::tour::{NewTourParams, Tour};
use std::sync::Arc;
use tracing::info;

pub async fn list_tours(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let tours = state.tour_repo.list_active().await?;
    Ok(Json(tours))
}

pub async fn get_tour(
    State(state): State<Arc<AppState>>,
    Path(tour_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tour = state.tour_repo.find_by_id(&tour_id).await?
        .ok_or(AppError::NotFound("Tour not found".into()))?;
    Ok(Json(tour))
}

pub async fn create_tour(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateTourRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.price <= 0.0 {
        return Err(AppError::Validation("Price must be positive".into()));
    }
    if payload.duration_days <= 0 {
        return Err(AppError::Validation("Duration must be at least one day".into()));
    }

    let tour = Tour::new(NewTourParams {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        duration_days: payload.duration_days,
        destination: payload.destination,
        image_url: payload.image_url,
    });

    let created = state.tour_repo.create(&tour).await?;
    info!("Tour created: {}", created.id);
    Ok(Json(created))
}

pub async fn update_tour(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(tour_id): Path<String>,
    Json(payload): Json<UpdateTourRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut tour = state.tour_repo.find_by_id(&tour_id).await?
        .ok_or(AppError::NotFound("Tour not found".into()))?;

    if let Some(name) = payload.name { tour.name = name; }
    if let Some(description) = payload.description { tour.description = description; }
    if let Some(price) = payload.price {
        if price <= 0.0 {
            return Err(AppError::Validation("Price must be positive".into()));
        }
        tour.price = price;
    }
    if let Some(duration_days) = payload.duration_days {
        if duration_days <= 0 {
            return Err(AppError::Validation("Duration must be at least one day".into()));
        }
        tour.duration_days = duration_days;
    }
    if let Some(destination) = payload.destination { tour.destination = destination; }
    if let Some(image_url) = payload.image_url { tour.image_url = image_url; }
    if let Some(is_active) = payload.is_active { tour.is_active = is_active; }

    let updated = state.tour_repo.update(&tour).await?;
    info!("Tour updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_tour(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(tour_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.tour_repo.find_by_id(&tour_id).await?
        .ok_or(AppError::NotFound("Tour not found".into()))?;

    // Orders keep a snapshot of price and dates but still reference the tour
    // row, so deletion is refused while any order points at it.
    let order_count = state.order_repo.count_by_tour(&tour_id).await?;
    if order_count > 0 {
        return Err(AppError::Conflict(format!(
            "Tour has {} order(s) and cannot be deleted",
            order_count
        )));
    }

    state.tour_repo.delete(&tour_id).await?;
    info!("Tour deleted: {}", tour_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
