use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::api::dtos::responses::OrderActionResponse;
use crate::api::extractors::auth::{AdminUser, AuthUser};
use crate::domain::models::order::{NewOrderParams, Order, OrderStatus};
use crate::domain::services::booking::{decide_cancellation, validate_guests_count, validate_start_date, CancelOutcome};
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use tracing::info;

pub async fn book_tour(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(tour_id): Path<String>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tour = state.tour_repo.find_by_id(&tour_id).await?
        .ok_or(AppError::NotFound("Tour not found".into()))?;

    if !tour.is_active {
        return Err(AppError::Validation("Tour is not open for booking".into()));
    }

    validate_guests_count(payload.guests_count)?;

    let start_date = NaiveDate::parse_from_str(&payload.start_date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid start date format (YYYY-MM-DD)".into()))?;
    validate_start_date(start_date, Utc::now().date_naive())?;

    let order = Order::new(&tour, NewOrderParams {
        user_id: user.id,
        guests_count: payload.guests_count,
        start_date,
        contact_phone: payload.contact_phone,
        contact_email: payload.contact_email,
        special_requests: payload.special_requests,
    });

    let created = state.order_repo.create(&order).await?;
    info!("Order created: {} for tour {}", created.id, tour.id);
    Ok(Json(created))
}

pub async fn my_orders(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_repo.list_by_user(&user.id).await?;
    Ok(Json(orders))
}

pub async fn list_all_orders(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let orders = state.order_repo.list_all().await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.order_repo.find_by_id(&order_id).await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    if order.user_id != user.id && !user.is_admin() {
        return Err(AppError::Forbidden("Not your order".into()));
    }

    Ok(Json(order))
}

pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(order_id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Unknown statuses are rejected before anything is touched. A known
    // status is applied unconditionally: the admin path has no transition
    // graph and may move an order backwards or revive a cancelled one.
    let status = OrderStatus::parse(&payload.status)
        .ok_or_else(|| AppError::Validation(format!("Unknown order status: {}", payload.status)))?;

    state.order_repo.find_by_id(&order_id).await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    let updated = state.order_repo.update_status(&order_id, status).await?;
    info!("Order {} status set to {}", updated.id, status.as_str());

    Ok(Json(OrderActionResponse {
        message: status.transition_notice().to_string(),
        order: updated,
    }))
}

pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.order_repo.find_by_id(&order_id).await?
        .ok_or(AppError::NotFound("Order not found".into()))?;

    if order.user_id != user.id && !user.is_admin() {
        return Err(AppError::Forbidden("Not your order".into()));
    }

    match decide_cancellation(order.status)? {
        CancelOutcome::AlreadyCancelled => Ok(Json(OrderActionResponse {
            message: "Order is already cancelled".to_string(),
            order,
        })),
        CancelOutcome::Cancelled => {
            let cancelled = state.order_repo.update_status(&order_id, OrderStatus::Cancelled).await?;
            info!("Order cancelled: {}", cancelled.id);
            Ok(Json(OrderActionResponse {
                message: "Order cancelled".to_string(),
                order: cancelled,
            }))
        }
    }
}

pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.order_repo.delete(&order_id).await?;
    info!("Order deleted: {}", order_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
