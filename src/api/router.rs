use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, health, order, tour};
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tower_cookies::CookieManagerLayer;
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth & sessions
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))

        // Catalog (mutations admin-only, enforced in handlers)
        .route("/api/v1/tours", get(tour::list_tours).post(tour::create_tour))
        .route("/api/v1/tours/{tour_id}", get(tour::get_tour).put(tour::update_tour).delete(tour::delete_tour))

        // Booking flow
        .route("/api/v1/tours/{tour_id}/book", post(order::book_tour))
        .route("/api/v1/orders/my", get(order::my_orders))

        // Orders
        .route("/api/v1/orders", get(order::list_all_orders))
        .route("/api/v1/orders/{order_id}", get(order::get_order).delete(order::delete_order))
        .route("/api/v1/orders/{order_id}/status", post(order::update_order_status))
        .route("/api/v1/orders/{order_id}/cancel", post(order::cancel_order))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
