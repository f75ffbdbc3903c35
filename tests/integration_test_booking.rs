mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Admin creates a tour, a regular user logs in; returns (tour_id, user_token).
async fn create_setup(app: &TestApp, price: f64, duration_days: i32) -> (String, String) {
    app.create_admin("admin", "admin-secret").await;
    let admin_token = app.login("admin", "admin-secret").await;

    let payload = json!({
        "name": "Test Tour",
        "description": "A tour for booking tests",
        "price": price,
        "duration_days": duration_days,
        "destination": "Testville"
    });
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/tours")
            .header(header::COOKIE, format!("session_token={}", admin_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    let tour = parse_body(res).await;

    app.register("guest", "guest@example.com", "secret123").await;
    let user_token = app.login("guest", "secret123").await;

    (tour["id"].as_str().unwrap().to_string(), user_token)
}

async fn book(app: &TestApp, token: &str, tour_id: &str, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/tours/{}/book", tour_id))
            .header(header::COOKIE, format!("session_token={}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

async fn my_orders(app: &TestApp, token: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/orders/my")
            .header(header::COOKIE, format!("session_token={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await
}

#[tokio::test]
async fn test_booking_derives_dates_and_price() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1500.0, 7).await;

    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 3,
        "start_date": "2030-06-01",
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com",
        "special_requests": "Window seats please"
    })).await;

    assert_eq!(res.status(), StatusCode::OK);
    let order = parse_body(res).await;

    assert_eq!(order["start_date"], "2030-06-01");
    assert_eq!(order["end_date"], "2030-06-08");
    assert_eq!(order["total_price"], 4500.0);
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["guests_count"], 3);
    assert_eq!(order["special_requests"], "Window seats please");
}

#[tokio::test]
async fn test_booking_price_is_a_snapshot() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1000.0, 5).await;

    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 2,
        "start_date": "2030-03-10",
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let order = parse_body(res).await;
    let order_id = order["id"].as_str().unwrap();

    // Admin doubles the tour price afterwards
    let admin_token = app.login("admin", "admin-secret").await;
    let update = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/tours/{}", tour_id))
            .header(header::COOKIE, format!("session_token={}", admin_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"price": 2000.0}).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(update.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/orders/{}", order_id))
            .header(header::COOKIE, format!("session_token={}", token))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let fetched = parse_body(res).await;
    assert_eq!(fetched["total_price"], 2000.0);
}

#[tokio::test]
async fn test_booking_rejects_bad_guest_counts() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1000.0, 5).await;

    for guests in [0, 11, -1] {
        let res = book(&app, &token, &tour_id, json!({
            "guests_count": guests,
            "start_date": "2030-06-01",
            "contact_phone": "+1234567",
            "contact_email": "guest@example.com"
        })).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "guests_count {} should be rejected", guests);
    }

    // Nothing persisted
    let orders = my_orders(&app, &token).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_rejects_past_start_date() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1000.0, 5).await;

    let yesterday = (Utc::now() - Duration::days(1)).format("%Y-%m-%d").to_string();
    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 2,
        "start_date": yesterday,
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Booking for today is allowed
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 2,
        "start_date": today,
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_booking_rejects_malformed_date() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1000.0, 5).await;

    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 2,
        "start_date": "01.06.2030",
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_requires_authentication() {
    let app = TestApp::new().await;
    let (tour_id, _) = create_setup(&app, 1000.0, 5).await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/tours/{}/book", tour_id))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "guests_count": 2,
                "start_date": "2030-06-01",
                "contact_phone": "+1234567",
                "contact_email": "guest@example.com"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_booking_unknown_tour_is_not_found() {
    let app = TestApp::new().await;
    let (_, token) = create_setup(&app, 1000.0, 5).await;

    let res = book(&app, &token, "does-not-exist", json!({
        "guests_count": 2,
        "start_date": "2030-06-01",
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_inactive_tour_is_rejected() {
    let app = TestApp::new().await;
    let (tour_id, token) = create_setup(&app, 1000.0, 5).await;

    let admin_token = app.login("admin", "admin-secret").await;
    app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/tours/{}", tour_id))
            .header(header::COOKIE, format!("session_token={}", admin_token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"is_active": false}).to_string())).unwrap()
    ).await.unwrap();

    let res = book(&app, &token, &tour_id, json!({
        "guests_count": 2,
        "start_date": "2030-06-01",
        "contact_phone": "+1234567",
        "contact_email": "guest@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
