//! Top-level route composition

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

/// Mount the buyer and seller surfaces under `/api/v1`
pub fn app(user: Router, seller: Router) -> Router {
    Router::new()
        .route("/", get(health))
        .nest("/api/v1/user", user)
        .nest("/api/v1/seller", seller)
        .fallback(route_not_found)
}

async fn health() -> &'static str {
    "Server is running"
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
