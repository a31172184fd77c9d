// handlers/system.rs - Service info and liveness

use axum::extract::State;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET / - Service name, version and route map
pub async fn root() -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "name": "Portfolio API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "faq": "GET, POST /faq",
            "faq_reorder": "POST /faq/reorder",
            "techstack": "GET, POST /techstack",
            "testimonial": "GET, POST /testimonial",
            "health": "GET /health",
        }
    })))
}

/// GET /health - Reports whether the storage backend answers
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => Ok(ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok",
        }))),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err(ApiError::service_unavailable("database unavailable"))
        }
    }
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}
