use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::Store;
use crate::handlers::{faq, system, tech_stack, testimonial};
use crate::middleware::{preflight, with_cors_headers};

/// Shared by every handler. Cloning is cheap; the store handle is created once
/// at start-up and lives until shutdown.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(content_routes())
        .fallback(system::not_found)
        .method_not_allowed_fallback(system::method_not_allowed)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    with_cors_headers(router.with_state(state), &config.security.cors_allow_origin)
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/faq", get(faq::list).post(faq::create).options(preflight))
        .route("/faq/reorder", post(faq::reorder).options(preflight))
        .route(
            "/techstack",
            get(tech_stack::list).post(tech_stack::create).options(preflight),
        )
        .route(
            "/testimonial",
            get(testimonial::list).post(testimonial::create).options(preflight),
        )
}
