// handlers/testimonial.rs - GET/POST /testimonial

use axum::extract::State;
use tracing::info;

use super::{parse_input, RawBody};
use crate::app::AppState;
use crate::database::models::{NewTestimonial, Testimonial};
use crate::database::{OrderBy, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /testimonial - All testimonials, newest first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Testimonial>> {
    let testimonials = Repository::<Testimonial>::new(state.store.clone())
        .select_all(&OrderBy::newest_first())
        .await
        .map_err(|e| ApiError::storage("Failed to fetch testimonials", e))?;

    Ok(ApiResponse::success(testimonials))
}

/// POST /testimonial - Validate then store one testimonial.
/// Rating must be 1-5 when present; content and name must not be blank.
pub async fn create(State(state): State<AppState>, body: RawBody) -> ApiResult<Testimonial> {
    let body = body?;
    let input: NewTestimonial = parse_input(&body)?;

    let testimonial = Repository::<Testimonial>::new(state.store.clone())
        .create_one(&input)
        .await
        .map_err(|e| ApiError::storage("Failed to create testimonial", e))?;

    info!(id = %testimonial.id, "Created testimonial");
    Ok(ApiResponse::created(testimonial))
}
