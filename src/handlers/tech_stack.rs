// handlers/tech_stack.rs - GET/POST /techstack

use axum::extract::State;
use tracing::info;

use super::{parse_input, RawBody};
use crate::app::AppState;
use crate::database::models::{NewTechStack, TechStack};
use crate::database::{OrderBy, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// GET /techstack - All entries, most recently added first
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<TechStack>> {
    let stacks = Repository::<TechStack>::new(state.store.clone())
        .select_all(&OrderBy::newest_first())
        .await
        .map_err(|e| ApiError::storage("Failed to fetch tech stacks", e))?;

    Ok(ApiResponse::success(stacks))
}

/// POST /techstack - Create one entry from the request fields
pub async fn create(State(state): State<AppState>, body: RawBody) -> ApiResult<TechStack> {
    let body = body?;
    let input: NewTechStack = parse_input(&body)?;

    let stack = Repository::<TechStack>::new(state.store.clone())
        .create_one(&input)
        .await
        .map_err(|e| ApiError::storage("Failed to create tech stack", e))?;

    info!(id = %stack.id, name = %stack.name, "Created tech stack");
    Ok(ApiResponse::created(stack))
}
