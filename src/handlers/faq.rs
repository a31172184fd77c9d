// handlers/faq.rs - FAQ listing, creation and bulk reordering

use axum::extract::State;
use serde_json::{json, Map, Value};
use tracing::info;

use super::{parse_input, parse_json, RawBody};
use crate::app::AppState;
use crate::database::models::{Faq, NewFaq};
use crate::database::{Direction, OrderBy, RecordUpdate, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// One requested position from a reorder body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderItem {
    pub id: String,
    pub order: i32,
}

/// Display order: explicit position, oldest first among equals
fn display_order() -> OrderBy {
    OrderBy::new("order", Direction::Asc).then("created_at", Direction::Asc)
}

/// GET /faq - All FAQs in display order
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Faq>> {
    let faqs = Repository::<Faq>::new(state.store.clone())
        .select_all(&display_order())
        .await
        .map_err(|e| ApiError::storage("Failed to fetch FAQs", e))?;

    Ok(ApiResponse::success(faqs))
}

/// POST /faq - Create one FAQ
pub async fn create(State(state): State<AppState>, body: RawBody) -> ApiResult<Faq> {
    let body = body?;
    let input: NewFaq = parse_input(&body)?;

    let faq = Repository::<Faq>::new(state.store.clone())
        .create_one(&input)
        .await
        .map_err(|e| ApiError::storage("Failed to create FAQ", e))?;

    info!(id = %faq.id, "Created FAQ");
    Ok(ApiResponse::created(faq))
}

/**
 * POST /faq/reorder - Apply new display positions in one transaction
 *
 * Expected Input:
 * ```json
 * { "items": [{ "id": "faq-id", "order": 0 }, ...] }
 * ```
 *
 * Every update commits or none does. Duplicate ids are applied in sequence,
 * so the last occurrence decides the final position.
 */
pub async fn reorder(State(state): State<AppState>, body: RawBody) -> ApiResult<Vec<Faq>> {
    let body = body?;
    let payload: Value = parse_json(&body)?;
    let items = parse_reorder_items(&payload)?;
    let count = items.len();

    let updates = items
        .into_iter()
        .map(|item| {
            let mut fields = Map::new();
            fields.insert("order".into(), json!(item.order));
            RecordUpdate::new(item.id, fields)
        })
        .collect();

    let updated = Repository::<Faq>::new(state.store.clone())
        .update_all(updates)
        .await
        .map_err(|e| ApiError::storage("Failed to reorder FAQs", e))?;

    info!(count, "Reordered FAQs");
    Ok(ApiResponse::success(updated).with_message("FAQs reordered successfully"))
}

/// Shape check for the reorder body. Nothing is written unless every item
/// has a non-empty string `id` and an integral numeric `order`.
pub fn parse_reorder_items(payload: &Value) -> Result<Vec<ReorderItem>, ApiError> {
    let items = payload
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(ApiError::invalid_format)?;

    items
        .iter()
        .map(|item| {
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.is_empty())
                .ok_or_else(ApiError::invalid_format)?;
            let order = item
                .get("order")
                .and_then(integral_order)
                .ok_or_else(ApiError::invalid_format)?;
            Ok(ReorderItem {
                id: id.to_string(),
                order,
            })
        })
        .collect()
}

/// Accept `3` and `3.0`; reject fractions and values outside the column range
fn integral_order(value: &Value) -> Option<i32> {
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.fract() != 0.0 || f < i32::MIN as f64 || f > i32::MAX as f64 {
        return None;
    }
    Some(f as i32)
}
