// handlers/mod.rs - Resource endpoints
//
// Every handler is stateless: it parses the body, talks to the storage port
// held in `AppState`, and answers with the `{success, data|error}` envelope.

pub mod faq;
pub mod system;
pub mod tech_stack;
pub mod testimonial;

use axum::{body::Bytes, extract::rejection::BytesRejection};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::database::models::Validate;
use crate::error::ApiError;

/// Request body with its rejection kept, so an over-limit body still answers
/// with the JSON envelope
pub type RawBody = Result<Bytes, BytesRejection>;

/// Parse a request body without requiring a JSON content type.
/// Anything unparseable is a shape error.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::invalid_format()
    })
}

/// Parse then validate a create payload
pub(crate) fn parse_input<T: DeserializeOwned + Validate>(body: &[u8]) -> Result<T, ApiError> {
    let value: Value = parse_json(body)?;
    if !value.is_object() {
        return Err(ApiError::invalid_format());
    }
    let input: T = serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        ApiError::invalid_format()
    })?;
    input.validate().map_err(|fields| {
        tracing::debug!(?fields, "Rejected invalid payload");
        ApiError::validation_error(fields)
    })?;
    Ok(input)
}
