use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

use super::cors::{apply_cors_headers, ALLOW_ORIGIN_ANY};

/// Serialize `payload` as the response body with the JSON content type and the
/// cross-origin headers every response carries. Defaults to 200.
pub fn json_response(payload: &Value, status: Option<StatusCode>) -> Response {
    let status = status.unwrap_or(StatusCode::OK);
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            return json_response(
                &json!({ "success": false, "error": "Failed to serialize response data" }),
                Some(StatusCode::INTERNAL_SERVER_ERROR),
            );
        }
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    apply_cors_headers(response.headers_mut(), HeaderValue::from_static(ALLOW_ORIGIN_ANY));
    response
}

/// Answer an OPTIONS preflight: 204, empty body, CORS headers
pub async fn preflight() -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::NO_CONTENT;
    apply_cors_headers(response.headers_mut(), HeaderValue::from_static(ALLOW_ORIGIN_ANY));
    response
}

/// Wrapper for API responses that automatically adds success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: Option<String>,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
            status_code: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            message: None,
            status_code: Some(status_code),
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    /// Attach a human-readable `message` next to `data`
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return json_response(
                    &json!({ "success": false, "error": "Failed to serialize response data" }),
                    Some(StatusCode::INTERNAL_SERVER_ERROR),
                );
            }
        };

        let mut envelope = json!({
            "success": true,
            "data": data_value
        });
        if let Some(message) = self.message {
            envelope["message"] = Value::String(message);
        }

        json_response(&envelope, self.status_code)
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type, Authorization");
    }

    #[tokio::test]
    async fn json_response_sets_content_type_and_cors() {
        let response = json_response(&json!({ "success": true, "data": [] }), None);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_cors(&response);
        assert_eq!(body_json(response).await, json!({ "success": true, "data": [] }));
    }

    #[tokio::test]
    async fn preflight_is_empty_204() {
        let response = preflight().await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_cors(&response);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn envelope_carries_message_and_status() {
        let response = ApiResponse::created(vec![1, 2]).with_message("done").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_cors(&response);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "data": [1, 2], "message": "done" })
        );
    }
}
