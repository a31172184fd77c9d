pub mod cors;
pub mod response;

pub use cors::with_cors_headers;
pub use response::{json_response, preflight, ApiResponse, ApiResult};
