use actix_web::error::{self, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

pub mod prices;

/// JSON body returned with every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Short error label.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "Price not found", message)
    }

    pub fn internal() -> Self {
        Self::new(
            500,
            "Internal Server Error",
            "An internal error occurred. Please contact the system administrator.",
        )
    }
}

/// Query extractor configuration that reports missing or mistyped
/// parameters as a JSON error body instead of the default text response.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::bad_request(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
