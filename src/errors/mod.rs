use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Every failure a handler can produce, mapped to an HTTP status and a JSON
/// body in one place. Nothing propagates past the handler boundary.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed client input (missing required fields, bad age). 400.
    Validation(String),
    /// A required key is absent from the update body. 400.
    MissingKey(String),
    /// A field carries the wrong type. 400.
    InvalidValue(String),
    /// No record for the given id; rendered as `{"error": ...}`. 404.
    NotFound(String),
    /// No record for the given id; rendered as `{"message": ...}`. 404.
    /// Update and delete use this shape, get-by-id uses `NotFound` — the
    /// two shapes are kept distinct for compatibility with existing
    /// clients.
    NotFoundMessage(String),
    /// The store rejected a write due to a constraint. 500.
    Integrity(String),
    /// Any other failure. 500.
    InternalServerError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::MissingKey(key) => write!(f, "Missing key in JSON data: '{}'", key),
            ApiError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::NotFoundMessage(msg) => write!(f, "{}", msg),
            ApiError::Integrity(msg) => write!(f, "Database integrity error: {}", msg),
            ApiError::InternalServerError(msg) => write!(f, "{}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(_) | ApiError::MissingKey(_) | ApiError::InvalidValue(_) => {
                HttpResponse::BadRequest().json(ErrorResponse { error: self.to_string() })
            }
            ApiError::NotFound(_) => {
                HttpResponse::NotFound().json(ErrorResponse { error: self.to_string() })
            }
            ApiError::NotFoundMessage(_) => {
                HttpResponse::NotFound().json(MessageResponse { message: self.to_string() })
            }
            ApiError::Integrity(_) | ApiError::InternalServerError(_) => {
                HttpResponse::InternalServerError().json(ErrorResponse { error: self.to_string() })
            }
        }
    }
}
