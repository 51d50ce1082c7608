//! Type-safe error codes for API responses.
//!
//! Single source of truth for the failure kinds the API can report. Each
//! code pairs a string identifier (for clients) with an integer code (for
//! logging and monitoring) and a default human-readable message.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1099)
    /// Malformed or missing input
    BadRequest,

    /// Request validation failed
    ValidationError,

    /// Invalid identifier format in a path parameter
    InvalidId,

    /// Invalid JSON in the request body
    InvalidJson,

    /// Authentication credentials are missing or invalid
    Unauthorized,

    /// Authenticated caller lacks permission for this resource
    Forbidden,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current state (e.g. duplicate resource)
    Conflict,

    // Server errors (1500+)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// String identifier for client consumption
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for logging and monitoring
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::BadRequest => 1000,
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidId => 1002,
            ErrorCode::InvalidJson => 1003,
            ErrorCode::Unauthorized => 1010,
            ErrorCode::Forbidden => 1011,
            ErrorCode::NotFound => 1020,
            ErrorCode::Conflict => 1021,
            ErrorCode::InternalError => 1500,
        }
    }

    /// Default human-readable message
    pub const fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "Bad request",
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidId => "Invalid identifier format",
            ErrorCode::InvalidJson => "Invalid JSON in request body",
            ErrorCode::Unauthorized => "Authorization required",
            ErrorCode::Forbidden => "Access denied",
            ErrorCode::NotFound => "Requested resource not found",
            ErrorCode::Conflict => "Resource already exists",
            ErrorCode::InternalError => "An error has occurred on the server",
        }
    }
}
