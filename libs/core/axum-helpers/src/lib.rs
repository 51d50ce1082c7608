//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the WTWR HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: stateless JWT authentication and identity resolution
//! - **[`errors`]**: the error taxonomy and the single response translator
//! - **[`extractors`]**: custom extractors (validated JSON, UUID path params)
//! - **[`http`]**: CORS configuration
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{Identity, JwtAuth, JwtClaims, JwtConfig, TOKEN_TTL_SECONDS, auth_middleware};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};

// Re-export server types
pub use server::{create_app, create_router, health_router, shutdown_signal};
