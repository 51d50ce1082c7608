//! Stateless JWT authentication.
//!
//! [`JwtAuth`] issues and verifies the signed, time-limited identity tokens;
//! [`auth_middleware`] resolves the bearer token on protected routes and
//! attaches an [`Identity`] to the request. Tokens are verified by signature
//! and expiry only; nothing is persisted server-side.

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, TOKEN_TTL_SECONDS};
pub use middleware::{Identity, auth_middleware};
