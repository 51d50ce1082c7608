//! JWT configuration, loaded once at process start.

use core_config::{ConfigError, FromEnv, env_required};

/// Minimum length for the signing secret
const MIN_SECRET_LEN: usize = 32;

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - must be at least 32 characters
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("a-test-secret-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret.
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least {} characters",
            MIN_SECRET_LEN
        );
        Self { secret }
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        Ok(Self { secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_accepts_long_secret() {
        temp_env::with_var(
            "JWT_SECRET",
            Some("0123456789abcdef0123456789abcdef"),
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret.len(), 32);
            },
        );
    }

    #[test]
    fn from_env_rejects_short_secret() {
        temp_env::with_var("JWT_SECRET", Some("too-short"), || {
            let err = JwtConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("JWT_SECRET"));
        });
    }

    #[test]
    fn from_env_requires_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            assert!(JwtConfig::from_env().is_err());
        });
    }

    #[test]
    #[should_panic(expected = "at least 32 characters")]
    fn new_panics_on_short_secret() {
        JwtConfig::new("short");
    }
}
