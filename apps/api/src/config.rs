use axum_helpers::JwtConfig;
use core_config::{ConfigError, Environment, FromEnv, mongo::MongoConfig, server::ServerConfig};
use domain_users::PasswordConfig;
use std::env;

/// Aggregated process configuration, loaded once at startup and immutable
/// for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongo: MongoConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            password: password_config_from_env()?,
        })
    }
}

/// Argon2 cost overrides; each falls back to the crate default when unset
fn password_config_from_env() -> Result<PasswordConfig, ConfigError> {
    let mut config = PasswordConfig::default();

    if let Some(value) = parse_env("PASSWORD_HASH_MEMORY_KIB")? {
        config.memory_kib = value;
    }
    if let Some(value) = parse_env("PASSWORD_HASH_ITERATIONS")? {
        config.iterations = value;
    }
    if let Some(value) = parse_env("PASSWORD_HASH_PARALLELISM")? {
        config.parallelism = value;
    }

    Ok(config)
}

fn parse_env(key: &str) -> Result<Option<u32>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| ConfigError::ParseError {
                key: key.to_string(),
                details: format!("{}", e),
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED_VARS: [(&str, Option<&str>); 2] = [
        ("MONGO_URI", Some("mongodb://localhost:27017")),
        ("JWT_SECRET", Some("test-secret-0123456789abcdef-0123456789")),
    ];

    #[test]
    fn from_env_with_required_vars() {
        temp_env::with_vars(REQUIRED_VARS, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.mongo.database, "wtwr_db");
            assert_eq!(config.server.port, 3001);
        });
    }

    #[test]
    fn from_env_fails_without_mongo_uri() {
        temp_env::with_vars(
            [
                ("MONGO_URI", None),
                ("JWT_SECRET", Some("test-secret-0123456789abcdef-0123456789")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn password_overrides_are_parsed() {
        let mut vars: Vec<(&str, Option<&str>)> = REQUIRED_VARS.to_vec();
        vars.push(("PASSWORD_HASH_MEMORY_KIB", Some("65536")));
        vars.push(("PASSWORD_HASH_ITERATIONS", Some("3")));

        temp_env::with_vars(vars, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.password.memory_kib, 65536);
            assert_eq!(config.password.iterations, 3);
            assert_eq!(config.password.parallelism, PasswordConfig::default().parallelism);
        });
    }

    #[test]
    fn invalid_password_override_is_rejected() {
        let mut vars: Vec<(&str, Option<&str>)> = REQUIRED_VARS.to_vec();
        vars.push(("PASSWORD_HASH_ITERATIONS", Some("lots")));

        temp_env::with_vars(vars, || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PASSWORD_HASH_ITERATIONS"));
        });
    }
}
