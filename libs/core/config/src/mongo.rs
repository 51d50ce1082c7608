use crate::{ConfigError, FromEnv, env_or_default, env_required};

/// MongoDB configuration
#[derive(Clone, Debug)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl MongoConfig {
    pub fn new(uri: String, database: String) -> Self {
        Self { uri, database }
    }
}

impl FromEnv for MongoConfig {
    /// Requires MONGO_URI to be set; MONGO_DB defaults to `wtwr_db`
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            uri: env_required("MONGO_URI")?,
            database: env_or_default("MONGO_DB", "wtwr_db"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_uri_and_database() {
        temp_env::with_vars(
            [
                ("MONGO_URI", Some("mongodb://localhost:27017")),
                ("MONGO_DB", Some("wtwr_test")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.uri, "mongodb://localhost:27017");
                assert_eq!(config.database, "wtwr_test");
            },
        );
    }

    #[test]
    fn from_env_defaults_database_name() {
        temp_env::with_vars(
            [
                ("MONGO_URI", Some("mongodb://localhost:27017")),
                ("MONGO_DB", None::<&str>),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.database, "wtwr_db");
            },
        );
    }

    #[test]
    fn from_env_requires_uri() {
        temp_env::with_var_unset("MONGO_URI", || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGO_URI"));
        });
    }
}
