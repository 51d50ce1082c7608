use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{SignupRequest, UpdateProfile, User, UserResponse};
use crate::repository::UserRepository;

/// Password policy bounds. The floor is a deliberate policy choice; the
/// original service only required the field to be present.
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 128;

/// Argon2 cost parameters, tunable at startup through the process
/// configuration. Defaults are the argon2 crate's recommended costs.
#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl PasswordConfig {
    fn params(&self) -> Result<Params, argon2::Error> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
    }
}

/// Service layer for user accounts and credentials.
///
/// Exclusively owns password hashing: plaintext passwords enter here on
/// signup/signin and only argon2 hashes leave toward the repository.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    hasher: Argon2<'static>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a service with default hashing costs
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: Argon2::default(),
        }
    }

    /// Create a service with hashing costs from configuration
    pub fn with_config(repository: R, config: &PasswordConfig) -> UserResult<Self> {
        let params = config
            .params()
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Self {
            repository: Arc::new(repository),
            hasher: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Register a new user with a hashed password
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: SignupRequest) -> UserResult<UserResponse> {
        validate_password(&input.password)?;

        let password_hash = self.hash_password(&input.password)?;

        let user = User::new(input.name, input.avatar, input.email, password_hash);

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Update the caller's own profile (name and avatar only)
    #[instrument(skip(self, input))]
    pub async fn update_profile(&self, id: Uuid, input: UpdateProfile) -> UserResult<UserResponse> {
        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_profile_update(input);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    /// Verify credentials for signin.
    ///
    /// An unknown email and a hash mismatch return the same error; the
    /// caller cannot learn whether the account exists.
    #[instrument(skip(self, email, password))]
    pub async fn verify_credentials(&self, email: &str, password: &str) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }

    // Password helpers

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.hasher
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(self
            .hasher
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

fn validate_password(password: &str) -> UserResult<()> {
    if password.len() < PASSWORD_MIN_LEN {
        return Err(UserError::Validation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        )));
    }

    if password.len() > PASSWORD_MAX_LEN {
        return Err(UserError::Validation(format!(
            "Password cannot exceed {} characters",
            PASSWORD_MAX_LEN
        )));
    }

    Ok(())
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            hasher: self.hasher.clone(),
        }
    }
}
