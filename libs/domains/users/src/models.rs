use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity, stored in the `users` collection.
///
/// The full entity (hash included) round-trips through the repository;
/// everything that leaves the API goes through [`UserResponse`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name (2-30 chars)
    pub name: String,
    /// Avatar URL
    pub avatar: String,
    /// Email address (unique)
    pub email: String,
    /// Argon2 password hash; write-only outside the credential store
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// User response DTO - the only user shape API responses carry.
/// Deliberately has no password field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            avatar: user.avatar,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for signup
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 30))]
    pub name: String,
    #[validate(url)]
    pub avatar: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// DTO for signin
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Response after successful signin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SigninResponse {
    pub token: String,
}

/// DTO for updating the caller's own profile. Name and avatar only;
/// email and password are not updatable through this operation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfile {
    #[validate(length(min = 2, max = 30))]
    pub name: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user (password already hashed by the service layer)
    pub fn new(name: String, avatar: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            avatar,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update
    pub fn apply_profile_update(&mut self, update: UpdateProfile) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            name: "Ann".to_string(),
            avatar: "https://example.com/ann.png".to_string(),
            email: "a@x.com".to_string(),
            password: "correct-horse".to_string(),
        }
    }

    #[test]
    fn signup_request_validates() {
        assert!(signup().validate().is_ok());

        let mut short_name = signup();
        short_name.name = "A".to_string();
        assert!(short_name.validate().is_err());

        let mut bad_avatar = signup();
        bad_avatar.avatar = "not a url".to_string();
        assert!(bad_avatar.validate().is_err());

        let mut bad_email = signup();
        bad_email.email = "nope".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn update_profile_validates_present_fields_only() {
        let empty = UpdateProfile::default();
        assert!(empty.validate().is_ok());

        let bad = UpdateProfile {
            name: Some("A".to_string()),
            avatar: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn response_never_serializes_a_password_field() {
        let user = User::new(
            "Ann".to_string(),
            "https://example.com/ann.png".to_string(),
            "a@x.com".to_string(),
            "$argon2id$fake".to_string(),
        );

        let response: UserResponse = user.into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn profile_update_leaves_email_and_hash_alone() {
        let mut user = User::new(
            "Ann".to_string(),
            "https://example.com/ann.png".to_string(),
            "a@x.com".to_string(),
            "hash".to_string(),
        );

        user.apply_profile_update(UpdateProfile {
            name: Some("Annette".to_string()),
            avatar: None,
        });

        assert_eq!(user.name, "Annette");
        assert_eq!(user.avatar, "https://example.com/ann.png");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "hash");
    }
}
