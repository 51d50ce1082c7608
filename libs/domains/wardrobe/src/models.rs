use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Weather category an item is suited for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WeatherKind {
    Cold,
    Warm,
    Hot,
}

/// Clothing item entity, stored in the `items` collection.
///
/// `owner` is set from the creating identity and never changes. `likes`
/// holds user ids with set semantics: unique membership, order irrelevant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClothingItem {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Item name (2-30 chars)
    pub name: String,
    /// Weather category
    pub weather: WeatherKind,
    /// Image URL
    pub image_url: String,
    /// Owner's user id, immutable after creation
    pub owner: Uuid,
    /// User ids that liked this item
    #[serde(default)]
    pub likes: Vec<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new clothing item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClothingItem {
    #[validate(length(min = 2, max = 30))]
    pub name: String,
    pub weather: WeatherKind,
    #[validate(url)]
    pub image_url: String,
}

/// Confirmation body for a successful delete
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
}

impl ClothingItem {
    /// Create a new item owned by the given user
    pub fn new(input: CreateClothingItem, owner: Uuid) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            weather: input.weather,
            image_url: input.image_url,
            owner,
            likes: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
