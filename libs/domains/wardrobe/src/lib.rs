//! Wardrobe Domain
//!
//! Clothing items for the WTWR service: create, list, delete, and
//! like/unlike, stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, ownership checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB / in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! Deletion is owner-only and the service checks existence before
//! ownership, so a missing item and a foreign item answer differently.
//! Likes have no ownership check and mutate the like set atomically.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use models::{ClothingItem, CreateClothingItem, WeatherKind};
pub use mongodb::MongoItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
