use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::ClothingItem;

/// Repository trait for ClothingItem persistence.
///
/// `add_like`/`remove_like` mutate the like set in a single atomic storage
/// operation and return the updated item, or `None` when the item does not
/// exist. They are idempotent: adding a present user or removing an absent
/// one returns the item unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item
    async fn create(&self, item: ClothingItem) -> ItemResult<ClothingItem>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<ClothingItem>>;

    /// List all items, newest first
    async fn list(&self) -> ItemResult<Vec<ClothingItem>>;

    /// Delete an item by ID; returns whether an item was removed
    async fn delete(&self, id: Uuid) -> ItemResult<bool>;

    /// Add a user to the item's like set
    async fn add_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>>;

    /// Remove a user from the item's like set
    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>>;
}

/// In-memory implementation of ItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<HashMap<Uuid, ClothingItem>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: ClothingItem) -> ItemResult<ClothingItem> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list(&self) -> ItemResult<Vec<ClothingItem>> {
        let items = self.items.read().await;

        let mut result: Vec<ClothingItem> = items.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let mut items = self.items.write().await;

        if items.remove(&id).is_some() {
            tracing::info!(item_id = %id, "Deleted item");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn add_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let mut items = self.items.write().await;

        Ok(items.get_mut(&id).map(|item| {
            if !item.likes.contains(&user_id) {
                item.likes.push(user_id);
            }
            item.clone()
        }))
    }

    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let mut items = self.items.write().await;

        Ok(items.get_mut(&id).map(|item| {
            item.likes.retain(|liker| *liker != user_id);
            item.clone()
        }))
    }
}
