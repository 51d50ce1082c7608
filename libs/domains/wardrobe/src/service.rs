//! Item Service - business logic and ownership checks

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{ClothingItem, CreateClothingItem};
use crate::repository::ItemRepository;

/// Service layer for clothing items.
///
/// Owns the ordering of the delete checks: existence before ownership,
/// and no mutation once either check fails.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item owned by the caller
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(
        &self,
        owner: Uuid,
        input: CreateClothingItem,
    ) -> ItemResult<ClothingItem> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        let item = ClothingItem::new(input, owner);
        self.repository.create(item).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<ClothingItem> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List all items, newest first
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<ClothingItem>> {
        self.repository.list().await
    }

    /// Delete an item, owner-only.
    ///
    /// Existence is checked before ownership, so a caller asking about a
    /// missing item gets `NotFound` while a caller asking about someone
    /// else's item gets `NotOwner`. A failed check leaves the item
    /// untouched.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid, caller: Uuid) -> ItemResult<()> {
        let item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        if item.owner != caller {
            return Err(ItemError::NotOwner);
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            // Removed between the ownership check and the delete
            return Err(ItemError::NotFound(id));
        }

        Ok(())
    }

    /// Like an item. Any authenticated identity may like any item;
    /// liking twice is a no-op.
    #[instrument(skip(self))]
    pub async fn like_item(&self, id: Uuid, caller: Uuid) -> ItemResult<ClothingItem> {
        self.repository
            .add_like(id, caller)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Remove the caller's like from an item. Unliking an item the caller
    /// never liked is a no-op.
    #[instrument(skip(self))]
    pub async fn unlike_item(&self, id: Uuid, caller: Uuid) -> ItemResult<ClothingItem> {
        self.repository
            .remove_like(id, caller)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeatherKind;
    use crate::repository::{InMemoryItemRepository, MockItemRepository};

    fn create() -> CreateClothingItem {
        CreateClothingItem {
            name: "Wool scarf".to_string(),
            weather: WeatherKind::Cold,
            image_url: "https://example.com/scarf.png".to_string(),
        }
    }

    #[tokio::test]
    async fn create_item_sets_the_caller_as_owner() {
        let service = ItemService::new(InMemoryItemRepository::new());
        let owner = Uuid::now_v7();

        let item = service.create_item(owner, create()).await.unwrap();
        assert_eq!(item.owner, owner);
    }

    #[tokio::test]
    async fn create_item_rejects_invalid_input() {
        let service = ItemService::new(InMemoryItemRepository::new());

        let mut input = create();
        input.name = "W".to_string();

        let result = service.create_item(Uuid::now_v7(), input).await;
        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn owner_can_delete_and_item_is_gone() {
        let service = ItemService::new(InMemoryItemRepository::new());
        let owner = Uuid::now_v7();

        let item = service.create_item(owner, create()).await.unwrap();
        service.delete_item(item.id, owner).await.unwrap();

        let result = service.get_item(item.id).await;
        assert!(matches!(result, Err(ItemError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_owner_delete_is_forbidden_and_leaves_the_item() {
        let service = ItemService::new(InMemoryItemRepository::new());
        let owner = Uuid::now_v7();
        let stranger = Uuid::now_v7();

        let item = service.create_item(owner, create()).await.unwrap();

        let result = service.delete_item(item.id, stranger).await;
        assert!(matches!(result, Err(ItemError::NotOwner)));

        // The failed check must not have mutated anything
        assert!(service.get_item(item.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_of_missing_item_is_not_found() {
        let service = ItemService::new(InMemoryItemRepository::new());

        let result = service.delete_item(Uuid::now_v7(), Uuid::now_v7()).await;
        assert!(matches!(result, Err(ItemError::NotFound(_))));
    }

    #[tokio::test]
    async fn failed_ownership_check_never_touches_the_repository() {
        let mut repo = MockItemRepository::new();
        let owner = Uuid::now_v7();
        let stranger = Uuid::now_v7();
        let item = ClothingItem::new(create(), owner);
        let item_id = item.id;

        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(item.clone())));
        // No expectation on delete: any call panics the test
        repo.expect_delete().never();

        let service = ItemService::new(repo);

        let result = service.delete_item(item_id, stranger).await;
        assert!(matches!(result, Err(ItemError::NotOwner)));
    }

    #[tokio::test]
    async fn like_twice_keeps_membership_unique() {
        let service = ItemService::new(InMemoryItemRepository::new());
        let liker = Uuid::now_v7();

        let item = service.create_item(Uuid::now_v7(), create()).await.unwrap();

        service.like_item(item.id, liker).await.unwrap();
        let liked = service.like_item(item.id, liker).await.unwrap();

        assert_eq!(liked.likes, vec![liker]);
    }

    #[tokio::test]
    async fn unlike_when_absent_is_a_noop() {
        let service = ItemService::new(InMemoryItemRepository::new());

        let item = service.create_item(Uuid::now_v7(), create()).await.unwrap();
        let unliked = service.unlike_item(item.id, Uuid::now_v7()).await.unwrap();

        assert!(unliked.likes.is_empty());
    }

    #[tokio::test]
    async fn anyone_authenticated_may_like_a_foreign_item() {
        let service = ItemService::new(InMemoryItemRepository::new());
        let owner = Uuid::now_v7();
        let stranger = Uuid::now_v7();

        let item = service.create_item(owner, create()).await.unwrap();
        let liked = service.like_item(item.id, stranger).await.unwrap();

        assert!(liked.likes.contains(&stranger));
    }

    #[tokio::test]
    async fn like_of_missing_item_is_not_found() {
        let service = ItemService::new(InMemoryItemRepository::new());

        let result = service.like_item(Uuid::now_v7(), Uuid::now_v7()).await;
        assert!(matches!(result, Err(ItemError::NotFound(_))));
    }
}
