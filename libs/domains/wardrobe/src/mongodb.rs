//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
    options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::ClothingItem;
use crate::repository::ItemRepository;

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<ClothingItem>,
}

impl MongoItemRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<ClothingItem>("items");
        Self { collection }
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    /// Run an atomic like-set update and return the updated document.
    ///
    /// `$addToSet`/`$pull` mutate the set server-side in one round trip, so
    /// concurrent likers cannot lose updates to a read-modify-write race.
    async fn update_likes(
        &self,
        id: Uuid,
        update: mongodb::bson::Document,
    ) -> ItemResult<Option<ClothingItem>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let item = self
            .collection
            .find_one_and_update(Self::id_filter(id), update)
            .with_options(options)
            .await?;

        Ok(item)
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, item), fields(item_id = %item.id, owner = %item.owner))]
    async fn create(&self, item: ClothingItem) -> ItemResult<ClothingItem> {
        self.collection.insert_one(&item).await?;

        tracing::info!(item_id = %item.id, "Created item");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let item = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<ClothingItem>> {
        use futures_util::TryStreamExt;

        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(options)
            .await?;
        let items: Vec<ClothingItem> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(item_id = %id, "Deleted item");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn add_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let update = doc! {
            "$addToSet": { "likes": to_bson(&user_id).unwrap_or(Bson::Null) }
        };
        self.update_likes(id, update).await
    }

    #[instrument(skip(self))]
    async fn remove_like(&self, id: Uuid, user_id: Uuid) -> ItemResult<Option<ClothingItem>> {
        let update = doc! {
            "$pull": { "likes": to_bson(&user_id).unwrap_or(Bson::Null) }
        };
        self.update_likes(id, update).await
    }
}
