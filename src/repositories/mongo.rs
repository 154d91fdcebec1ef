//! MongoDB-backed record store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::repositories::{Predicate, RecordStore};

/// Record store over one MongoDB collection.
#[derive(Clone)]
pub struct MongoRecordStore<T>
where
    T: Send + Sync,
{
    collection: Collection<T>,
}

impl<T> MongoRecordStore<T>
where
    T: Send + Sync,
{
    /// Creates a store bound to the named collection.
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }
}

#[async_trait]
impl<T> RecordStore<T> for MongoRecordStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin,
{
    async fn count(&self, predicate: &Predicate) -> AppResult<u64> {
        self.collection
            .count_documents(predicate.to_filter())
            .await
            .map_err(|e| AppError::store("count documents", e))
    }

    async fn find_slice(
        &self,
        predicate: &Predicate,
        offset: u64,
        limit: u32,
    ) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(predicate.to_filter())
            .skip(offset)
            .limit(i64::from(limit))
            .await
            .map_err(|e| AppError::store("find slice", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::store("collect slice", e))
    }

    async fn insert(&self, record: T) -> AppResult<T> {
        self.collection
            .insert_one(&record)
            .await
            .map_err(|e| AppError::store("insert record", e))?;
        Ok(record)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<T>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::store("find by id", e))
    }

    async fn update_by_id(&self, id: ObjectId, record: T) -> AppResult<Option<T>> {
        self.collection
            .find_one_and_replace(doc! { "_id": id }, &record)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::store("replace by id", e))
    }

    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::store("delete by id", e))?;
        Ok(result.deleted_count > 0)
    }
}
