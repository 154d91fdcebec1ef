//! In-memory record store backed by a vector of BSON documents.
//!
//! Used by the test suites in place of a running database. Records
//! round-trip through BSON, so field names and predicate matching behave
//! exactly as they do against the MongoDB store.

use std::marker::PhantomData;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, from_document, to_document};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::repositories::{Predicate, RecordStore};

/// Record store holding documents in insertion order.
pub struct MemoryRecordStore<T> {
    documents: RwLock<Vec<Document>>,
    _record: PhantomData<T>,
}

impl<T> MemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            _record: PhantomData,
        }
    }
}

impl<T> Default for MemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn has_id(document: &Document, id: ObjectId) -> bool {
    document.get_object_id("_id").ok() == Some(id)
}

#[async_trait]
impl<T> RecordStore<T> for MemoryRecordStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn count(&self, predicate: &Predicate) -> AppResult<u64> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|d| predicate.matches(d)).count() as u64)
    }

    async fn find_slice(
        &self,
        predicate: &Predicate,
        offset: u64,
        limit: u32,
    ) -> AppResult<Vec<T>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .filter(|d| predicate.matches(d))
            .skip(offset as usize)
            .take(limit as usize)
            .map(|d| {
                from_document(d.clone()).map_err(|e| AppError::store("decode record", e))
            })
            .collect()
    }

    async fn insert(&self, record: T) -> AppResult<T> {
        let document =
            to_document(&record).map_err(|e| AppError::store("encode record", e))?;
        let mut documents = self.documents.write().await;
        documents.push(document);
        Ok(record)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<T>> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .find(|d| has_id(d, id))
            .map(|d| {
                from_document(d.clone()).map_err(|e| AppError::store("decode record", e))
            })
            .transpose()
    }

    async fn update_by_id(&self, id: ObjectId, record: T) -> AppResult<Option<T>> {
        let mut replacement =
            to_document(&record).map_err(|e| AppError::store("encode record", e))?;
        replacement.insert("_id", id);

        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| has_id(d, id)) {
            Some(stored) => {
                *stored = replacement.clone();
                from_document(replacement)
                    .map(Some)
                    .map_err(|e| AppError::store("decode record", e))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| !has_id(d, id));
        Ok(documents.len() < before)
    }
}
