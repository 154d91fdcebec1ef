//! The record store capability consumed by the service layer.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::AppResult;
use crate::repositories::Predicate;

/// Async CRUD capability over one collection of records.
///
/// Services receive an implementation at construction time; nothing in the
/// service layer reaches for an ambient database handle. Counting and slice
/// fetching take the same [`Predicate`] so a paginated listing applies one
/// matching rule to both calls.
#[async_trait]
pub trait RecordStore<T>: Send + Sync {
    /// Number of records matching the predicate.
    async fn count(&self, predicate: &Predicate) -> AppResult<u64>;

    /// One page-worth of matching records in the store's natural order.
    async fn find_slice(
        &self,
        predicate: &Predicate,
        offset: u64,
        limit: u32,
    ) -> AppResult<Vec<T>>;

    /// Persist a new record, returning it as stored.
    async fn insert(&self, record: T) -> AppResult<T>;

    /// Fetch a record by id; `None` when absent.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<T>>;

    /// Replace the record stored under `id`, returning the post-update
    /// record, or `None` when absent.
    async fn update_by_id(&self, id: ObjectId, record: T) -> AppResult<Option<T>>;

    /// Delete by id; `false` when nothing was stored under it.
    async fn delete_by_id(&self, id: ObjectId) -> AppResult<bool>;
}
