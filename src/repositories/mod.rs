//! Repository layer for data access operations.
//!
//! The record store capability lives here: the trait the services consume,
//! the MongoDB-backed implementation, the in-memory implementation used by
//! tests, and the predicates both understand.

mod memory;
mod mongo;
mod predicate;
mod record_store;

pub use memory::MemoryRecordStore;
pub use mongo::MongoRecordStore;
pub use predicate::Predicate;
pub use record_store::RecordStore;

use std::sync::Arc;

use mongodb::Database;

use crate::models::{Transaction, User};

/// Collection name for marketplace transactions.
const TRANSACTIONS_COLLECTION: &str = "transactions";

/// Collection name for user accounts.
const USERS_COLLECTION: &str = "users";

/// Aggregates the record stores for convenient access.
///
/// Stores are injected into services at construction; since each sits
/// behind an `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub transactions: Arc<dyn RecordStore<Transaction>>,
    pub users: Arc<dyn RecordStore<User>>,
}

impl Repositories {
    /// Creates stores bound to the MongoDB collections.
    pub fn mongo(db: &Database) -> Self {
        Self {
            transactions: Arc::new(MongoRecordStore::new(db, TRANSACTIONS_COLLECTION)),
            users: Arc::new(MongoRecordStore::new(db, USERS_COLLECTION)),
        }
    }

    /// Creates empty in-memory stores; used by the test suites.
    pub fn in_memory() -> Self {
        Self {
            transactions: Arc::new(MemoryRecordStore::new()),
            users: Arc::new(MemoryRecordStore::new()),
        }
    }
}
