//! Transaction service for marketplace operations.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{NewTransaction, Transaction, UpdateTransaction};
use crate::repositories::{Predicate, RecordStore};

use super::{not_found, parse_record_id};

/// Service for marketplace transaction operations.
///
/// The record store capability is injected at construction, so the same
/// service runs against MongoDB in production and against the in-memory
/// store in tests.
#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn RecordStore<Transaction>>,
}

impl TransactionService {
    /// Creates a new TransactionService over the given record store.
    pub fn new(store: Arc<dyn RecordStore<Transaction>>) -> Self {
        Self { store }
    }

    /// Records a new transaction.
    ///
    /// The record id and the transaction date are assigned here, at
    /// creation time.
    pub async fn create_transaction(&self, new: NewTransaction) -> AppResult<Transaction> {
        self.store.insert(Transaction::new(new)).await
    }

    /// Lists one page of transactions, optionally filtered by a
    /// case-insensitive product name search.
    ///
    /// The count and the slice are two separate store calls without a
    /// transaction around them; under concurrent writes the pair may
    /// observe slightly different states. Both calls evaluate the same
    /// predicate, so the results stay mutually consistent per call.
    ///
    /// # Returns
    /// A tuple of the page of transactions and the total matching count
    pub async fn list_transactions(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> AppResult<(Vec<Transaction>, u64)> {
        let predicate = match search {
            Some(term) => Predicate::contains(Transaction::SEARCH_FIELD, term),
            None => Predicate::All,
        };

        let total = self.store.count(&predicate).await?;
        let transactions = self.store.find_slice(&predicate, offset, limit).await?;
        Ok((transactions, total))
    }

    /// Gets a transaction by its id.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no transaction has the given id
    pub async fn get_transaction(&self, id: &str) -> AppResult<Transaction> {
        let record_id = parse_record_id("transaction", id)?;
        self.store
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| not_found("transaction", id))
    }

    /// Replaces every client-editable field of a transaction.
    ///
    /// The original transaction date is preserved; only creation sets it.
    ///
    /// # Returns
    /// The transaction as stored after the update
    pub async fn update_transaction(
        &self,
        id: &str,
        update: UpdateTransaction,
    ) -> AppResult<Transaction> {
        let existing = self.get_transaction(id).await?;
        let replacement = existing.replaced_with(update);
        self.store
            .update_by_id(replacement.id, replacement)
            .await?
            .ok_or_else(|| not_found("transaction", id))
    }

    /// Deletes a transaction by its id.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no transaction has the given id
    pub async fn delete_transaction(&self, id: &str) -> AppResult<()> {
        let record_id = parse_record_id("transaction", id)?;
        if self.store.delete_by_id(record_id).await? {
            Ok(())
        } else {
            Err(not_found("transaction", id))
        }
    }
}
