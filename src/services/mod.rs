//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! record stores and handlers.

mod transaction_service;
mod user_service;

pub use transaction_service::TransactionService;
pub use user_service::UserService;

use mongodb::bson::oid::ObjectId;

use crate::error::{AppError, AppResult};
use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the stores sit behind `Arc`.
#[derive(Clone)]
pub struct Services {
    pub transactions: TransactionService,
    pub users: UserService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            transactions: TransactionService::new(repos.transactions),
            users: UserService::new(repos.users),
        }
    }
}

fn not_found(entity: &str, id: &str) -> AppError {
    AppError::NotFound {
        entity: entity.to_string(),
        field: "id".to_string(),
        value: id.to_string(),
    }
}

/// Parses a path id into a store id. An id that cannot exist in the store
/// matches nothing, so malformed ids are reported as NotFound.
fn parse_record_id(entity: &str, id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| not_found(entity, id))
}
