//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `transaction` - Marketplace transaction request/response DTOs
//! - `user` - User-related request/response DTOs
//! - `error` - Common error response DTOs
//! - `pagination` - Pagination and search DTOs shared by list endpoints

mod error;
mod pagination;
mod transaction;
mod user;

pub use error::{ErrorResponse, FieldErrorDetail};
pub use pagination::{ListParams, PageMetadata, PageResult};
pub use transaction::{CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest};
pub use user::{ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, UserResponse};
