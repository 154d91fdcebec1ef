//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since the record stores sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates a new AppState from a repositories aggregate.
    ///
    /// # Example
    /// ```ignore
    /// let db = db::connect(&settings.database).await?;
    /// let state = AppState::new(Repositories::mongo(&db));
    /// ```
    pub fn new(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
        }
    }
}
