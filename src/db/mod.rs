//! MongoDB connection module.
//!
//! The mongodb driver maintains its own connection pool internally, so the
//! `Database` handle is cheap to clone and share across request handlers.

use mongodb::{Client, Database, bson::doc};

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Connects to MongoDB and verifies the connection with a ping.
///
/// # Errors
/// Returns `AppError::Store` if the connection string is invalid or the
/// server does not answer the ping.
///
/// # Example
/// ```ignore
/// let db = db::connect(&settings.database).await?;
/// let repos = Repositories::mongo(&db);
/// ```
pub async fn connect(config: &DatabaseConfig) -> AppResult<Database> {
    tracing::info!(database = %config.database, "Connecting to MongoDB");

    let client = Client::with_uri_str(&config.uri)
        .await
        .map_err(|error| AppError::store("connect to MongoDB", error))?;
    let database = client.database(&config.database);

    // The client connects lazily; ping so startup fails fast when the
    // server is unreachable.
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|error| AppError::store("ping MongoDB", error))?;

    tracing::info!(database = %config.database, "MongoDB connection established");

    Ok(database)
}
