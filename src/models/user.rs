use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User model as stored in the `users` collection.
/// The password field holds the argon2 digest and never leaves the service
/// layer; response projections carry an allow-list of fields instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Document field targeted by substring search on the listing endpoint.
    pub const SEARCH_FIELD: &'static str = "name";

    /// Document field used for exact-match uniqueness lookups.
    pub const EMAIL_FIELD: &'static str = "email";

    /// Build a new user from validated fields and an already-hashed password.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            password: password_hash,
        }
    }
}

/// Validated fields for registering a user. `password` is still the
/// plaintext here; the service hashes it before anything is persisted.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Full replacement fields for updating a user's profile; the stored
/// password digest is preserved across updates.
#[derive(Debug, Clone)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
}
