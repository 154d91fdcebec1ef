//! User service for account operations.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::{Predicate, RecordStore};
use crate::utils::password;

use super::{not_found, parse_record_id};

/// Service for user account operations.
///
/// Passwords cross this boundary exactly once, at registration or at a
/// password change; everything past it only ever sees the salted digest.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn RecordStore<User>>,
}

impl UserService {
    /// Creates a new UserService over the given record store.
    pub fn new(store: Arc<dyn RecordStore<User>>) -> Self {
        Self { store }
    }

    /// Registers a new user with a hashed password.
    ///
    /// The email lookup and the insert are two separate store calls, so
    /// two concurrent registrations with the same email can both pass the
    /// check. The store itself does not enforce uniqueness.
    ///
    /// # Errors
    /// Returns `AppError::Duplicate` if the email is already registered
    pub async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        if self.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: new_user.email,
            });
        }

        let digest = password::hash_password(&new_user.password)?;
        let user = User::new(new_user.name, new_user.email, digest);
        self.store.insert(user).await
    }

    /// Lists one page of users, optionally filtered by a case-insensitive
    /// name search.
    ///
    /// # Returns
    /// A tuple of the page of users and the total matching count
    pub async fn list_users(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> AppResult<(Vec<User>, u64)> {
        let predicate = match search {
            Some(term) => Predicate::contains(User::SEARCH_FIELD, term),
            None => Predicate::All,
        };

        let total = self.store.count(&predicate).await?;
        let users = self.store.find_slice(&predicate, offset, limit).await?;
        Ok((users, total))
    }

    /// Gets a user by their id.
    ///
    /// The returned record still carries the password digest; response
    /// projection strips it before anything leaves the API layer.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no user has the given id
    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        let record_id = parse_record_id("user", id)?;
        self.store
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| not_found("user", id))
    }

    /// Replaces a user's profile fields.
    ///
    /// The stored password digest is preserved; only `change_password`
    /// touches it.
    ///
    /// # Returns
    /// The user as stored after the update
    pub async fn update_user(&self, id: &str, update: UpdateUser) -> AppResult<User> {
        let existing = self.get_user(id).await?;

        if update.email != existing.email && self.find_by_email(&update.email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: update.email,
            });
        }

        let replacement = User {
            name: update.name,
            email: update.email,
            ..existing
        };
        self.store
            .update_by_id(replacement.id, replacement)
            .await?
            .ok_or_else(|| not_found("user", id))
    }

    /// Deletes a user by their id.
    ///
    /// # Errors
    /// Returns `AppError::NotFound` if no user has the given id
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let record_id = parse_record_id("user", id)?;
        if self.store.delete_by_id(record_id).await? {
            Ok(())
        } else {
            Err(not_found("user", id))
        }
    }

    /// Changes a user's password after verifying the current one.
    ///
    /// Verification compares against the stored digest in constant time.
    /// On a wrong current password nothing is written and the stored
    /// digest stays as it was.
    ///
    /// # Errors
    /// Returns `AppError::WrongPassword` if the current password does not
    /// match, or `AppError::NotFound` if no user has the given id
    pub async fn change_password(
        &self,
        id: &str,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let existing = self.get_user(id).await?;

        if !password::verify_password(old_password, &existing.password)? {
            return Err(AppError::WrongPassword);
        }

        let digest = password::hash_password(new_password)?;
        let replacement = User {
            password: digest,
            ..existing
        };
        self.store
            .update_by_id(replacement.id, replacement)
            .await?
            .ok_or_else(|| not_found("user", id))?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let matches = self
            .store
            .find_slice(&Predicate::equals(User::EMAIL_FIELD, email), 0, 1)
            .await?;
        Ok(matches.into_iter().next())
    }
}
