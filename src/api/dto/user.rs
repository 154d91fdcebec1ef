//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewUser, UpdateUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for registering a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
}

impl CreateUserRequest {
    /// Converts the request DTO into a NewUser model; the password is still
    /// plaintext here and is hashed by the service.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Request body for replacing a user's profile fields. The stored password
/// digest is not touched by this request.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

impl UpdateUserRequest {
    /// Converts the request DTO into an UpdateUser model.
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name,
            email: self.email,
        }
    }
}

/// Request body for changing a user's password.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub new_password: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data. The allow-list stops here: the stored
/// password digest has no corresponding field and can never serialize.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
        }
    }
}
