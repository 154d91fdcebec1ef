//! User CRUD request handlers.
//!
//! Provides HTTP handlers for user management operations.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};

use crate::api::dto::{
    ChangePasswordRequest, CreateUserRequest, ListParams, PageResult, UpdateUserRequest,
    UserResponse,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Creates user-related routes.
///
/// Routes:
/// - GET /                 - List users, paginated
/// - POST /                - Create a new user
/// - GET /{id}             - Get user by id
/// - PUT /{id}             - Update user by id
/// - DELETE /{id}          - Delete user by id
/// - PATCH /{id}/password  - Change a user's password
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/password", patch(change_password))
}

/// GET /users - List one page of users
///
/// Supports `page`, `page_size` and a case-insensitive `search` over the
/// user name. Returns the page envelope with pagination metadata.
async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<PageResult<UserResponse>>, AppError> {
    let (users, total) = state
        .services
        .users
        .list_users(params.search_term(), params.offset(), params.limit())
        .await?;
    let data: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(PageResult::new(data, &params, total)))
}

/// GET /users/{id} - Get user by id
///
/// Returns the user with the specified id or 404 if not found.
/// The response never carries the password digest.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.services.users.get_user(&id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /users - Create new user
///
/// Registers a new user from the JSON request body. The password is
/// hashed before storage. Returns 201 Created with the created user data.
async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let new_user = payload.into_new_user();
    let user = state.services.users.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /users/{id} - Update user
///
/// Updates the user's profile fields; the password stays untouched.
/// Returns the updated user data.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let update_data = payload.into_update_user();
    let user = state.services.users.update_user(&id, update_data).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - Delete user
///
/// Deletes the user with the specified id.
/// Returns 204 No Content on success.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.services.users.delete_user(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /users/{id}/password - Change a user's password
///
/// Verifies the current password before storing a new digest.
/// Returns 204 No Content on success, 403 when the current password
/// does not match.
async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode, AppError> {
    state
        .services
        .users
        .change_password(&id, &payload.old_password, &payload.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
