//! Marketplace transaction CRUD request handlers.
//!
//! Provides HTTP handlers for marketplace transaction management.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    CreateTransactionRequest, ListParams, PageResult, TransactionResponse,
    UpdateTransactionRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// Creates marketplace transaction routes.
///
/// Routes:
/// - GET /        - List transactions, paginated
/// - POST /       - Record a new transaction
/// - GET /{id}    - Get transaction by id
/// - PUT /{id}    - Replace transaction by id
/// - DELETE /{id} - Delete transaction by id
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transactions).post(create_transaction))
        .route(
            "/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

/// GET /marketplace - List one page of transactions
///
/// Supports `page`, `page_size` and a case-insensitive `search` over the
/// product name. Returns the page envelope with pagination metadata.
async fn list_transactions(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> Result<Json<PageResult<TransactionResponse>>, AppError> {
    let (transactions, total) = state
        .services
        .transactions
        .list_transactions(params.search_term(), params.offset(), params.limit())
        .await?;
    let data: Vec<TransactionResponse> = transactions
        .into_iter()
        .map(TransactionResponse::from)
        .collect();
    Ok(Json(PageResult::new(data, &params, total)))
}

/// GET /marketplace/{id} - Get transaction by id
///
/// Returns the transaction with the specified id or 404 if not found.
async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = state.services.transactions.get_transaction(&id).await?;
    Ok(Json(TransactionResponse::from(transaction)))
}

/// POST /marketplace - Record a new transaction
///
/// Creates a new transaction from the JSON request body; the transaction
/// date is set server-side. Returns 201 Created with the stored data.
async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), AppError> {
    let new_transaction = payload.into_new_transaction();
    let transaction = state
        .services
        .transactions
        .create_transaction(new_transaction)
        .await?;
    Ok((StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
}

/// PUT /marketplace/{id} - Replace transaction
///
/// Replaces every client-editable field of the transaction.
/// Returns the transaction as stored after the update.
async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTransactionRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let update_data = payload.into_update_transaction();
    let transaction = state
        .services
        .transactions
        .update_transaction(&id, update_data)
        .await?;
    Ok(Json(TransactionResponse::from(transaction)))
}

/// DELETE /marketplace/{id} - Delete transaction
///
/// Deletes the transaction with the specified id.
/// Returns 204 No Content on success.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.services.transactions.delete_transaction(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
