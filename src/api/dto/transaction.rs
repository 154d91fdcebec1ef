//! Transaction-related DTOs for API requests and responses.
//!
//! Request and response bodies keep the camelCase field names existing API
//! consumers send and expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{NewTransaction, Transaction, UpdateTransaction};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for recording a new transaction.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[validate(length(min = 1, message = "productName must not be empty"))]
    pub product_name: String,
    #[validate(range(min = 0, message = "quantity must be zero or greater"))]
    pub quantity: i64,
    #[validate(range(min = 0.0, message = "price must be zero or greater"))]
    pub price: f64,
    pub description: Option<String>,
}

impl CreateTransactionRequest {
    /// Converts the request DTO into a NewTransaction model for insertion.
    pub fn into_new_transaction(self) -> NewTransaction {
        NewTransaction {
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
        }
    }
}

/// Request body for replacing a transaction's fields. The transaction date
/// is not part of the body; it keeps its original value.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    #[validate(length(min = 1, message = "productName must not be empty"))]
    pub product_name: String,
    #[validate(range(min = 0, message = "quantity must be zero or greater"))]
    pub quantity: i64,
    #[validate(range(min = 0.0, message = "price must be zero or greater"))]
    pub price: f64,
    pub description: Option<String>,
}

impl UpdateTransactionRequest {
    /// Converts the request DTO into an UpdateTransaction model.
    pub fn into_update_transaction(self) -> UpdateTransaction {
        UpdateTransaction {
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for transaction data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transaction_date: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id.to_hex(),
            product_name: transaction.product_name,
            quantity: transaction.quantity,
            price: transaction.price,
            description: transaction.description,
            transaction_date: transaction.transaction_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_wire_names() {
        let transaction = Transaction::new(NewTransaction {
            product_name: "Coca-Cola".to_string(),
            quantity: 3,
            price: 2.5,
            description: None,
        });
        let hex_id = transaction.id.to_hex();

        let value = serde_json::to_value(TransactionResponse::from(transaction)).unwrap();

        assert_eq!(value["id"], serde_json::json!(hex_id));
        assert_eq!(value["productName"], serde_json::json!("Coca-Cola"));
        assert_eq!(value["quantity"], serde_json::json!(3));
        assert_eq!(value["price"], serde_json::json!(2.5));
        assert!(value["transactionDate"].is_string());
        // An absent description stays out of the body entirely
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_response_includes_description_when_present() {
        let transaction = Transaction::new(NewTransaction {
            product_name: "Tea".to_string(),
            quantity: 1,
            price: 1.0,
            description: Some("loose leaf".to_string()),
        });

        let value = serde_json::to_value(TransactionResponse::from(transaction)).unwrap();
        assert_eq!(value["description"], serde_json::json!("loose leaf"));
    }

    #[test]
    fn test_create_request_accepts_camel_case_body() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"productName":"Water","quantity":0,"price":0.0}"#,
        )
        .unwrap();

        assert_eq!(request.product_name, "Water");
        assert_eq!(request.quantity, 0);
        assert!(request.description.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_negative_quantity_and_price() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"productName":"Water","quantity":-1,"price":-0.5}"#,
        )
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
        assert!(errors.field_errors().contains_key("price"));
    }
}
