use chrono::{DateTime, Utc};
use mongodb::bson;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Transaction model as stored in the `transactions` collection.
/// Serde renames keep the collection's camelCase document keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub transaction_date: DateTime<Utc>,
}

impl Transaction {
    /// Document field targeted by substring search on the listing endpoint.
    pub const SEARCH_FIELD: &'static str = "productName";

    /// Build a new transaction; the store id is assigned here and the
    /// transaction date defaults to the creation time.
    ///
    /// The time is taken at the BSON datetime's millisecond precision, so
    /// the value handed back at creation matches what the store returns.
    pub fn new(new: NewTransaction) -> Self {
        Self {
            id: ObjectId::new(),
            product_name: new.product_name,
            quantity: new.quantity,
            price: new.price,
            description: new.description,
            transaction_date: bson::DateTime::now().to_chrono(),
        }
    }

    /// Apply a full-field replacement, keeping the id and the original
    /// transaction date.
    pub fn replaced_with(&self, update: UpdateTransaction) -> Self {
        Self {
            id: self.id,
            product_name: update.product_name,
            quantity: update.quantity,
            price: update.price,
            description: update.description,
            transaction_date: self.transaction_date,
        }
    }
}

/// Validated fields for inserting a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<String>,
}

/// Full replacement fields for updating a transaction
#[derive(Debug, Clone)]
pub struct UpdateTransaction {
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
    pub description: Option<String>,
}
