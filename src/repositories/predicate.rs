//! Matching rules applied to records during count and fetch.
//!
//! A predicate is built once per request and reused for both the count
//! operation and the fetch-slice operation, so the two always apply an
//! identical matching rule.

use mongodb::bson::{Bson, Document, doc};

/// Boolean-valued matching rule over a document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every record.
    All,
    /// Case-insensitive substring match on a named field.
    Contains { field: String, term: String },
    /// Exact match on a named field.
    Equals { field: String, value: String },
}

impl Predicate {
    /// Substring rule over `field`. An empty term matches all records.
    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        let term = term.into();
        if term.is_empty() {
            Predicate::All
        } else {
            Predicate::Contains {
                field: field.into(),
                term,
            }
        }
    }

    /// Exact-match rule over `field`, used for uniqueness lookups.
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Evaluate the rule against a BSON document.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Contains { field, term } => match document.get(field) {
                Some(Bson::String(value)) => {
                    value.to_lowercase().contains(&term.to_lowercase())
                }
                _ => false,
            },
            Predicate::Equals { field, value } => {
                matches!(document.get(field), Some(Bson::String(v)) if v == value)
            }
        }
    }

    /// Render the equivalent MongoDB filter document. The search term is
    /// regex-escaped so it only ever means a literal substring.
    pub fn to_filter(&self) -> Document {
        match self {
            Predicate::All => doc! {},
            Predicate::Contains { field, term } => doc! {
                field: { "$regex": regex::escape(term), "$options": "i" },
            },
            Predicate::Equals { field, value } => doc! { field: value },
        }
    }
}
