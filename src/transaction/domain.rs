//! Core transaction domain types.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, database_id::DatabaseId};

/// A single expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The server-assigned id.
    pub id: DatabaseId,
    /// The amount spent in currency units. Always positive.
    pub amount: f64,
    /// The calendar date the expense occurred.
    #[serde(with = "crate::date_format")]
    pub date: Date,
    /// A short description of the expense.
    pub description: String,
    /// The category name, if any.
    ///
    /// Categories are referenced by name, not id. Reports place transactions
    /// without a category under the synthetic "Uncategorized" bucket.
    pub category: Option<String>,
}

/// Validated fields for creating or updating a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionData {
    /// The amount spent in currency units. Always positive.
    pub amount: f64,
    /// The calendar date the expense occurred.
    pub date: Date,
    /// A short description of the expense. Never empty.
    pub description: String,
    /// The category name, if any. Never empty or whitespace-only.
    pub category: Option<String>,
}

/// The request body for creating or updating a transaction.
///
/// All fields are optional at the serde level so that missing fields can be
/// reported with a field-level error message instead of a generic
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// The amount spent in currency units.
    pub amount: Option<f64>,
    /// The calendar date the expense occurred.
    #[serde(default, with = "crate::date_format::option")]
    pub date: Option<Date>,
    /// A short description of the expense.
    pub description: Option<String>,
    /// The category name, if any. An empty string is treated as absent.
    pub category: Option<String>,
}

impl TransactionForm {
    /// Validate the form fields.
    ///
    /// # Errors
    /// Returns [Error::InvalidField] naming the first offending field if the
    /// amount is missing or not a positive number, the date is missing, or
    /// the description is missing or empty.
    pub fn validate(self) -> Result<TransactionData, Error> {
        let amount = self.amount.ok_or(Error::InvalidField {
            field: "amount",
            message: "amount is required".to_owned(),
        })?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(Error::InvalidField {
                field: "amount",
                message: "amount must be a positive number".to_owned(),
            });
        }

        let date = self.date.ok_or(Error::InvalidField {
            field: "date",
            message: "date is required".to_owned(),
        })?;

        let description = self
            .description
            .map(|description| description.trim().to_owned())
            .filter(|description| !description.is_empty())
            .ok_or(Error::InvalidField {
                field: "description",
                message: "description is required".to_owned(),
            })?;

        let category = self
            .category
            .map(|category| category.trim().to_owned())
            .filter(|category| !category.is_empty());

        Ok(TransactionData {
            amount,
            date,
            description,
            category,
        })
    }
}
