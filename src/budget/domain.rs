//! Core budget domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, month::parse_month};

/// A spending limit for one category in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The server-assigned id.
    pub id: DatabaseId,
    /// The category name the limit applies to.
    pub category: String,
    /// The spending limit in currency units. Always positive.
    pub amount: f64,
    /// The calendar month the limit applies to, as "YYYY-MM".
    pub month: String,
}

/// Validated fields for creating or updating a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetData {
    /// The category name the limit applies to. Never empty.
    pub category: String,
    /// The spending limit in currency units. Always positive.
    pub amount: f64,
    /// The calendar month the limit applies to, as "YYYY-MM".
    pub month: String,
}

/// The request body for creating or updating a budget.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetForm {
    /// The category name the limit applies to.
    pub category: Option<String>,
    /// The spending limit in currency units.
    pub amount: Option<f64>,
    /// The calendar month the limit applies to, as "YYYY-MM".
    pub month: Option<String>,
}

impl BudgetForm {
    /// Validate the form fields.
    ///
    /// # Errors
    /// Returns [Error::InvalidField] naming the first offending field if the
    /// category is missing or empty, the amount is missing or not a positive
    /// number, or the month is not in YYYY-MM format.
    pub fn validate(self) -> Result<BudgetData, Error> {
        let category = self
            .category
            .map(|category| category.trim().to_owned())
            .filter(|category| !category.is_empty())
            .ok_or(Error::InvalidField {
                field: "category",
                message: "category is required".to_owned(),
            })?;

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

        let month = self.month.ok_or(Error::InvalidField {
            field: "month",
            message: "month is required".to_owned(),
        })?;
        // Normalizes nothing, just proves the format.
        parse_month(&month)?;

        Ok(BudgetData {
            category,
            amount,
            month,
        })
    }
}
