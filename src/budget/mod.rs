//! Monthly budget records and their endpoints.
//!
//! A budget is a spending limit for one category in one calendar month.
//! At most one budget exists per (category, month) pair: creating a budget
//! for a pair that already has one overwrites the amount instead.

mod create;
mod db;
mod delete;
mod domain;
mod get;
mod list;
mod update;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use create::create_budget_endpoint;
pub use db::{create_budget_table, get_all_budgets};
pub use delete::delete_budget_endpoint;
pub use domain::{Budget, BudgetData, BudgetForm};
pub use get::get_budget_endpoint;
pub use list::get_budgets_endpoint;
pub use update::update_budget_endpoint;

/// The state needed to manage budgets.
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// The database connection for managing budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
