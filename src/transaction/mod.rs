//! Transaction records and their CRUD endpoints.

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

pub use create::create_transaction_endpoint;
pub use db::{create_transaction, create_transaction_table, get_all_transactions};
pub use delete::delete_transaction_endpoint;
pub use domain::{Transaction, TransactionData, TransactionForm};
pub use get::get_transaction_endpoint;
pub use list::get_transactions_endpoint;
pub use update::update_transaction_endpoint;

/// The state needed to manage transactions.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
