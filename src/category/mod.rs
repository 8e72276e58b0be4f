//! Category records and their endpoints.
//!
//! Categories are a flat list of names used to label transactions and
//! budgets. The list endpoint seeds a default set of categories the first
//! time it runs against an empty store.

mod create;
mod db;
mod delete;
mod list;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

pub use create::create_category_endpoint;
pub use db::{Category, DEFAULT_CATEGORIES, create_category_table, get_all_categories};
pub use delete::delete_category_endpoint;
pub use list::get_categories_endpoint;

/// The state needed to manage categories.
#[derive(Debug, Clone)]
pub struct CategoryState {
    /// The database connection for managing categories.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
