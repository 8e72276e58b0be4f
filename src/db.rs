//! Database initialization for the application's SQLite schema.

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error, budget::create_budget_table, category::create_category_table,
    transaction::create_transaction_table,
};

/// Create the tables for all domain models.
///
/// Table creation runs inside a single exclusive SQL transaction so that a
/// partially initialized schema is never left behind.
///
/// # Errors
/// Returns an error if any of the tables cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let sql_transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&sql_transaction)?;
    create_category_table(&sql_transaction)?;
    create_budget_table(&sql_transaction)?;

    sql_transaction.commit()?;

    Ok(())
}
