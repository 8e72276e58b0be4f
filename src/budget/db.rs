//! Database operations for budgets.

use rusqlite::{Connection, Row, params};

use crate::{Error, database_id::DatabaseId};

use super::domain::{Budget, BudgetData};

/// Create the table for storing budgets.
///
/// The (category, month) pair is unique so that at most one limit exists per
/// category per month.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            month TEXT NOT NULL,
            UNIQUE(category, month)
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get("id")?,
        category: row.get("category")?,
        amount: row.get("amount")?,
        month: row.get("month")?,
    })
}

/// Insert a budget into the database and return the created record.
///
/// # Errors
/// Returns an error if a budget already exists for the (category, month)
/// pair or if there is an SQL error.
pub fn create_budget(data: BudgetData, connection: &Connection) -> Result<Budget, Error> {
    connection.execute(
        "INSERT INTO budget (category, amount, month) VALUES (?1, ?2, ?3)",
        params![data.category, data.amount, data.month],
    )?;

    Ok(Budget {
        id: connection.last_insert_rowid(),
        category: data.category,
        amount: data.amount,
        month: data.month,
    })
}

/// Retrieve the budget with the given `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no budget has the given `id`, or an error if
/// there is an SQL error.
pub fn get_budget(id: DatabaseId, connection: &Connection) -> Result<Budget, Error> {
    connection
        .query_row(
            "SELECT id, category, amount, month FROM budget WHERE id = ?1",
            params![id],
            map_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve the budget for the given (category, month) pair, if one exists.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn find_budget(
    category: &str,
    month: &str,
    connection: &Connection,
) -> Result<Option<Budget>, Error> {
    match connection.query_row(
        "SELECT id, category, amount, month FROM budget WHERE category = ?1 AND month = ?2",
        params![category, month],
        map_row,
    ) {
        Ok(budget) => Ok(Some(budget)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Retrieve all budgets, most recent month first.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn get_all_budgets(connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare("SELECT id, category, amount, month FROM budget ORDER BY month DESC, category ASC")?
        .query_map([], map_row)?
        .map(|budget| budget.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the fields of the budget with the given `id` and return the
/// updated record.
///
/// # Errors
/// Returns [Error::UpdateMissingBudget] if no budget has the given `id`, or
/// an error if there is an SQL error.
pub fn update_budget(
    id: DatabaseId,
    data: BudgetData,
    connection: &Connection,
) -> Result<Budget, Error> {
    let rows_affected = connection.execute(
        "UPDATE budget SET category = ?1, amount = ?2, month = ?3 WHERE id = ?4",
        params![data.category, data.amount, data.month, id],
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingBudget);
    }

    Ok(Budget {
        id,
        category: data.category,
        amount: data.amount,
        month: data.month,
    })
}

/// Delete the budget with the given `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingBudget] if no budget has the given `id`, or
/// an error if there is an SQL error.
pub fn delete_budget(id: DatabaseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM budget WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingBudget);
    }

    Ok(())
}
