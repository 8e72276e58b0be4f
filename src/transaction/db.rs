//! Database operations for transactions.

use rusqlite::{Connection, Row, params};

use crate::{Error, database_id::DatabaseId};

use super::domain::{Transaction, TransactionData};

/// Create the table for storing transactions.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL,
            category TEXT
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get("id")?,
        amount: row.get("amount")?,
        date: row.get("date")?,
        description: row.get("description")?,
        category: row.get("category")?,
    })
}

/// Insert a transaction into the database and return the created record.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction(
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection.execute(
        "INSERT INTO \"transaction\" (amount, date, description, category) VALUES (?1, ?2, ?3, ?4)",
        params![data.amount, data.date, data.description, data.category],
    )?;

    let id = connection.last_insert_rowid();

    Ok(Transaction {
        id,
        amount: data.amount,
        date: data.date,
        description: data.description,
        category: data.category,
    })
}

/// Retrieve the transaction with the given `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has the given `id`, or an
/// error if there is an SQL error.
pub fn get_transaction(id: DatabaseId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .query_row(
            "SELECT id, amount, date, description, category FROM \"transaction\" WHERE id = ?1",
            params![id],
            map_row,
        )
        .map_err(|error| error.into())
}

/// Retrieve all transactions, most recent first.
///
/// Transactions are ordered by date descending, then by id descending so
/// that same-day records list the newest insertion first.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, amount, date, description, category FROM \"transaction\"
            ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_row)?
        .map(|transaction| transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the fields of the transaction with the given `id` and return the
/// updated record.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if no transaction has the given
/// `id`, or an error if there is an SQL error.
pub fn update_transaction(
    id: DatabaseId,
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection.execute(
        "UPDATE \"transaction\" SET amount = ?1, date = ?2, description = ?3, category = ?4
        WHERE id = ?5",
        params![data.amount, data.date, data.description, data.category, id],
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(Transaction {
        id,
        amount: data.amount,
        date: data.date,
        description: data.description,
        category: data.category,
    })
}

/// Delete the transaction with the given `id`.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if no transaction has the given
/// `id`, or an error if there is an SQL error.
pub fn delete_transaction(id: DatabaseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = ?1",
        params![id],
    )?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}
