//! Database operations for categories.

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId};

/// The categories seeded into an empty store on first listing.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food",
    "Housing",
    "Transportation",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Personal",
    "Education",
    "Travel",
];

/// A label for grouping transactions and budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The server-assigned id.
    pub id: DatabaseId,
    /// The category name. Unique across the store.
    pub name: String,
}

/// Create the table for storing categories.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

/// Insert a category into the database and return the created record.
///
/// # Errors
/// Returns [Error::DuplicateCategoryName] if a category with the same name
/// already exists, or an error if there is an SQL error.
pub fn create_category(name: &str, connection: &Connection) -> Result<Category, Error> {
    if category_name_exists(name, connection)? {
        return Err(Error::DuplicateCategoryName(name.to_owned()));
    }

    connection.execute("INSERT INTO category (name) VALUES (?1)", params![name])?;

    Ok(Category {
        id: connection.last_insert_rowid(),
        name: name.to_owned(),
    })
}

fn category_name_exists(name: &str, connection: &Connection) -> Result<bool, Error> {
    let count: i64 = connection.query_row(
        "SELECT COUNT(id) FROM category WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;

    Ok(count > 0)
}

/// Retrieve all categories in alphabetical order.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, name FROM category ORDER BY name ASC")?
        .query_map([], map_row)?
        .map(|category| category.map_err(|error| error.into()))
        .collect()
}

/// Insert the default categories if the store has none.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn seed_default_categories(connection: &Connection) -> Result<(), Error> {
    let count: i64 = connection.query_row("SELECT COUNT(id) FROM category", [], |row| row.get(0))?;

    if count > 0 {
        return Ok(());
    }

    for name in DEFAULT_CATEGORIES {
        connection.execute("INSERT INTO category (name) VALUES (?1)", params![name])?;
    }

    tracing::info!("seeded {} default categories", DEFAULT_CATEGORIES.len());

    Ok(())
}

/// Delete the category with the given `id`.
///
/// Transactions that reference the deleted category keep their category
/// string as-is.
///
/// # Errors
/// Returns [Error::DeleteMissingCategory] if no category has the given `id`,
/// or an error if there is an SQL error.
pub fn delete_category(id: DatabaseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM category WHERE id = ?1", params![id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingCategory);
    }

    Ok(())
}

#[cfg(test)]
mod category_db_tests {
    use rusqlite::Connection;

    use crate::Error;

    use super::{
        DEFAULT_CATEGORIES, create_category, create_category_table, delete_category,
        get_all_categories, seed_default_categories,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).unwrap();

        connection
    }

    #[test]
    fn create_rejects_duplicate_name() {
        let connection = get_test_connection();
        create_category("Food", &connection).unwrap();

        assert_eq!(
            create_category("Food", &connection),
            Err(Error::DuplicateCategoryName("Food".to_owned()))
        );
    }

    #[test]
    fn get_all_orders_by_name() {
        let connection = get_test_connection();
        create_category("Travel", &connection).unwrap();
        create_category("Food", &connection).unwrap();
        create_category("Housing", &connection).unwrap();

        let names: Vec<_> = get_all_categories(&connection)
            .unwrap()
            .into_iter()
            .map(|category| category.name)
            .collect();

        assert_eq!(names, vec!["Food", "Housing", "Travel"]);
    }

    #[test]
    fn seed_populates_empty_store() {
        let connection = get_test_connection();

        seed_default_categories(&connection).unwrap();

        let categories = get_all_categories(&connection).unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        for name in DEFAULT_CATEGORIES {
            assert!(
                categories.iter().any(|category| category.name == name),
                "default category {name} not found"
            );
        }
    }

    #[test]
    fn seed_skips_non_empty_store() {
        let connection = get_test_connection();
        create_category("Pets", &connection).unwrap();

        seed_default_categories(&connection).unwrap();

        let categories = get_all_categories(&connection).unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Pets");
    }

    #[test]
    fn delete_removes_category() {
        let connection = get_test_connection();
        let created = create_category("Food", &connection).unwrap();

        delete_category(created.id, &connection).unwrap();

        assert!(get_all_categories(&connection).unwrap().is_empty());
    }

    #[test]
    fn delete_fails_on_missing_category() {
        let connection = get_test_connection();

        assert_eq!(
            delete_category(999, &connection),
            Err(Error::DeleteMissingCategory)
        );
    }
}
