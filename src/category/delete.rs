//! Defines the endpoint for deleting a category.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{Error, database_id::DatabaseId};

use super::{CategoryState, db::delete_category};

/// Delete the category with the id given in the URL path.
///
/// Transactions referencing the deleted category are left untouched, so
/// reports keep grouping them under the old name.
///
/// Responds with `{"success": true, "id": <id>}`.
///
/// # Errors
/// Returns [Error::DeleteMissingCategory] if no category has the given id.
pub async fn delete_category_endpoint(
    State(state): State<CategoryState>,
    Path(category_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    delete_category(category_id, &connection)?;

    Ok(Json(json!({"success": true, "id": category_id})).into_response())
}

#[cfg(test)]
mod delete_category_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;

    use crate::category::{CategoryState, create_category_table, db};

    use super::delete_category_endpoint;

    fn get_test_state() -> CategoryState {
        let connection = Connection::open_in_memory().unwrap();
        create_category_table(&connection).unwrap();

        CategoryState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn deletes_existing_category() {
        let state = get_test_state();
        let created = {
            let connection = state.db_connection.lock().unwrap();
            db::create_category("Food", &connection).unwrap()
        };

        let response = delete_category_endpoint(State(state.clone()), Path(created.id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let connection = state.db_connection.lock().unwrap();
        assert!(db::get_all_categories(&connection).unwrap().is_empty());
    }

    #[tokio::test]
    async fn returns_not_found_for_missing_category() {
        let state = get_test_state();

        let response = delete_category_endpoint(State(state), Path(999)).await;

        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
