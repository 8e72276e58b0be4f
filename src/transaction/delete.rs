//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{Error, database_id::DatabaseId};

use super::{TransactionState, db::delete_transaction};

/// Delete the transaction with the id given in the URL path.
///
/// Responds with `{"success": true, "id": <id>}`.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if no transaction has the
/// given id.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    delete_transaction(transaction_id, &connection)?;

    Ok(Json(json!({"success": true, "id": transaction_id})).into_response())
}
