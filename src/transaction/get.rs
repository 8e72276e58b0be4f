//! Defines the endpoint for retrieving a single transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::DatabaseId};

use super::{TransactionState, db::get_transaction};

/// Retrieve the transaction with the id given in the URL path.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has the given id.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transaction = get_transaction(transaction_id, &connection)?;

    Ok(Json(transaction).into_response())
}
