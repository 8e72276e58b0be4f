//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::DatabaseId};

use super::{TransactionState, db::update_transaction, domain::TransactionForm};

/// Validate `form` and overwrite the transaction with the id given in the
/// URL path.
///
/// Responds with the updated record as JSON.
///
/// # Errors
/// Returns [Error::InvalidField] if the form fails validation, or
/// [Error::UpdateMissingTransaction] if no transaction has the given id.
pub async fn update_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<DatabaseId>,
    Json(form): Json<TransactionForm>,
) -> Result<Response, Error> {
    let data = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transaction = update_transaction(transaction_id, data, &connection)?;

    Ok(Json(transaction).into_response())
}
