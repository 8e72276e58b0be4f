//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{TransactionState, db::create_transaction, domain::TransactionForm};

/// Validate `form` and insert a transaction into the database.
///
/// Responds with 201 CREATED and the created record as JSON.
///
/// # Errors
/// Returns [Error::InvalidField] if the form fails validation.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    Json(form): Json<TransactionForm>,
) -> Result<Response, Error> {
    let data = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transaction = create_transaction(data, &connection)?;

    Ok((StatusCode::CREATED, Json(transaction)).into_response())
}
