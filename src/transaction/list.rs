//! Defines the endpoint for listing all transactions.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{TransactionState, db::get_all_transactions};

/// List all transactions, most recent first.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transactions = get_all_transactions(&connection)?;

    Ok(Json(transactions).into_response())
}
