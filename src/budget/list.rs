//! Defines the endpoint for listing all budgets.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{BudgetState, db::get_all_budgets};

/// List all budgets, most recent month first.
pub async fn get_budgets_endpoint(State(state): State<BudgetState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let budgets = get_all_budgets(&connection)?;

    Ok(Json(budgets).into_response())
}
