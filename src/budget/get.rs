//! Defines the endpoint for retrieving a single budget.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::DatabaseId};

use super::{BudgetState, db::get_budget};

/// Retrieve the budget with the id given in the URL path.
///
/// # Errors
/// Returns [Error::NotFound] if no budget has the given id.
pub async fn get_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let budget = get_budget(budget_id, &connection)?;

    Ok(Json(budget).into_response())
}
