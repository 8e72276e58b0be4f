//! Defines the endpoint for deleting a budget.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{Error, database_id::DatabaseId};

use super::{BudgetState, db::delete_budget};

/// Delete the budget with the id given in the URL path.
///
/// Responds with `{"success": true, "id": <id>}`.
///
/// # Errors
/// Returns [Error::DeleteMissingBudget] if no budget has the given id.
pub async fn delete_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    delete_budget(budget_id, &connection)?;

    Ok(Json(json!({"success": true, "id": budget_id})).into_response())
}
