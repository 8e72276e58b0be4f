//! Defines the endpoint for updating an existing budget.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{Error, database_id::DatabaseId};

use super::{BudgetState, db::update_budget, domain::BudgetForm};

/// Validate `form` and overwrite the budget with the id given in the URL path.
///
/// Responds with the updated record as JSON.
///
/// # Errors
/// Returns [Error::InvalidField] if the form fails validation, or
/// [Error::UpdateMissingBudget] if no budget has the given id.
pub async fn update_budget_endpoint(
    State(state): State<BudgetState>,
    Path(budget_id): Path<DatabaseId>,
    Json(form): Json<BudgetForm>,
) -> Result<Response, Error> {
    let data = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let budget = update_budget(budget_id, data, &connection)?;

    Ok(Json(budget).into_response())
}
