//! Defines the endpoint for creating (or overwriting) a budget.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{
    BudgetState,
    db::{create_budget, find_budget, update_budget},
    domain::BudgetForm,
};

/// Validate `form` and insert a budget into the database.
///
/// If a budget already exists for the same (category, month) pair, its
/// amount is overwritten instead of inserting a second record. Responds with
/// 201 CREATED for a new budget and 200 OK for an overwrite, with the
/// resulting record as JSON either way.
///
/// # Errors
/// Returns [Error::InvalidField] if the form fails validation.
pub async fn create_budget_endpoint(
    State(state): State<BudgetState>,
    Json(form): Json<BudgetForm>,
) -> Result<Response, Error> {
    let data = form.validate()?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    match find_budget(&data.category, &data.month, &connection)? {
        Some(existing) => {
            let updated = update_budget(existing.id, data, &connection)?;

            Ok(Json(updated).into_response())
        }
        None => {
            let budget = create_budget(data, &connection)?;

            Ok((StatusCode::CREATED, Json(budget)).into_response())
        }
    }
}
