//! Defines the endpoint for listing all categories.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{
    CategoryState,
    db::{get_all_categories, seed_default_categories},
};

/// List all categories in alphabetical order.
///
/// An empty store is seeded with the default categories before listing, so
/// the first call on a fresh database returns the default set.
pub async fn get_categories_endpoint(
    State(state): State<CategoryState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    seed_default_categories(&connection)?;
    let categories = get_all_categories(&connection)?;

    Ok(Json(categories).into_response())
}
