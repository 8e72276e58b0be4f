//! Defines the endpoint for creating a new category.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::Error;

use super::{CategoryState, db::create_category};

/// The request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    /// The name for the new category.
    pub name: Option<String>,
}

/// Validate `form` and insert a category into the database.
///
/// Responds with 201 CREATED and the created record as JSON.
///
/// # Errors
/// Returns [Error::InvalidField] if the name is missing or empty, or
/// [Error::DuplicateCategoryName] if a category with the same name already
/// exists.
pub async fn create_category_endpoint(
    State(state): State<CategoryState>,
    Json(form): Json<CategoryForm>,
) -> Result<Response, Error> {
    let name = form
        .name
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .ok_or(Error::InvalidField {
            field: "name",
            message: "name is required".to_owned(),
        })?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let category = create_category(&name, &connection)?;

    Ok((StatusCode::CREATED, Json(category)).into_response())
}
