//! Defines the application's routes.

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::{
    AppState,
    budget::{
        create_budget_endpoint, delete_budget_endpoint, get_budget_endpoint,
        get_budgets_endpoint, update_budget_endpoint,
    },
    category::{create_category_endpoint, delete_category_endpoint, get_categories_endpoint},
    endpoints,
    report::{
        get_budget_comparison_endpoint, get_category_breakdown_endpoint,
        get_monthly_totals_endpoint, get_summary_endpoint,
    },
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transaction_endpoint,
        get_transactions_endpoint, update_transaction_endpoint,
    },
};

/// Create the API router.
///
/// CORS is left permissive since the API is consumed by browser clients
/// served from other origins.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint)
                .put(update_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, delete(delete_category_endpoint))
        .route(
            endpoints::BUDGETS,
            get(get_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint)
                .put(update_budget_endpoint)
                .delete(delete_budget_endpoint),
        )
        .route(
            endpoints::MONTHLY_TOTALS_REPORT,
            get(get_monthly_totals_endpoint),
        )
        .route(
            endpoints::CATEGORY_BREAKDOWN_REPORT,
            get(get_category_breakdown_endpoint),
        )
        .route(
            endpoints::BUDGET_COMPARISON_REPORT,
            get(get_budget_comparison_endpoint),
        )
        .route(endpoints::SUMMARY_REPORT, get(get_summary_endpoint))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "the requested resource does not exist"})),
    )
}
