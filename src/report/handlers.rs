//! Defines the endpoints serving the report data.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    budget::get_all_budgets,
    category::get_all_categories,
    month::parse_month,
    transaction::{Transaction, get_all_transactions},
};

use super::aggregation::{
    RECENT_TRANSACTION_COUNT, SummaryStatistics, Window, budget_comparison, category_breakdown,
    monthly_totals, recent_transactions, summary_statistics,
};

/// The state needed to produce reports.
#[derive(Debug, Clone)]
pub struct ReportState {
    /// The database connection for loading transactions, categories and
    /// budgets.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ReportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the monthly totals report.
#[derive(Debug, Default, Deserialize)]
pub struct MonthlyTotalsParams {
    /// How far back the totals reach. Defaults to six months.
    #[serde(default)]
    pub range: Window,
}

/// Serve total spending per month over the requested window.
///
/// Responds with a chronologically ascending array of `{month, total}`
/// objects, or JSON null when the store has no transactions.
pub async fn get_monthly_totals_endpoint(
    State(state): State<ReportState>,
    Query(params): Query<MonthlyTotalsParams>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transactions = get_all_transactions(&connection)?;
    let today = OffsetDateTime::now_utc().date();

    Ok(Json(monthly_totals(&transactions, params.range, today)).into_response())
}

/// Serve total spending per category across all transactions.
///
/// Categories without spending are omitted. Transactions without a category
/// appear under "Uncategorized".
pub async fn get_category_breakdown_endpoint(
    State(state): State<ReportState>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transactions = get_all_transactions(&connection)?;
    let known_categories: Vec<String> = get_all_categories(&connection)?
        .into_iter()
        .map(|category| category.name)
        .collect();

    Ok(Json(category_breakdown(&transactions, &known_categories)).into_response())
}

/// The query parameters for the budget comparison report.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetComparisonParams {
    /// The calendar month to compare, as "YYYY-MM".
    pub month: Option<String>,
}

/// Serve each budget for the requested month measured against the spending
/// in that month.
///
/// # Errors
/// Returns [Error::InvalidField] if the month parameter is missing or not in
/// YYYY-MM format.
pub async fn get_budget_comparison_endpoint(
    State(state): State<ReportState>,
    Query(params): Query<BudgetComparisonParams>,
) -> Result<Response, Error> {
    let month = params.month.ok_or(Error::InvalidField {
        field: "month",
        message: "month is required".to_owned(),
    })?;
    let month_start = parse_month(&month)?;

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let budgets = get_all_budgets(&connection)?;
    let transactions = get_all_transactions(&connection)?;

    Ok(Json(budget_comparison(&budgets, &transactions, month_start)).into_response())
}

/// The response body for the summary report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    /// The aggregate statistics, or null when the store has no transactions.
    pub summary: Option<SummaryStatistics>,
    /// The five most recent transactions, newest first.
    pub recent_transactions: Vec<Transaction>,
}

/// Serve the aggregate statistics and the most recent transactions.
pub async fn get_summary_endpoint(State(state): State<ReportState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLock)?;

    let transactions = get_all_transactions(&connection)?;

    let report = SummaryReport {
        summary: summary_statistics(&transactions),
        recent_transactions: recent_transactions(&transactions, RECENT_TRANSACTION_COUNT),
    };

    Ok(Json(report).into_response())
}

#[cfg(test)]
mod report_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db,
        transaction::{TransactionData, create_transaction},
    };

    use super::{
        BudgetComparisonParams, MonthlyTotalsParams, ReportState, get_budget_comparison_endpoint,
        get_category_breakdown_endpoint, get_monthly_totals_endpoint, get_summary_endpoint,
    };

    fn get_test_state() -> ReportState {
        let connection = Connection::open_in_memory().unwrap();
        db::initialize(&connection).unwrap();

        ReportState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn insert_sample_transaction(state: &ReportState) {
        let connection = state.db_connection.lock().unwrap();
        create_transaction(
            TransactionData {
                amount: 10.0,
                date: date!(2024 - 03 - 05),
                description: "Sample".to_owned(),
                category: Some("Food".to_owned()),
            },
            &connection,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn monthly_totals_returns_ok() {
        let state = get_test_state();
        insert_sample_transaction(&state);

        let response =
            get_monthly_totals_endpoint(State(state), Query(MonthlyTotalsParams::default()))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn category_breakdown_returns_ok_for_empty_store() {
        let state = get_test_state();

        let response = get_category_breakdown_endpoint(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn budget_comparison_requires_month() {
        let state = get_test_state();

        let response =
            get_budget_comparison_endpoint(State(state), Query(BudgetComparisonParams::default()))
                .await;

        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn budget_comparison_rejects_malformed_month() {
        let state = get_test_state();
        let params = BudgetComparisonParams {
            month: Some("March".to_owned()),
        };

        let response = get_budget_comparison_endpoint(State(state), Query(params)).await;

        let response = response.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn summary_returns_ok() {
        let state = get_test_state();
        insert_sample_transaction(&state);

        let response = get_summary_endpoint(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
