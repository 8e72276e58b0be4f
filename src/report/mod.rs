//! Derived views over transactions and budgets.
//!
//! The aggregation functions in [aggregation] are pure: they take
//! already-loaded records plus an explicit reference date and produce the
//! report data. The handlers in [handlers] load the records and serve the
//! results as JSON.

pub mod aggregation;
mod handlers;

pub use handlers::{
    ReportState, get_budget_comparison_endpoint, get_category_breakdown_endpoint,
    get_monthly_totals_endpoint, get_summary_endpoint,
};
