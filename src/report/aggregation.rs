//! Pure aggregation functions for the report endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    budget::Budget,
    month::{first_of_month, month_end, month_key, month_label, months_back, next_month},
    transaction::Transaction,
};

/// The bucket name for transactions without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The number of transactions reported by the summary endpoint.
pub const RECENT_TRANSACTION_COUNT: usize = 5;

/// How far back the rolling monthly totals reach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Window {
    /// The current month and the three months before it.
    #[serde(rename = "3months")]
    ThreeMonths,
    /// The current month and the six months before it.
    #[default]
    #[serde(rename = "6months")]
    SixMonths,
    /// The current month and the twelve months before it.
    #[serde(rename = "1year")]
    OneYear,
}

impl Window {
    /// The number of whole months before the current month that the window
    /// reaches back.
    pub fn months(self) -> u32 {
        match self {
            Window::ThreeMonths => 3,
            Window::SixMonths => 6,
            Window::OneYear => 12,
        }
    }
}

/// The spending total for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// The month display label, e.g. "Mar 24".
    pub month: String,
    /// The sum of transaction amounts in the month.
    pub total: f64,
}

/// The spending total for one category bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// The category bucket name.
    pub category: String,
    /// The sum of transaction amounts in the bucket.
    pub total: f64,
}

/// One category's budget measured against its actual spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparisonRow {
    /// The budgeted category name.
    pub category: String,
    /// The budgeted amount.
    pub budget: f64,
    /// The amount actually spent in the month. Zero when nothing was spent.
    pub actual: f64,
    /// How much budget is left. Zero when the budget is met or exceeded.
    pub remaining: f64,
    /// How far past the budget the spend went. Zero when within budget.
    pub overspent: f64,
    /// Spend as a percentage of budget. Deliberately uncapped so that the
    /// value keeps saying how far over budget the spend went.
    pub percent_used: f64,
}

/// Aggregate statistics over every transaction in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// The sum of all transaction amounts.
    pub total: f64,
    /// The number of transactions.
    pub count: usize,
    /// The mean transaction amount.
    pub average: f64,
}

/// Total spending per month over the given window, oldest month first.
///
/// The window covers every calendar month from `window.months()` whole
/// months before `today` through the month of `today`, inclusive. Months
/// with no transactions appear with a total of zero. Transactions dated
/// before the window start or after the month of `today` are ignored.
///
/// Returns [None] when `transactions` is empty, since a chart of all-zero
/// months would misrepresent an empty store.
pub fn monthly_totals(
    transactions: &[Transaction],
    window: Window,
    today: Date,
) -> Option<Vec<MonthlyTotal>> {
    if transactions.is_empty() {
        return None;
    }

    let window_start = months_back(today, window.months());
    let last_bucket = first_of_month(today);

    let mut bucket_months = Vec::new();
    let mut month_cursor = window_start;
    while month_cursor <= last_bucket {
        bucket_months.push(month_cursor);
        month_cursor = next_month(month_cursor);
    }

    let mut totals: HashMap<String, f64> = bucket_months
        .iter()
        .map(|month| (month_key(*month), 0.0))
        .collect();

    for transaction in transactions {
        if transaction.date < window_start {
            continue;
        }

        if let Some(total) = totals.get_mut(&month_key(transaction.date)) {
            *total += transaction.amount;
        }
    }

    Some(
        bucket_months
            .into_iter()
            .map(|month| MonthlyTotal {
                month: month_label(month),
                total: totals[&month_key(month)],
            })
            .collect(),
    )
}

/// Sum transaction amounts into category buckets.
///
/// Every known category gets a bucket, as does [UNCATEGORIZED], so that
/// categories without spending report a zero total. A transaction without a
/// category counts towards [UNCATEGORIZED]; a transaction whose category is
/// not in `known_categories` keeps a bucket under its own name, which is how
/// spending keeps its label after the category record is deleted.
pub fn bucket_by_category(
    transactions: &[Transaction],
    known_categories: &[String],
) -> HashMap<String, f64> {
    let mut buckets: HashMap<String, f64> = known_categories
        .iter()
        .map(|category| (category.clone(), 0.0))
        .collect();
    buckets.insert(UNCATEGORIZED.to_owned(), 0.0);

    for transaction in transactions {
        let bucket = match &transaction.category {
            Some(category) if !category.is_empty() => category.clone(),
            _ => UNCATEGORIZED.to_owned(),
        };

        *buckets.entry(bucket).or_insert(0.0) += transaction.amount;
    }

    buckets
}

/// Total spending per category across all transactions, alphabetical by
/// category name.
///
/// Buckets with no spending are dropped from the output.
pub fn category_breakdown(
    transactions: &[Transaction],
    known_categories: &[String],
) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = bucket_by_category(transactions, known_categories)
        .into_iter()
        .filter(|(_, total)| *total != 0.0)
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();

    breakdown.sort_by(|a, b| a.category.cmp(&b.category));

    breakdown
}

/// Measure each budget for the month starting at `month_start` against the
/// spending in that month.
///
/// Only budgeted categories appear; a category with spending but no budget
/// is not a comparison row. A budgeted category with no spending appears
/// with an actual of zero.
pub fn budget_comparison(
    budgets: &[Budget],
    transactions: &[Transaction],
    month_start: Date,
) -> Vec<BudgetComparisonRow> {
    let key = month_key(month_start);
    let last_day = month_end(month_start);

    let month_transactions: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.date >= month_start && transaction.date <= last_day)
        .cloned()
        .collect();
    let actuals = bucket_by_category(&month_transactions, &[]);

    budgets
        .iter()
        .filter(|budget| budget.month == key)
        .map(|budget| {
            let actual = actuals.get(&budget.category).copied().unwrap_or(0.0);

            BudgetComparisonRow {
                category: budget.category.clone(),
                budget: budget.amount,
                actual,
                remaining: (budget.amount - actual).max(0.0),
                overspent: (actual - budget.amount).max(0.0),
                percent_used: actual / budget.amount * 100.0,
            }
        })
        .collect()
}

/// The total, count and mean over all transactions.
///
/// Returns [None] when `transactions` is empty, since an average over zero
/// transactions is undefined.
pub fn summary_statistics(transactions: &[Transaction]) -> Option<SummaryStatistics> {
    if transactions.is_empty() {
        return None;
    }

    let total: f64 = transactions.iter().map(|transaction| transaction.amount).sum();

    Some(SummaryStatistics {
        total,
        count: transactions.len(),
        average: total / transactions.len() as f64,
    })
}

/// The `count` most recent transactions, newest first.
///
/// Same-day transactions are ordered by id descending so that the most
/// recently created record wins.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    recent.truncate(count);

    recent
}
