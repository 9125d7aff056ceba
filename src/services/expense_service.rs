use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::models::{ExpenseResponse, ExpenseSummary};
use crate::services::{analytics_service, series_service, transaction_service};
use crate::utils::round2;

/// Builds the `/expenses` dashboard payload from freshly generated data.
pub fn build_expense_report<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> ExpenseResponse {
    let monthly = series_service::generate_monthly_spend(
        rng,
        now.date_naive(),
        series_service::DEFAULT_WINDOW_MONTHS,
    );
    let total_spend = analytics_service::recent_total(&monthly);
    let transactions = transaction_service::generate_transactions(rng, now);

    let flagged_count = transactions.iter().filter(|t| t.anomaly).count();
    let avg_ticket =
        transactions.iter().map(|t| t.amount).sum::<f64>() / transaction_service::BATCH_SIZE as f64;

    debug!(
        "Built expense report: total_spend={}, flagged={}",
        total_spend, flagged_count
    );

    ExpenseResponse {
        summary: ExpenseSummary {
            total_spend: round2(total_spend),
            flagged_count,
            avg_ticket: round2(avg_ticket),
        },
        categories: analytics_service::generate_categories(total_spend),
        monthly_spending: monthly,
        transactions,
    }
}
