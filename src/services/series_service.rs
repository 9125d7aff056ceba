use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::models::MonthlySeriesPoint;

pub const DEFAULT_WINDOW_MONTHS: usize = 6;
const BASELINE_SPEND: f64 = 18000.0;
const MONTHLY_DRIFT: f64 = 450.0;
const JITTER: i32 = 2500;

/// Labels (`"Jan 2025"`) for a rolling window ending at the month of `today`, oldest first.
///
/// Each step back is a flat 30 days from the first of the current month, not a
/// calendar month, so long windows can repeat or skip a label.
pub fn rolling_month_labels(today: NaiveDate, months: usize) -> Vec<String> {
    let anchor = today - Duration::days(i64::from(today.day0()));
    let mut labels: Vec<String> = (0..months)
        .map(|diff| {
            let point = anchor - Duration::days(diff as i64 * 30);
            point.format("%b %Y").to_string()
        })
        .collect();
    labels.reverse();
    labels
}

/// Baseline spend plus a linear upward drift per month and integer jitter.
pub fn generate_monthly_spend<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    months: usize,
) -> Vec<MonthlySeriesPoint> {
    let series: Vec<MonthlySeriesPoint> = rolling_month_labels(today, months)
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let jitter = rng.random_range(-JITTER..=JITTER);
            let drift = index as f64 * MONTHLY_DRIFT;
            MonthlySeriesPoint {
                label,
                value: BASELINE_SPEND + drift + f64::from(jitter),
            }
        })
        .collect();

    debug!("Generated {} monthly spend points", series.len());
    series
}
