use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::models::{
    AnalyticsResponse, AnalyticsSummary, CategoryAnalytics, CategoryBreakdown, MerchantAnalytics,
    MonthlySeriesPoint, Period, TimeSeriesPoint,
};
use crate::services::{series_service, transaction_service};
use crate::utils::round2;

/// Fixed spend split. This vocabulary is separate from the merchant table's categories.
pub const CATEGORY_WEIGHTS: [(&str, f64); 6] = [
    ("Operations", 0.32),
    ("R&D", 0.24),
    ("Travel", 0.18),
    ("Meals", 0.11),
    ("Wellness", 0.07),
    ("Other", 0.08),
];

/// Static leaderboard, not derived from any generated transactions.
const TOP_MERCHANTS: [(&str, f64, u32); 5] = [
    ("Nimbus Cloud AI", 12843.74, 2),
    ("BlueBird Air", 3868.68, 3),
    ("Midtown Grocer", 2411.15, 5),
    ("Urban Cowork", 1920.0, 4),
    ("Golden Bean Cafe", 1420.5, 12),
];

/// Months summed into the headline spend figure.
pub const TOTAL_SPEND_MONTHS: usize = 3;
const TRANSACTION_SCALE: usize = 30;
const FLAGGED_SCALE: usize = 10;

/// Sum of the newest `TOTAL_SPEND_MONTHS` points of the series.
pub fn recent_total(series: &[MonthlySeriesPoint]) -> f64 {
    let start = series.len().saturating_sub(TOTAL_SPEND_MONTHS);
    series[start..].iter().map(|p| p.value).sum()
}

pub fn generate_categories(total: f64) -> Vec<CategoryBreakdown> {
    CATEGORY_WEIGHTS
        .iter()
        .map(|(label, pct)| CategoryBreakdown {
            label: label.to_string(),
            value: round2(total * pct),
        })
        .collect()
}

/// Attaches a random count in [20, 120] to each breakdown and averages over it.
pub fn category_analytics<R: Rng>(
    rng: &mut R,
    categories: &[CategoryBreakdown],
) -> Vec<CategoryAnalytics> {
    categories
        .iter()
        .map(|cat| {
            let count: u32 = rng.random_range(20..=120);
            CategoryAnalytics {
                category: cat.label.clone(),
                total: cat.value,
                count,
                avg: round2(cat.value / f64::from(count)),
            }
        })
        .collect()
}

pub fn time_series<R: Rng>(rng: &mut R, monthly: &[MonthlySeriesPoint]) -> Vec<TimeSeriesPoint> {
    monthly
        .iter()
        .map(|point| TimeSeriesPoint {
            period: point.label.clone(),
            value: point.value,
            count: rng.random_range(40..=60),
        })
        .collect()
}

pub fn top_merchants() -> Vec<MerchantAnalytics> {
    TOP_MERCHANTS
        .iter()
        .map(|(merchant, total, count)| MerchantAnalytics {
            merchant: merchant.to_string(),
            total: *total,
            count: *count,
        })
        .collect()
}

/// Builds the `/analytics` payload. `period` is echoed in the summary only.
pub fn build_analytics<R: Rng>(rng: &mut R, now: DateTime<Utc>, period: Period) -> AnalyticsResponse {
    let monthly = series_service::generate_monthly_spend(
        rng,
        now.date_naive(),
        series_service::DEFAULT_WINDOW_MONTHS,
    );
    let total_spend = recent_total(&monthly);
    let transactions = transaction_service::generate_transactions(rng, now);

    let time_series = time_series(rng, &monthly);
    let categories = generate_categories(total_spend);
    let category_breakdown = category_analytics(rng, &categories);

    let total_transactions = transactions.len() * TRANSACTION_SCALE;
    let flagged = transactions.iter().filter(|t| t.anomaly).count();

    let summary = AnalyticsSummary {
        total_spend: round2(total_spend),
        total_transactions,
        avg_ticket: round2(total_spend / total_transactions as f64),
        flagged_count: flagged * FLAGGED_SCALE,
        period,
    };

    debug!(
        "Built analytics for period {}: total_spend={}, flagged={}",
        period, summary.total_spend, summary.flagged_count
    );

    AnalyticsResponse {
        summary,
        time_series,
        category_breakdown,
        top_merchants: top_merchants(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn point(value: f64) -> MonthlySeriesPoint {
        MonthlySeriesPoint {
            label: "Jan 2025".to_string(),
            value,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let sum: f64 = CATEGORY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let total = 61_337.0;
        let categories = generate_categories(total);
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].label, "Operations");
        let sum: f64 = categories.iter().map(|c| c.value).sum();
        assert!((sum - round2(total)).abs() < 0.05, "sum was {}", sum);
    }

    #[test]
    fn test_breakdown_values_are_rounded() {
        let categories = generate_categories(1234.567);
        for cat in categories {
            assert_eq!(cat.value, round2(cat.value));
        }
    }

    #[test]
    fn test_recent_total_uses_last_three_points() {
        let series: Vec<_> = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].into_iter().map(point).collect();
        assert_eq!(recent_total(&series), 15.0);
        assert_eq!(recent_total(&series[..2]), 3.0);
        assert_eq!(recent_total(&[]), 0.0);
    }

    #[test]
    fn test_category_analytics_average_uses_reported_count() {
        let mut rng = StdRng::seed_from_u64(4);
        let analytics = category_analytics(&mut rng, &generate_categories(60_000.0));
        for cat in analytics {
            assert!((20..=120).contains(&cat.count));
            assert_eq!(cat.avg, round2(cat.total / f64::from(cat.count)));
        }
    }

    #[test]
    fn test_top_merchants_static() {
        let merchants = top_merchants();
        assert_eq!(merchants.len(), 5);
        assert_eq!(merchants[0].merchant, "Nimbus Cloud AI");
        assert_eq!(merchants[4].count, 12);
    }

    #[test]
    fn test_build_analytics() {
        let mut rng = StdRng::seed_from_u64(10);
        let now = Utc.with_ymd_and_hms(2025, 6, 18, 9, 0, 0).unwrap();
        let report = build_analytics(&mut rng, now, Period::OneYear);

        assert_eq!(report.summary.period, Period::OneYear);
        assert_eq!(report.summary.total_transactions, 360);
        assert_eq!(report.summary.flagged_count % 10, 0);
        assert!(report.summary.flagged_count <= 120);
        assert_eq!(
            report.summary.avg_ticket,
            round2(report.summary.total_spend / 360.0)
        );

        assert_eq!(report.time_series.len(), 6);
        assert!(report.time_series.iter().all(|p| (40..=60).contains(&p.count)));
        let newest: f64 = report.time_series[3..].iter().map(|p| p.value).sum();
        assert_eq!(report.summary.total_spend, round2(newest));

        assert_eq!(report.category_breakdown.len(), 6);
        assert_eq!(report.top_merchants.len(), 5);
    }
}
