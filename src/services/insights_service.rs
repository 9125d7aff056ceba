use crate::models::{AnomalyDetail, Insight, InsightsQuery, InsightsResponse, Trend};

const DEFAULT_ALERT_CATEGORY: &str = "Travel";

fn insight(kind: &str, title: &str, description: String, severity: &str) -> Insight {
    Insight {
        kind: kind.to_string(),
        title: title.to_string(),
        description,
        severity: severity.to_string(),
    }
}

fn trend(metric: &str, change: &str) -> Trend {
    Trend {
        metric: metric.to_string(),
        change: change.to_string(),
        period: "MoM".to_string(),
    }
}

/// Canned insights. The date filters are accepted but ignored; the category
/// filter only fills in the category alert text.
pub fn build_insights(query: &InsightsQuery) -> InsightsResponse {
    let alert_category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_ALERT_CATEGORY);

    let insights = vec![
        insight(
            "spending_pattern",
            "Spending increased 12% this month",
            "Your spending has increased compared to last month. Consider reviewing recurring subscriptions.".to_string(),
            "info",
        ),
        insight(
            "category_alert",
            "High travel expenses detected",
            format!("{} category accounts for 28% of total spending this period.", alert_category),
            "warning",
        ),
        insight(
            "anomaly",
            "Unusual transaction detected",
            "A transaction of $6,421.87 was flagged as anomalous.".to_string(),
            "error",
        ),
    ];

    let recommendations = [
        "Review flagged transactions weekly",
        "Set up category-based spending limits",
        "Enable real-time anomaly alerts",
    ]
    .iter()
    .map(|r| r.to_string())
    .collect();

    let trends = vec![
        trend("Total Spend", "+12%"),
        trend("Average Ticket", "+5%"),
        trend("Anomaly Rate", "+2%"),
    ];

    let anomalies = vec![AnomalyDetail {
        id: "txn_0002".to_string(),
        amount: 6421.87,
        merchant: "Nimbus Cloud AI".to_string(),
        date: "2024-12-04".to_string(),
        reason: "Spike beyond 30-day mean".to_string(),
    }];

    InsightsResponse {
        insights,
        recommendations,
        trends,
        anomalies,
    }
}
