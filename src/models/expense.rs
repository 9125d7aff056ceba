use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub total_spend: f64,
    pub flagged_count: usize,
    pub avg_ticket: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub label: String,
    pub value: f64,
}

/// One point of a rolling monthly window, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySeriesPoint {
    pub label: String,
    pub value: f64,
}

/// A synthetic transaction. `note` is present exactly when `anomaly` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub merchant: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub anomaly: bool,
    pub confidence: f64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub summary: ExpenseSummary,
    pub categories: Vec<CategoryBreakdown>,
    pub monthly_spending: Vec<MonthlySeriesPoint>,
    pub transactions: Vec<Transaction>,
}
