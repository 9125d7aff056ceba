use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{AppError, FieldError};

/// Reporting window requested by `GET /analytics`. Echoed back, never applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    SevenDays,
    ThirtyDays,
    #[default]
    NinetyDays,
    OneYear,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::NinetyDays => "90d",
            Period::OneYear => "1y",
            Period::All => "all",
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Period::SevenDays),
            "30d" => Ok(Period::ThirtyDays),
            "90d" => Ok(Period::NinetyDays),
            "1y" => Ok(Period::OneYear),
            "all" => Ok(Period::All),
            _ => Err("period must be one of: 7d, 30d, 90d, 1y, all".to_string()),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    Day,
    Week,
    #[default]
    Month,
    Category,
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(GroupBy::Day),
            "week" => Ok(GroupBy::Week),
            "month" => Ok(GroupBy::Month),
            "category" => Ok(GroupBy::Category),
            _ => Err("groupBy must be one of: day, week, month, category".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsQuery {
    pub period: Option<String>,
    pub group_by: Option<String>,
}

impl AnalyticsQuery {
    /// Resolves both parameters against their allowed values, applying defaults.
    pub fn parse(&self) -> Result<(Period, GroupBy), AppError> {
        let mut errors = Vec::new();

        let period = match self.period.as_deref() {
            None => Period::default(),
            Some(raw) => raw.parse::<Period>().unwrap_or_else(|msg| {
                errors.push(FieldError::new("period", msg));
                Period::default()
            }),
        };
        let group_by = match self.group_by.as_deref() {
            None => GroupBy::default(),
            Some(raw) => raw.parse::<GroupBy>().unwrap_or_else(|msg| {
                errors.push(FieldError::new("groupBy", msg));
                GroupBy::default()
            }),
        };

        if errors.is_empty() {
            Ok((period, group_by))
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_spend: f64,
    pub total_transactions: usize,
    pub avg_ticket: f64,
    pub flagged_count: usize,
    pub period: Period,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub period: String,
    pub value: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAnalytics {
    pub category: String,
    pub total: f64,
    pub count: u32,
    pub avg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantAnalytics {
    pub merchant: String,
    pub total: f64,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub summary: AnalyticsSummary,
    pub time_series: Vec<TimeSeriesPoint>,
    pub category_breakdown: Vec<CategoryAnalytics>,
    pub top_merchants: Vec<MerchantAnalytics>,
}
