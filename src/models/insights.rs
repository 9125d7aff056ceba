use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FieldError};
use crate::utils::is_iso8601;

const MAX_CATEGORY_FILTER_LEN: usize = 100;

/// Filters accepted by `GET /insights`. They are validated but do not narrow the output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
}

impl InsightsQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if let Some(start) = &self.start_date {
            if !is_iso8601(start) {
                errors.push(FieldError::new("startDate", "startDate must be in ISO 8601 format"));
            }
        }
        if let Some(end) = &self.end_date {
            if !is_iso8601(end) {
                errors.push(FieldError::new("endDate", "endDate must be in ISO 8601 format"));
            }
        }
        if let Some(category) = &self.category {
            if category.trim().chars().count() > MAX_CATEGORY_FILTER_LEN {
                errors.push(FieldError::new(
                    "category",
                    "Category filter must be less than 100 characters",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub severity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub metric: String,
    pub change: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyDetail {
    pub id: String,
    pub amount: f64,
    pub merchant: String,
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
    pub trends: Vec<Trend>,
    pub anomalies: Vec<AnomalyDetail>,
}
