use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FieldError};
use crate::utils::is_iso8601;

const MAX_MERCHANT_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct CategorizeRequest {
    pub merchant: String,
    pub amount: f64,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl CategorizeRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        let merchant = self.merchant.trim();
        if merchant.is_empty() {
            errors.push(FieldError::new("merchant", "Merchant name is required"));
        } else if merchant.chars().count() > MAX_MERCHANT_LEN {
            errors.push(FieldError::new(
                "merchant",
                "Merchant name must be between 1 and 200 characters",
            ));
        }

        if !self.amount.is_finite() || self.amount < 0.01 {
            errors.push(FieldError::new("amount", "Amount must be a positive number"));
        }

        if let Some(date) = &self.date {
            if !is_iso8601(date) {
                errors.push(FieldError::new(
                    "date",
                    "Date must be in ISO 8601 format (YYYY-MM-DD)",
                ));
            }
        }

        if let Some(description) = &self.description {
            if description.trim().chars().count() > MAX_DESCRIPTION_LEN {
                errors.push(FieldError::new(
                    "description",
                    "Description must be less than 500 characters",
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

/// Output of the keyword classifier. `subcategory` is never filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizeResponse {
    pub category: String,
    pub confidence: f64,
    pub subcategory: Option<String>,
    pub tags: Vec<String>,
}
