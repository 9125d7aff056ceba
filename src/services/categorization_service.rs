use rand::Rng;
use tracing::debug;

use crate::models::CategorizeResponse;
use crate::utils::round2;

/// Ordered (substring, category) pairs. The first substring found in the
/// lower-cased merchant name decides the category, so order matters.
pub const KEYWORD_CATEGORIES: [(&str, &str); 16] = [
    ("groc", "Groceries"),
    ("food", "Meals"),
    ("market", "Groceries"),
    ("air", "Travel"),
    ("hotel", "Travel"),
    ("flight", "Travel"),
    ("cloud", "Software"),
    ("saas", "Software"),
    ("software", "Software"),
    ("restaurant", "Meals"),
    ("cafe", "Meals"),
    ("metro", "Transport"),
    ("bus", "Transport"),
    ("gym", "Wellness"),
    ("fitness", "Wellness"),
    ("medical", "Wellness"),
];

pub const FALLBACK_CATEGORY: &str = "Other";
pub const FALLBACK_CONFIDENCE: f64 = 0.65;
pub const CONFIDENCE_FLOOR: f64 = 0.6;
const HIGH_AMOUNT_PENALTY_THRESHOLD: f64 = 5000.0;
const HIGH_VALUE_TAG_THRESHOLD: f64 = 1000.0;

/// Returns the category of the first keyword contained in `merchant`, if any.
pub fn match_keyword(merchant: &str) -> Option<&'static str> {
    let merchant_lower = merchant.to_lowercase();
    KEYWORD_CATEGORIES
        .iter()
        .find(|(keyword, _)| merchant_lower.contains(keyword))
        .map(|(_, category)| *category)
}

pub fn classify<R: Rng>(rng: &mut R, merchant: &str, amount: f64) -> CategorizeResponse {
    let merchant_lower = merchant.to_lowercase();

    let (category, mut confidence) = match match_keyword(&merchant_lower) {
        Some(category) => (category, round2(rng.random_range(0.78..=0.95))),
        None => (FALLBACK_CATEGORY, FALLBACK_CONFIDENCE),
    };

    if amount > HIGH_AMOUNT_PENALTY_THRESHOLD {
        confidence = round2((confidence - 0.1).max(CONFIDENCE_FLOOR));
    }

    let mut tags = Vec::new();
    if amount > HIGH_VALUE_TAG_THRESHOLD {
        tags.push("high-value".to_string());
    }
    if merchant_lower.contains("subscription") {
        tags.push("recurring".to_string());
    }

    debug!(merchant, amount, category, confidence, "Classified merchant");

    CategorizeResponse {
        category: category.to_string(),
        confidence,
        subcategory: None,
        tags,
    }
}
