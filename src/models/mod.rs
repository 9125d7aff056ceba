mod analytics;
mod categorize;
mod expense;
mod insights;
mod upload;

pub use analytics::*;
pub use categorize::{CategorizeRequest, CategorizeResponse};
pub use expense::{CategoryBreakdown, ExpenseResponse, ExpenseSummary, MonthlySeriesPoint, Transaction};
pub use insights::{AnomalyDetail, Insight, InsightsQuery, InsightsResponse, Trend};
pub use upload::{FileUploadRequest, FileUploadResponse, MAX_FILES_PER_UPLOAD};
