pub mod analytics_service;
pub mod categorization_service;
pub mod expense_service;
pub mod insights_service;
pub mod series_service;
pub mod transaction_service;
pub mod upload_service;
