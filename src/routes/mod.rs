pub(crate) mod analytics;
pub(crate) mod categorize;
pub(crate) mod expenses;
pub(crate) mod health;
pub(crate) mod insights;
pub(crate) mod upload;
