use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;

pub const MAX_FILES_PER_UPLOAD: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadRequest {
    pub files: Vec<Map<String, Value>>,
}

impl FileUploadRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.files.len() > MAX_FILES_PER_UPLOAD {
            return Err(AppError::invalid(
                "files",
                format!("Maximum {} files allowed per upload", MAX_FILES_PER_UPLOAD),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub transactions_added: u32,
    pub anomalies_detected: u32,
    pub processing_time: f64,
}
