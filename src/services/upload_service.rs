use rand::Rng;
use tracing::debug;

use crate::models::FileUploadResponse;
use crate::utils::round2;

/// Fakes a processing run: per-file counts are a single draw scaled by the file count.
pub fn simulate_upload<R: Rng>(rng: &mut R, file_count: usize) -> FileUploadResponse {
    let files = file_count as u32;
    let transactions_added = rng.random_range(10..=50u32) * files;
    let anomalies_detected = rng.random_range(0..=5u32) * files;
    let processing_time = round2(rng.random_range(0.8..=2.5));

    debug!(
        "Simulated upload of {} files: {} transactions, {} anomalies",
        file_count, transactions_added, anomalies_detected
    );

    FileUploadResponse {
        transactions_added,
        anomalies_detected,
        processing_time,
    }
}
