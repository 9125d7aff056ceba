use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::models::Transaction;
use crate::utils::round2;

/// Closed (merchant, category) vocabulary synthetic transactions are drawn from.
pub const MERCHANTS: [(&str, &str); 8] = [
    ("Midtown Grocer", "Groceries"),
    ("Nimbus Cloud AI", "Software"),
    ("BlueBird Air", "Travel"),
    ("MetroRide", "Transport"),
    ("Golden Bean Cafe", "Meals"),
    ("Urban Cowork", "Workspace"),
    ("Pulse Fitness", "Wellness"),
    ("Northwind Freight", "Logistics"),
];

pub const BATCH_SIZE: usize = 12;
pub const ANOMALY_NOTE: &str = "Confidence dropped below threshold";
const ANOMALY_AMOUNT_THRESHOLD: f64 = 4000.0;
const RANDOM_ANOMALY_RATE: f64 = 0.15;
const DAYS_BETWEEN_TRANSACTIONS: i64 = 2;

pub fn generate_transactions<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> Vec<Transaction> {
    let transactions: Vec<Transaction> = (0..BATCH_SIZE)
        .map(|idx| {
            let (merchant, category) = *MERCHANTS.choose(rng).unwrap_or(&MERCHANTS[0]);
            let amount = round2(rng.random_range(40.0..=6400.0));
            let anomaly = amount > ANOMALY_AMOUNT_THRESHOLD || rng.random::<f64>() < RANDOM_ANOMALY_RATE;
            let date = now - Duration::days(idx as i64 * DAYS_BETWEEN_TRANSACTIONS);

            Transaction {
                id: format!("txn_{:04}", idx + 1),
                merchant: merchant.to_string(),
                category: category.to_string(),
                amount,
                date: date.format("%Y-%m-%d").to_string(),
                anomaly,
                confidence: round2(rng.random_range(0.78..=0.98)),
                note: anomaly.then(|| ANOMALY_NOTE.to_string()),
            }
        })
        .collect();

    debug!(
        "Generated {} transactions ({} flagged)",
        transactions.len(),
        transactions.iter().filter(|t| t.anomaly).count()
    );
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 4, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_batch_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let transactions = generate_transactions(&mut rng, now());
        assert_eq!(transactions.len(), 12);
        assert_eq!(transactions[0].id, "txn_0001");
        assert_eq!(transactions[11].id, "txn_0012");
        assert_eq!(transactions[0].date, "2024-12-04");
        assert_eq!(transactions[1].date, "2024-12-02");
        assert_eq!(transactions[11].date, "2024-11-12");
    }

    #[test]
    fn test_note_present_iff_anomaly() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            for txn in generate_transactions(&mut rng, now()) {
                assert_eq!(txn.note.is_some(), txn.anomaly, "{:?}", txn);
                if let Some(note) = &txn.note {
                    assert_eq!(note, ANOMALY_NOTE);
                }
            }
        }
    }

    #[test]
    fn test_high_amounts_always_flagged() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            for txn in generate_transactions(&mut rng, now()) {
                if txn.amount > 4000.0 {
                    assert!(txn.anomaly);
                }
            }
        }
    }

    #[test]
    fn test_value_ranges_and_vocabulary() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            for txn in generate_transactions(&mut rng, now()) {
                assert!(txn.amount >= 40.0 && txn.amount <= 6400.0);
                assert!(txn.confidence >= 0.78 && txn.confidence <= 0.98);
                assert!(MERCHANTS
                    .iter()
                    .any(|(m, c)| *m == txn.merchant && *c == txn.category));
            }
        }
    }

    #[test]
    fn test_some_low_amounts_flagged_at_random() {
        let mut rng = StdRng::seed_from_u64(8);
        let random_flags = (0..200)
            .flat_map(|_| generate_transactions(&mut rng, now()))
            .filter(|t| t.anomaly && t.amount <= 4000.0)
            .count();
        assert!(random_flags > 0);
    }
}
