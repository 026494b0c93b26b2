use std::sync::Arc;

use chrono::{Duration, Utc};
use rand::Rng;

use crate::model::Reading;

/// Reading types present in the seed set, in cycle order.
pub const READING_KINDS: [&str; 3] = ["temperature", "humidity", "pressure"];

/// Immutable snapshot of the seeded readings.
///
/// Built once at startup and cloned into each handler invocation. The type
/// exposes no mutation API, so the snapshot is shared across request tasks
/// without locking.
#[derive(Debug, Clone)]
pub struct ReadingStore {
    readings: Arc<[Reading]>,
}

impl ReadingStore {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            readings: readings.into(),
        }
    }

    /// Full seed set in insertion order, same slice every call.
    pub fn list(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Seed `count` readings ending near the current time, one second apart.
    ///
    /// IDs are sequential from 1 and types cycle in fixed order, so every
    /// type is represented whenever `count >= READING_KINDS.len()`.
    pub fn seeded(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let base = Utc::now() - Duration::seconds(count as i64);

        let readings = (0..count)
            .map(|i| {
                let kind = READING_KINDS[i % READING_KINDS.len()];
                Reading {
                    id: i as u64 + 1,
                    kind: kind.to_string(),
                    value: sample_value(&mut rng, kind),
                    timestamp: base + Duration::seconds(i as i64),
                }
            })
            .collect();

        Self::new(readings)
    }
}

fn sample_value(rng: &mut impl Rng, kind: &str) -> f64 {
    match kind {
        "temperature" => {
            if rng.gen_bool(0.05) {
                rng.gen_range(-50.0..100.0) // 5% outliers
            } else {
                rng.gen_range(15.0..35.0) // Normal range
            }
        }
        "humidity" => {
            if rng.gen_bool(0.05) {
                rng.gen_range(0.0..100.0) // 5% outliers
            } else {
                rng.gen_range(30.0..80.0) // Normal range
            }
        }
        _ => rng.gen_range(990.0..1035.0), // hPa around sea level
    }
}
