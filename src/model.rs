use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single simulated device telemetry reading
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// REST API response wrapper for GET /data
#[derive(Debug, Serialize)]
pub struct ReadingsPage {
    pub data: Vec<Reading>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

/// Acknowledgement returned for an executed device command
#[derive(Debug, Serialize)]
pub struct CommandOutcome {
    pub status: &'static str,
    pub message: String,
}
