use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point of the portfolio performance chart.
///
/// The core generates these; the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Sample day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,

    /// Reconstructed portfolio value, rounded to the nearest unit
    pub value: i64,

    /// Synthetic benchmark value, rounded to the nearest unit
    pub benchmark: i64,
}
