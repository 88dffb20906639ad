use serde::{Deserialize, Serialize};

/// One slice of the allocation pie.
///
/// Percentages are rounded independently, so a full set may sum to
/// slightly more or less than 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Display label, e.g. "Real estate"
    pub name: String,

    /// Share of total market value, 0..=100
    #[serde(rename = "value")]
    pub value_percent: i64,

    /// Hex color, e.g. "#06b6d4"
    pub color: String,
}
