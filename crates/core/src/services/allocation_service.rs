use std::collections::HashMap;

use tracing::warn;

use crate::models::allocation::AllocationSlice;
use crate::models::holding::{Holding, HoldingType};

/// Color for holding types without a palette entry.
pub const FALLBACK_COLOR: &str = "#94a3b8";

/// Palette color for a holding type.
pub fn color_for(holding_type: HoldingType) -> &'static str {
    match holding_type {
        HoldingType::Stock => "#06b6d4",
        HoldingType::Bond => "#a855f7",
        HoldingType::Etf => "#3b82f6",
        HoldingType::MutualFund => "#f97316",
        HoldingType::RealEstate => "#22c55e",
        HoldingType::Crypto => "#eab308",
        HoldingType::Cash => "#64748b",
        HoldingType::Other => FALLBACK_COLOR,
    }
}

/// Computes the allocation breakdown of a set of holdings by type.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Share of total market value per holding type, largest first.
    ///
    /// Types appear in first-seen order before sorting and the sort is
    /// stable, so equal shares keep that order. Returns an empty list when
    /// there are no holdings or the total value is not positive.
    pub fn allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        if holdings.is_empty() {
            return Vec::new();
        }
        let total_value: f64 = holdings.iter().fold(0.0, |acc, h| acc + h.market_value());
        if total_value <= 0.0 || !total_value.is_finite() {
            warn!(
                holdings = holdings.len(),
                total_value, "no allocatable market value"
            );
            return Vec::new();
        }

        let mut values: HashMap<HoldingType, f64> = HashMap::new();
        let mut order: Vec<HoldingType> = Vec::new();
        for holding in holdings {
            let value = values.entry(holding.holding_type).or_insert_with(|| {
                order.push(holding.holding_type);
                0.0
            });
            *value += holding.market_value();
        }
        let groups = order
            .into_iter()
            .map(|t| (t, values.get(&t).copied().unwrap_or(0.0)));

        let mut slices: Vec<AllocationSlice> = groups
            .map(|(holding_type, value)| AllocationSlice {
                name: holding_type.label(),
                value_percent: ((value / total_value * 100.0).round() as i64).clamp(0, 100),
                color: color_for(holding_type).to_string(),
            })
            .collect();

        slices.sort_by(|a, b| b.value_percent.cmp(&a.value_percent));
        slices
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
