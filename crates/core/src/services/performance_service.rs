use chrono::{DateTime, Datelike, Duration, Utc};
use tracing::debug;

use crate::models::chart::PerformancePoint;
use crate::models::holding::Holding;
use crate::models::period::Timeframe;

/// Default starting level of the benchmark relative to the current value.
pub const DEFAULT_BENCHMARK_START_RATIO: f64 = 0.9;

/// Target number of samples for the `all` timeframe.
const ALL_TIMEFRAME_TARGET_POINTS: i64 = 30;

/// Minimum step (days) for the `all` timeframe.
const ALL_TIMEFRAME_MIN_INTERVAL: i64 = 7;

/// Synthesizes an approximate historical value curve for holdings that
/// carry no stored price history, plus a compounding benchmark curve.
///
/// The reconstruction is deliberately naive: each holding's value is
/// interpolated between an approximate purchase-time value and its current
/// market value. With the current approximation both ends coincide, so a
/// holding contributes its present market value from its purchase date on.
pub struct PerformanceService {
    benchmark_start_ratio: f64,
}

impl PerformanceService {
    pub fn new() -> Self {
        Self {
            benchmark_start_ratio: DEFAULT_BENCHMARK_START_RATIO,
        }
    }

    pub fn with_benchmark_start_ratio(benchmark_start_ratio: f64) -> Self {
        Self {
            benchmark_start_ratio,
        }
    }

    /// Build the performance curve for `timeframe`, oldest sample first.
    /// Empty when there are no holdings.
    pub fn performance(
        &self,
        holdings: &[Holding],
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Vec<PerformancePoint> {
        if holdings.is_empty() {
            return Vec::new();
        }

        let (start, interval_days) = sampling_window(holdings, timeframe, now);
        let samples = sample_dates(start, now, interval_days);
        debug!(%timeframe, interval_days, samples = samples.len(), "sampling performance curve");

        let current_value: f64 = holdings.iter().fold(0.0, |acc, h| acc + h.market_value());
        let multiplier = timeframe.benchmark_multiplier();
        let mut benchmark = current_value * self.benchmark_start_ratio;

        let mut points = Vec::with_capacity(samples.len());
        let mut previous: Option<DateTime<Utc>> = None;
        for sample in samples {
            if let Some(prev) = previous {
                let elapsed = (sample - prev).num_days();
                benchmark *= multiplier.powi(elapsed as i32);
            }
            previous = Some(sample);

            points.push(PerformancePoint {
                date: sample.date_naive(),
                value: portfolio_value_at(holdings, sample, now).round() as i64,
                benchmark: benchmark.round() as i64,
            });
        }
        points
    }
}

impl Default for PerformanceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Start instant and step (days) for a timeframe.
///
/// `All` starts at the earliest purchase and stretches the step so the
/// curve keeps roughly `ALL_TIMEFRAME_TARGET_POINTS` samples.
fn sampling_window(
    holdings: &[Holding],
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, i64) {
    match timeframe.lookback_days() {
        Some(days) => (now - Duration::days(days), timeframe.interval_days()),
        None => {
            let earliest = holdings
                .iter()
                .map(|h| h.purchase_date)
                .min()
                .unwrap_or(now);
            let total_days = (now - earliest).num_days().max(0);
            let stretched = (total_days + ALL_TIMEFRAME_TARGET_POINTS - 1) / ALL_TIMEFRAME_TARGET_POINTS;
            (earliest, stretched.max(ALL_TIMEFRAME_MIN_INTERVAL))
        }
    }
}

/// Instants from `start` to `now` (inclusive) every `interval_days`.
///
/// `now` is appended when the last generated sample falls on a different
/// day of the month. Only the day number is compared, so a sample exactly
/// one or more months before `now` on the same day number suppresses the
/// extra point.
fn sample_dates(start: DateTime<Utc>, now: DateTime<Utc>, interval_days: i64) -> Vec<DateTime<Utc>> {
    let step = Duration::days(interval_days.max(1));
    let mut dates = Vec::new();
    let mut cursor = start;
    while cursor <= now {
        dates.push(cursor);
        cursor += step;
    }

    match dates.last() {
        Some(last) if last.day() == now.day() => {}
        _ => dates.push(now),
    }
    dates
}

/// Sum of reconstructed holding values at `sample`. Holdings bought after
/// the sample contribute nothing.
fn portfolio_value_at(holdings: &[Holding], sample: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    holdings
        .iter()
        .filter(|h| h.purchase_date <= sample)
        .fold(0.0, |acc, h| acc + interpolated_value(h, sample, now))
}

/// Linear interpolation between the approximate purchase-time value and the
/// current market value, by how far `sample` sits between purchase and now.
fn interpolated_value(holding: &Holding, sample: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let market_value = holding.market_value();
    let total_days = (now - holding.purchase_date).num_days();
    if total_days == 0 {
        return market_value;
    }

    let days_since_sample = (now - sample).num_days();
    let fraction = 1.0 - days_since_sample as f64 / total_days as f64;
    let purchase_value = approximate_purchase_value(holding);
    purchase_value + (market_value - purchase_value) * fraction
}

/// Approximate market value at purchase time.
///
/// The price-change term is computed from `current_value` on both sides,
/// so this always reduces to `quantity × current_value`; `purchase_price`
/// plays no part. Kept for compatibility with existing dashboards.
fn approximate_purchase_value(holding: &Holding) -> f64 {
    let price = holding.current_value;
    if price == 0.0 {
        return 0.0;
    }
    holding.quantity * price / (1.0 + (price - price) / price)
}
