use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::models::period::{AnalyticsPeriod, Bucket, DateRange, SummaryPeriod};

/// Resolves period tokens into concrete date ranges and month buckets.
///
/// Pure calendar math: "now" is always passed in, never read from the clock.
pub struct PeriodService;

impl PeriodService {
    pub fn new() -> Self {
        Self
    }

    /// Month buckets for a bucketed period, oldest first, ending with the
    /// month containing `now`.
    pub fn buckets(&self, period: AnalyticsPeriod, now: DateTime<Utc>) -> Vec<Bucket> {
        let current = month_ordinal(now);
        let mut buckets: Vec<Bucket> = (0..i64::from(period.months()))
            .filter_map(|back| bucket_for(current - back))
            .collect();
        // Built newest → oldest
        buckets.reverse();
        buckets
    }

    /// Range covered by the non-bucketed parts of the analytics view:
    /// from the first day of the month `period.months()` months before the
    /// current one, up to `now`.
    pub fn analytics_range(&self, period: AnalyticsPeriod, now: DateTime<Utc>) -> DateRange {
        let first = month_ordinal(now) - i64::from(period.months());
        let start = month_start(first).unwrap_or(DateTime::<Utc>::MIN_UTC);
        DateRange::new(start, now)
    }

    /// Lower bound for a single-range period. The caller uses `now` as the
    /// upper bound.
    pub fn summary_start(&self, period: SummaryPeriod, now: DateTime<Utc>) -> DateTime<Utc> {
        let start = match period {
            SummaryPeriod::Month => month_start(month_ordinal(now)),
            SummaryPeriod::Year => month_start(i64::from(now.year()) * 12),
            SummaryPeriod::All => Some(DateTime::<Utc>::UNIX_EPOCH),
        };
        start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    pub fn summary_range(&self, period: SummaryPeriod, now: DateTime<Utc>) -> DateRange {
        DateRange::new(self.summary_start(period, now), now)
    }

    /// The whole calendar month containing `now`, including days after it.
    pub fn current_month(&self, now: DateTime<Utc>) -> DateRange {
        bucket_for(month_ordinal(now))
            .map(|bucket| bucket.range())
            .unwrap_or_else(|| self.summary_range(SummaryPeriod::Month, now))
    }

    /// Trailing window of `days` days ending at `now`. Saturates at the
    /// earliest representable instant instead of overflowing.
    pub fn trailing_range(&self, days: i64, now: DateTime<Utc>) -> DateRange {
        let start = Duration::try_days(days)
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        DateRange::new(start, now)
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

/// Months since year 0: `year * 12 + zero_based_month`.
fn month_ordinal(instant: DateTime<Utc>) -> i64 {
    i64::from(instant.year()) * 12 + i64::from(instant.month0())
}

/// First instant of the month with the given ordinal.
/// `None` only outside chrono's representable range.
fn month_start(ordinal: i64) -> Option<DateTime<Utc>> {
    let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
    let month0 = u32::try_from(ordinal.rem_euclid(12)).ok()?;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn bucket_for(ordinal: i64) -> Option<Bucket> {
    let start = month_start(ordinal)?;
    let end = month_start(ordinal + 1)
        .map(|next| next - Duration::nanoseconds(1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    Some(Bucket {
        label: start.format("%b").to_string(),
        year: start.year(),
        month_index: start.month0(),
        start,
        end,
    })
}
