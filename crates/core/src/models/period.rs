use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bucketed lookback used by the analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "12months")]
    TwelveMonths,
}

impl AnalyticsPeriod {
    /// Parse a period token. Unknown tokens fall back to `SixMonths`.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "3months" => AnalyticsPeriod::ThreeMonths,
            "12months" => AnalyticsPeriod::TwelveMonths,
            _ => AnalyticsPeriod::SixMonths,
        }
    }

    /// Number of month buckets.
    pub fn months(&self) -> u32 {
        match self {
            AnalyticsPeriod::ThreeMonths => 3,
            AnalyticsPeriod::SixMonths => 6,
            AnalyticsPeriod::TwelveMonths => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsPeriod::ThreeMonths => "3months",
            AnalyticsPeriod::SixMonths => "6months",
            AnalyticsPeriod::TwelveMonths => "12months",
        }
    }
}

impl Default for AnalyticsPeriod {
    fn default() -> Self {
        AnalyticsPeriod::SixMonths
    }
}

impl std::fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-range lookback used by the period summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPeriod {
    /// Since the first instant of the current month
    Month,
    /// Since January 1st of the current year
    Year,
    /// Since the Unix epoch
    All,
}

impl SummaryPeriod {
    /// Parse a period token. A blank token means "not given" and yields
    /// `Month`; any other unrecognized token widens to `All`.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "" | "month" => SummaryPeriod::Month,
            "year" => SummaryPeriod::Year,
            _ => SummaryPeriod::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPeriod::Month => "month",
            SummaryPeriod::Year => "year",
            SummaryPeriod::All => "all",
        }
    }
}

impl Default for SummaryPeriod {
    fn default() -> Self {
        SummaryPeriod::Month
    }
}

impl std::fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookback window for the portfolio performance curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "3m")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
    #[serde(rename = "all")]
    All,
}

impl Timeframe {
    /// Parse a timeframe token. Unknown tokens fall back to `Year`.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "1w" => Timeframe::Week,
            "1m" => Timeframe::Month,
            "3m" => Timeframe::Quarter,
            "all" => Timeframe::All,
            _ => Timeframe::Year,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "1w",
            Timeframe::Month => "1m",
            Timeframe::Quarter => "3m",
            Timeframe::Year => "1y",
            Timeframe::All => "all",
        }
    }

    /// Fixed lookback in days. `None` for `All`, which starts at the
    /// earliest purchase instead.
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            Timeframe::Week => Some(7),
            Timeframe::Month => Some(30),
            Timeframe::Quarter => Some(90),
            Timeframe::Year => Some(365),
            Timeframe::All => None,
        }
    }

    /// Sampling step in days for the fixed windows. `All` derives its step
    /// from the horizon length.
    pub fn interval_days(&self) -> i64 {
        match self {
            Timeframe::Week | Timeframe::Month => 1,
            Timeframe::Quarter => 3,
            Timeframe::Year | Timeframe::All => 7,
        }
    }

    /// Daily growth factor of the synthetic benchmark.
    pub fn benchmark_multiplier(&self) -> f64 {
        match self {
            Timeframe::Week => 1.0001,
            Timeframe::Month => 1.0002,
            Timeframe::Quarter => 1.0003,
            Timeframe::Year | Timeframe::All => 1.0004,
        }
    }
}

impl Default for Timeframe {
    fn default() -> Self {
        Timeframe::Year
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive time window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// One calendar month of the analytics view.
///
/// `end` is the last representable instant of the month, so consecutive
/// buckets never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Short month name, e.g. "Jan". Recurs across years.
    pub label: String,
    pub year: i32,
    /// Zero-based month (January = 0)
    pub month_index: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Bucket {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}
