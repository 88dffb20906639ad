use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a ledger entry brings money in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryType::Income => write!(f, "income"),
            EntryType::Expense => write!(f, "expense"),
        }
    }
}

/// Which entry types an aggregation query should match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    Income,
    Expense,
    Both,
}

impl EntryFilter {
    pub fn matches(&self, entry_type: EntryType) -> bool {
        match self {
            EntryFilter::Income => entry_type == EntryType::Income,
            EntryFilter::Expense => entry_type == EntryType::Expense,
            EntryFilter::Both => true,
        }
    }
}

/// Key used to group ledger entries before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    /// UTC calendar day, `YYYY-MM-DD`
    Day,
    /// UTC calendar month, `YYYY-MM`
    Month,
    /// Expense category
    Category,
    /// Income source
    Source,
}

/// A single income or expense record.
///
/// Owned by the persistence collaborator; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Owner of the record
    pub user_id: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Amount (never negative)
    pub amount: f64,

    /// Spending category for expenses, income source for income
    /// (e.g. "food", "salary")
    #[serde(alias = "source")]
    pub category: String,

    /// Optional free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// When the money moved
    pub date: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(
        user_id: impl Into<String>,
        entry_type: EntryType,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            entry_type,
            amount,
            category: category.into(),
            description: None,
            date,
        }
    }

    pub fn income(
        user_id: impl Into<String>,
        amount: f64,
        source: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(user_id, EntryType::Income, amount, source, date)
    }

    pub fn expense(
        user_id: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self::new(user_id, EntryType::Expense, amount, category, date)
    }

    /// The label this entry falls under for a given grouping key.
    pub fn group_label(&self, key: GroupKey) -> String {
        match key {
            GroupKey::Day => self.date.format("%Y-%m-%d").to_string(),
            GroupKey::Month => self.date.format("%Y-%m").to_string(),
            GroupKey::Category | GroupKey::Source => self.category.clone(),
        }
    }
}

/// One row of a grouped sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSum {
    pub key: String,
    pub sum: f64,
}

impl GroupSum {
    pub fn new(key: impl Into<String>, sum: f64) -> Self {
        Self {
            key: key.into(),
            sum,
        }
    }
}
