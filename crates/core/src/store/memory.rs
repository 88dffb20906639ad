use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::goal::{Budget, SavingsGoal};
use crate::models::ledger::{EntryFilter, GroupKey, GroupSum, LedgerEntry};
use crate::models::period::DateRange;

use super::traits::LedgerStore;

/// Serializable dump of everything a `MemoryLedgerStore` holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSnapshot {
    pub entries: Vec<LedgerEntry>,
    pub goals: Vec<SavingsGoal>,
    pub budgets: Vec<Budget>,
}

/// In-process `LedgerStore` backed by plain vectors.
///
/// Suitable for tests, demos and embedders that already hold the records
/// in memory. Queries scan linearly.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    snapshot: LedgerSnapshot,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self { snapshot }
    }

    /// Build a store from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let snapshot: LedgerSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Load a JSON snapshot from disk.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Serialize the current contents as a JSON snapshot.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.snapshot)
            .map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), CoreError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn add_entry(&mut self, entry: LedgerEntry) {
        self.snapshot.entries.push(entry);
    }

    pub fn add_entries(&mut self, entries: impl IntoIterator<Item = LedgerEntry>) {
        self.snapshot.entries.extend(entries);
    }

    pub fn add_goal(&mut self, goal: SavingsGoal) {
        self.snapshot.goals.push(goal);
    }

    pub fn add_budget(&mut self, budget: Budget) {
        self.snapshot.budgets.push(budget);
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    fn matching<'a>(
        &'a self,
        user_id: &'a str,
        filter: EntryFilter,
        range: &'a DateRange,
    ) -> impl Iterator<Item = &'a LedgerEntry> + 'a {
        self.snapshot.entries.iter().filter(move |e| {
            e.user_id == user_id && filter.matches(e.entry_type) && range.contains(e.date)
        })
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn sum(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
    ) -> Result<f64, CoreError> {
        Ok(self.matching(user_id, filter, range).fold(0.0, |acc, e| acc + e.amount))
    }

    async fn sum_grouped(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
        key: GroupKey,
    ) -> Result<Vec<GroupSum>, CoreError> {
        // First-seen order, so results are deterministic for callers that
        // break ties by position.
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<GroupSum> = Vec::new();
        for entry in self.matching(user_id, filter, range) {
            let label = entry.group_label(key);
            match positions.get(&label) {
                Some(&i) => groups[i].sum += entry.amount,
                None => {
                    positions.insert(label.clone(), groups.len());
                    groups.push(GroupSum::new(label, entry.amount));
                }
            }
        }
        Ok(groups)
    }

    async fn count(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
    ) -> Result<usize, CoreError> {
        Ok(self.matching(user_id, filter, range).count())
    }

    async fn savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>, CoreError> {
        Ok(self
            .snapshot
            .goals
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn budgets(&self, user_id: &str) -> Result<Vec<Budget>, CoreError> {
        Ok(self
            .snapshot
            .budgets
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
}
