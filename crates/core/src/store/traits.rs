use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::goal::{Budget, SavingsGoal};
use crate::models::ledger::{EntryFilter, GroupKey, GroupSum};
use crate::models::period::DateRange;

/// Read-only view of the persistence layer that owns ledger, goal and
/// budget records.
///
/// Implementations are expected to push filtering and summing down to the
/// database. Every query is scoped to one user and an inclusive date range.
/// Errors are surfaced as-is; this crate never retries.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Human-readable name of this backend (for logs/errors).
    fn name(&self) -> &str;

    /// Sum of `amount` over matching entries. 0 when nothing matches.
    async fn sum(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
    ) -> Result<f64, CoreError>;

    /// Sum of `amount` per group. Groups without entries are absent;
    /// row order is unspecified.
    async fn sum_grouped(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
        key: GroupKey,
    ) -> Result<Vec<GroupSum>, CoreError>;

    /// Number of matching entries.
    async fn count(
        &self,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
    ) -> Result<usize, CoreError>;

    /// All savings goals of the user.
    async fn savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>, CoreError>;

    /// All category budgets of the user.
    async fn budgets(&self, user_id: &str) -> Result<Vec<Budget>, CoreError>;
}
