use futures::future::try_join_all;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::analytics::{CategoryAmount, SourceAmount, SpendingTrendPoint};
use crate::models::ledger::{EntryFilter, GroupKey, GroupSum};
use crate::models::period::{Bucket, DateRange};
use crate::store::traits::LedgerStore;

/// Sums ledger amounts through the `LedgerStore` collaborator.
///
/// Read-only: every method is a query. Groups without matching entries are
/// omitted from grouped results; per-bucket sums are dense (one value per
/// bucket, 0 for empty months).
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Total of matching entries in `range`.
    pub async fn total(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
    ) -> Result<f64, CoreError> {
        store.sum(user_id, filter, range).await
    }

    /// Grouped totals in a stable, documented order:
    /// - `Day` / `Month`: chronological (ascending key)
    /// - `Category` / `Source`: largest sum first, ties keep store order
    pub async fn grouped(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        filter: EntryFilter,
        range: &DateRange,
        key: GroupKey,
    ) -> Result<Vec<GroupSum>, CoreError> {
        let mut groups = store.sum_grouped(user_id, filter, range, key).await?;
        match key {
            GroupKey::Day | GroupKey::Month => groups.sort_by(|a, b| a.key.cmp(&b.key)),
            GroupKey::Category | GroupKey::Source => groups.sort_by(|a, b| {
                b.sum
                    .partial_cmp(&a.sum)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        debug!(
            store = store.name(),
            ?key,
            groups = groups.len(),
            "grouped ledger sums"
        );
        Ok(groups)
    }

    /// One total per bucket, in bucket order.
    ///
    /// All bucket queries run concurrently. `try_join_all` yields results in
    /// input order regardless of completion order, so `result[i]` always
    /// belongs to `buckets[i]` (labels alone are ambiguous across years).
    /// The first failing query fails the whole call.
    pub async fn per_bucket(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        filter: EntryFilter,
        buckets: &[Bucket],
    ) -> Result<Vec<f64>, CoreError> {
        let queries = buckets.iter().map(|bucket| {
            let range = bucket.range();
            async move { store.sum(user_id, filter, &range).await }
        });
        let sums = try_join_all(queries).await?;
        debug!(
            store = store.name(),
            ?filter,
            buckets = sums.len(),
            "per-bucket ledger sums"
        );
        Ok(sums)
    }

    /// Daily expense totals, oldest day first.
    pub async fn spending_trends(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        range: &DateRange,
    ) -> Result<Vec<SpendingTrendPoint>, CoreError> {
        let days = self
            .grouped(store, user_id, EntryFilter::Expense, range, GroupKey::Day)
            .await?;
        Ok(days
            .into_iter()
            .map(|g| SpendingTrendPoint {
                date: g.key,
                amount: g.sum,
            })
            .collect())
    }

    /// Expense totals per category, largest first.
    pub async fn expenses_by_category(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        range: &DateRange,
    ) -> Result<Vec<CategoryAmount>, CoreError> {
        let categories = self
            .grouped(store, user_id, EntryFilter::Expense, range, GroupKey::Category)
            .await?;
        Ok(categories
            .into_iter()
            .map(|g| CategoryAmount {
                category: g.key,
                amount: g.sum,
            })
            .collect())
    }

    /// Income totals per source, largest first.
    pub async fn income_by_source(
        &self,
        store: &dyn LedgerStore,
        user_id: &str,
        range: &DateRange,
    ) -> Result<Vec<SourceAmount>, CoreError> {
        let sources = self
            .grouped(store, user_id, EntryFilter::Income, range, GroupKey::Source)
            .await?;
        Ok(sources
            .into_iter()
            .map(|g| SourceAmount {
                source: g.key,
                amount: g.sum,
            })
            .collect())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
