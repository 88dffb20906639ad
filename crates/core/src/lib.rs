pub mod errors;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

use chrono::{DateTime, Utc};
use tracing::{error, info};

use errors::CoreError;
use models::{
    allocation::AllocationSlice,
    analytics::{
        AnalyticsView, BudgetComparison, HoldingSummary, PeriodSummary, SavingsGoalsSummary,
        TransactionStats,
    },
    chart::PerformancePoint,
    holding::Holding,
    ledger::EntryFilter,
    period::{AnalyticsPeriod, SummaryPeriod, Timeframe},
    settings::Settings,
};
use services::{
    allocation_service::AllocationService, insight_service::InsightService,
    ledger_service::LedgerService, metrics_service::MetricsService,
    performance_service::PerformanceService, period_service::PeriodService,
};
use store::traits::LedgerStore;

/// Main entry point for the finance tracker core library.
///
/// Wires a `LedgerStore` collaborator and `Settings` to the services. Holds
/// no per-request state: every call recomputes from the store, and "now" is
/// always supplied by the caller.
#[must_use]
pub struct FinanceTracker {
    store: Box<dyn LedgerStore>,
    settings: Settings,
    period_service: PeriodService,
    ledger_service: LedgerService,
    metrics_service: MetricsService,
    allocation_service: AllocationService,
    performance_service: PerformanceService,
    insight_service: InsightService,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("store", &self.store.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl FinanceTracker {
    /// Create a tracker over `store` with default settings.
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self::build(store, Settings::default())
    }

    /// Create a tracker with explicit settings. Settings are validated first.
    pub fn with_settings(store: Box<dyn LedgerStore>, settings: Settings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self::build(store, settings))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn store(&self) -> &dyn LedgerStore {
        self.store.as_ref()
    }

    // ── Ledger analytics ────────────────────────────────────────────

    /// Full analytics view for a bucketed period token
    /// (`3months` / `6months` / `12months`; anything else means `6months`).
    ///
    /// All store queries run concurrently; any failure fails the whole view.
    pub async fn get_analytics(
        &self,
        user_id: &str,
        period: &str,
        now: DateTime<Utc>,
    ) -> Result<AnalyticsView, CoreError> {
        let period = AnalyticsPeriod::parse(period);
        self.build_analytics(user_id, period, now)
            .await
            .inspect_err(|e| error!(user_id, %period, error = %e, "failed to build analytics view"))
    }

    async fn build_analytics(
        &self,
        user_id: &str,
        period: AnalyticsPeriod,
        now: DateTime<Utc>,
    ) -> Result<AnalyticsView, CoreError> {
        let store = self.store.as_ref();
        let buckets = self.period_service.buckets(period, now);
        let range = self.period_service.analytics_range(period, now);

        let (
            spending_trends,
            income_per_bucket,
            expense_per_bucket,
            category_comparison,
            total_income,
            total_expenses,
            goals,
            budgets,
        ) = futures::try_join!(
            self.ledger_service.spending_trends(store, user_id, &range),
            self.ledger_service
                .per_bucket(store, user_id, EntryFilter::Income, &buckets),
            self.ledger_service
                .per_bucket(store, user_id, EntryFilter::Expense, &buckets),
            self.ledger_service.expenses_by_category(store, user_id, &range),
            self.ledger_service
                .total(store, user_id, EntryFilter::Income, &range),
            self.ledger_service
                .total(store, user_id, EntryFilter::Expense, &range),
            store.savings_goals(user_id),
            store.budgets(user_id),
        )?;

        let income_vs_expense =
            self.metrics_service
                .income_vs_expense(&buckets, &income_per_bucket, &expense_per_bucket);
        let savings_growth = self.metrics_service.savings_growth(&income_vs_expense);
        let financial_summary = self.metrics_service.financial_summary(
            total_income,
            total_expenses,
            buckets.len() as u32,
            &goals,
            &budgets,
        );

        info!(
            user_id,
            %period,
            buckets = buckets.len(),
            trend_days = spending_trends.len(),
            "analytics view built"
        );

        Ok(AnalyticsView {
            period,
            spending_trends,
            income_vs_expense,
            savings_growth,
            category_comparison,
            financial_summary,
        })
    }

    /// Totals and breakdowns for a single-range period token
    /// (`month` / `year` / `all`). A blank token means `month`; anything
    /// else means `all`.
    pub async fn get_period_summary(
        &self,
        user_id: &str,
        period: &str,
        now: DateTime<Utc>,
    ) -> Result<PeriodSummary, CoreError> {
        let period = SummaryPeriod::parse(period);
        let store = self.store.as_ref();
        let range = self.period_service.summary_range(period, now);

        let (total_income, total_expenses, expenses_by_category, income_by_source) =
            futures::try_join!(
                self.ledger_service
                    .total(store, user_id, EntryFilter::Income, &range),
                self.ledger_service
                    .total(store, user_id, EntryFilter::Expense, &range),
                self.ledger_service.expenses_by_category(store, user_id, &range),
                self.ledger_service.income_by_source(store, user_id, &range),
            )
            .inspect_err(|e| error!(user_id, %period, error = %e, "failed to build period summary"))?;

        Ok(PeriodSummary {
            period,
            total_income,
            total_expenses,
            savings: total_income - total_expenses,
            expenses_by_category,
            income_by_source,
        })
    }

    /// Transaction counters over the last `settings.stats_window_days` days.
    pub async fn get_transaction_stats(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<TransactionStats, CoreError> {
        let store = self.store.as_ref();
        let range = self
            .period_service
            .trailing_range(self.settings.stats_window_days, now);

        let (count, total_income, total_expenses) = futures::try_join!(
            store.count(user_id, EntryFilter::Both, &range),
            self.ledger_service
                .total(store, user_id, EntryFilter::Income, &range),
            self.ledger_service
                .total(store, user_id, EntryFilter::Expense, &range),
        )
        .inspect_err(|e| error!(user_id, error = %e, "failed to compute transaction stats"))?;

        Ok(self
            .insight_service
            .transaction_stats(count, total_income, total_expenses))
    }

    /// Progress across all savings goals and the nearest upcoming one.
    pub async fn get_savings_goals_summary(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SavingsGoalsSummary, CoreError> {
        let goals = self
            .store
            .savings_goals(user_id)
            .await
            .inspect_err(|e| error!(user_id, error = %e, "failed to load savings goals"))?;
        Ok(self.insight_service.savings_goals_summary(&goals, now))
    }

    /// Budgeted vs. actual spending per budget category for the calendar
    /// month containing `now`.
    pub async fn get_budget_comparison(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<BudgetComparison>, CoreError> {
        let store = self.store.as_ref();
        let range = self.period_service.current_month(now);

        let (budgets, spent) = futures::try_join!(
            store.budgets(user_id),
            self.ledger_service.expenses_by_category(store, user_id, &range),
        )
        .inspect_err(|e| error!(user_id, error = %e, "failed to build budget comparison"))?;

        Ok(self.metrics_service.budget_comparison(&budgets, &spent))
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Reconstructed performance curve for a timeframe token
    /// (`1w` / `1m` / `3m` / `1y` / `all`; anything else means `1y`).
    #[must_use]
    pub fn get_portfolio_performance(
        &self,
        holdings: &[Holding],
        timeframe: &str,
        now: DateTime<Utc>,
    ) -> Vec<PerformancePoint> {
        self.performance_service
            .performance(holdings, Timeframe::parse(timeframe), now)
    }

    /// Allocation pie slices by holding type, largest first.
    #[must_use]
    pub fn get_allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        self.allocation_service.allocation(holdings)
    }

    /// Per-holding display rows.
    #[must_use]
    pub fn get_holdings_overview(&self, holdings: &[Holding]) -> Vec<HoldingSummary> {
        self.insight_service.holdings_overview(holdings)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(store: Box<dyn LedgerStore>, settings: Settings) -> Self {
        Self {
            store,
            performance_service: PerformanceService::with_benchmark_start_ratio(
                settings.benchmark_start_ratio,
            ),
            settings,
            period_service: PeriodService::new(),
            ledger_service: LedgerService::new(),
            metrics_service: MetricsService::new(),
            allocation_service: AllocationService::new(),
            insight_service: InsightService::new(),
        }
    }
}
