use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::holding::HoldingType;
use super::period::{AnalyticsPeriod, SummaryPeriod};

/// Everything the analytics dashboard renders for one bucketed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub period: AnalyticsPeriod,

    /// Daily expense totals, oldest day first. Days without expenses are omitted.
    pub spending_trends: Vec<SpendingTrendPoint>,

    /// One entry per month bucket, oldest first
    pub income_vs_expense: Vec<IncomeVsExpensePoint>,

    /// Running total of monthly savings, aligned with `income_vs_expense`
    pub savings_growth: Vec<SavingsGrowthPoint>,

    /// Expense totals per category, largest first
    pub category_comparison: Vec<CategoryAmount>,

    pub financial_summary: FinancialSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingTrendPoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeVsExpensePoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    /// `income - expense`
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGrowthPoint {
    pub month: String,
    /// Cumulative savings up to and including this month
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAmount {
    pub source: String,
    pub amount: f64,
}

/// Headline ratios over the full requested range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub avg_monthly_savings: f64,
    pub savings_goal_percentage: f64,
    pub budget_utilization: f64,
}

/// Totals and breakdowns for a single-range period (month / year / all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub period: SummaryPeriod,
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings: f64,
    pub expenses_by_category: Vec<CategoryAmount>,
    pub income_by_source: Vec<SourceAmount>,
}

/// Budgeted vs. actual spending for one category in the current month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    pub category: String,
    pub budgeted: f64,
    pub spent: f64,
    /// `budgeted - spent`; negative when overspent
    pub remaining: f64,
    /// `spent / budgeted × 100`, 0 unless the budget is positive
    pub percentage: f64,
}

/// Activity counters over the recent stats window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_transactions: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    /// `(total_income + total_expenses) / total_transactions`, 0 when empty
    pub average_transaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalsSummary {
    pub total_goals: usize,
    pub total_saved: f64,
    pub total_target: f64,
    /// The future goal with the earliest target date, if any
    pub nearest_goal: Option<NearestGoal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestGoal {
    pub name: String,
    pub days_left: i64,
    /// Rounded and capped at 100
    pub percent_complete: i64,
}

/// Display row for a single investment position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub current_price: f64,
    /// Per-unit price change since purchase
    pub change: f64,
    /// `change / purchase_price × 100`, 0 when the purchase price is 0
    pub change_percent: f64,
    #[serde(rename = "type")]
    pub holding_type: HoldingType,
    pub purchase_date: DateTime<Utc>,
}
