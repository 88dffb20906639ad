use std::collections::HashMap;

use crate::models::analytics::{
    BudgetComparison, CategoryAmount, FinancialSummary, IncomeVsExpensePoint, SavingsGrowthPoint,
};
use crate::models::goal::{Budget, SavingsGoal};
use crate::models::period::Bucket;

/// `numerator / denominator`, or 0 when the denominator is 0.
/// Never yields NaN or infinity for finite inputs.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Derives savings series and summary ratios from aggregated ledger sums.
///
/// Pure computation over already-fetched sums. No I/O.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Pair per-bucket income and expense sums by index.
    ///
    /// A missing sum (shorter slice) counts as 0.
    pub fn income_vs_expense(
        &self,
        buckets: &[Bucket],
        income: &[f64],
        expense: &[f64],
    ) -> Vec<IncomeVsExpensePoint> {
        buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let income = income.get(i).copied().unwrap_or(0.0);
                let expense = expense.get(i).copied().unwrap_or(0.0);
                IncomeVsExpensePoint {
                    month: bucket.label.clone(),
                    income,
                    expense,
                    savings: income - expense,
                }
            })
            .collect()
    }

    /// Running total of monthly savings. Index 0 is bucket 0's own savings.
    pub fn savings_growth(&self, monthly: &[IncomeVsExpensePoint]) -> Vec<SavingsGrowthPoint> {
        monthly
            .iter()
            .scan(0.0, |cumulative, point| {
                *cumulative += point.savings;
                Some(SavingsGrowthPoint {
                    month: point.month.clone(),
                    savings: *cumulative,
                })
            })
            .collect()
    }

    /// Headline totals and ratios. Every ratio is 0 when its denominator is 0.
    pub fn financial_summary(
        &self,
        total_income: f64,
        total_expenses: f64,
        months_included: u32,
        goals: &[SavingsGoal],
        budgets: &[Budget],
    ) -> FinancialSummary {
        let total_savings = total_income - total_expenses;

        let goal_target: f64 = goals.iter().fold(0.0, |acc, g| acc + g.target_amount);
        let goal_progress: f64 = goals.iter().fold(0.0, |acc, g| acc + g.current_amount);
        let budget_total: f64 = budgets.iter().fold(0.0, |acc, b| acc + b.amount);

        FinancialSummary {
            total_income,
            total_expenses,
            total_savings,
            avg_monthly_savings: safe_div(total_savings, f64::from(months_included)),
            savings_goal_percentage: safe_div(goal_progress, goal_target) * 100.0,
            budget_utilization: safe_div(total_expenses, budget_total) * 100.0,
        }
    }

    /// One row per budget, in budget order, against the category totals in
    /// `spent`. Categories without spending count as 0 spent.
    pub fn budget_comparison(
        &self,
        budgets: &[Budget],
        spent: &[CategoryAmount],
    ) -> Vec<BudgetComparison> {
        let spent_by_category: HashMap<&str, f64> = spent
            .iter()
            .map(|c| (c.category.as_str(), c.amount))
            .collect();

        budgets
            .iter()
            .map(|budget| {
                let spent = spent_by_category
                    .get(budget.category.as_str())
                    .copied()
                    .unwrap_or(0.0);
                let percentage = if budget.amount > 0.0 {
                    safe_div(spent, budget.amount) * 100.0
                } else {
                    0.0
                };
                BudgetComparison {
                    category: budget.category.clone(),
                    budgeted: budget.amount,
                    spent,
                    remaining: budget.amount - spent,
                    percentage,
                }
            })
            .collect()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
