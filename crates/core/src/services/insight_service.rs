use chrono::{DateTime, Utc};

use crate::models::analytics::{
    HoldingSummary, NearestGoal, SavingsGoalsSummary, TransactionStats,
};
use crate::models::goal::SavingsGoal;
use crate::models::holding::Holding;
use crate::services::metrics_service::safe_div;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Secondary dashboard cards: activity stats, goal progress and a per-holding
/// overview. Pure functions over already-fetched data.
pub struct InsightService;

impl InsightService {
    pub fn new() -> Self {
        Self
    }

    pub fn transaction_stats(
        &self,
        total_transactions: usize,
        total_income: f64,
        total_expenses: f64,
    ) -> TransactionStats {
        TransactionStats {
            total_transactions,
            total_income,
            total_expenses,
            average_transaction: safe_div(total_income + total_expenses, total_transactions as f64),
        }
    }

    /// Totals across all goals plus the nearest goal still in the future.
    pub fn savings_goals_summary(
        &self,
        goals: &[SavingsGoal],
        now: DateTime<Utc>,
    ) -> SavingsGoalsSummary {
        let nearest_goal = goals
            .iter()
            .filter(|g| g.target_date > now)
            .min_by_key(|g| g.target_date)
            .map(|goal| {
                let seconds_left = (goal.target_date - now).num_seconds() as f64;
                let days_left = (seconds_left / SECONDS_PER_DAY).ceil() as i64;
                let percent = (safe_div(goal.current_amount, goal.target_amount) * 100.0).round();
                NearestGoal {
                    name: goal.name.clone(),
                    days_left: days_left.max(0),
                    percent_complete: (percent as i64).min(100),
                }
            });

        SavingsGoalsSummary {
            total_goals: goals.len(),
            total_saved: goals.iter().fold(0.0, |acc, g| acc + g.current_amount),
            total_target: goals.iter().fold(0.0, |acc, g| acc + g.target_amount),
            nearest_goal,
        }
    }

    /// Display rows for each holding, in input order.
    pub fn holdings_overview(&self, holdings: &[Holding]) -> Vec<HoldingSummary> {
        holdings
            .iter()
            .map(|h| {
                let change = h.current_value - h.purchase_price;
                HoldingSummary {
                    id: h.id.to_string(),
                    name: h.name.clone(),
                    symbol: h
                        .symbol
                        .clone()
                        .unwrap_or_else(|| h.name.chars().take(4).collect::<String>().to_uppercase()),
                    shares: h.quantity,
                    purchase_price: h.purchase_price,
                    current_price: h.current_value,
                    change,
                    change_percent: safe_div(change, h.purchase_price) * 100.0,
                    holding_type: h.holding_type,
                    purchase_date: h.purchase_date,
                }
            })
            .collect()
    }
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new()
    }
}
