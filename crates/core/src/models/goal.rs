use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings target the user is working towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub target_date: DateTime<Utc>,
}

impl SavingsGoal {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
        target_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            name: name.into(),
            target_amount,
            current_amount,
            target_date,
        }
    }
}

/// Monthly spending limit for one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub user_id: String,
    pub category: String,
    pub amount: f64,
}

impl Budget {
    pub fn new(user_id: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            category: category.into(),
            amount,
        }
    }
}
