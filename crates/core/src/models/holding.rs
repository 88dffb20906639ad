use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of an investment position.
///
/// Unrecognized type tokens deserialize to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldingType {
    Stock,
    Bond,
    Etf,
    MutualFund,
    RealEstate,
    Crypto,
    Cash,
    #[serde(other)]
    Other,
}

impl HoldingType {
    /// Wire token, e.g. `"mutual_fund"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoldingType::Stock => "stock",
            HoldingType::Bond => "bond",
            HoldingType::Etf => "etf",
            HoldingType::MutualFund => "mutual_fund",
            HoldingType::RealEstate => "real_estate",
            HoldingType::Crypto => "crypto",
            HoldingType::Cash => "cash",
            HoldingType::Other => "other",
        }
    }

    /// Display label: first letter capitalized, underscores become spaces
    /// (`"real_estate"` → `"Real estate"`).
    pub fn label(&self) -> String {
        let spaced = self.as_str().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for HoldingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An investment position. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: Uuid,

    /// Human-readable name (e.g. "Apple Inc.")
    pub name: String,

    /// Ticker symbol, if known
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(rename = "type")]
    pub holding_type: HoldingType,

    /// Units held
    pub quantity: f64,

    /// Price per unit at purchase
    pub purchase_price: f64,

    /// Price per unit now
    pub current_value: f64,

    pub purchase_date: DateTime<Utc>,
}

impl Holding {
    pub fn new(
        name: impl Into<String>,
        holding_type: HoldingType,
        quantity: f64,
        purchase_price: f64,
        current_value: f64,
        purchase_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            symbol: None,
            holding_type,
            quantity,
            purchase_price,
            current_value,
            purchase_date,
        }
    }

    /// Attach a ticker symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Current market value: `quantity × current_value`.
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_value
    }

    /// Cost of the position at purchase: `quantity × purchase_price`.
    pub fn cost_basis(&self) -> f64 {
        self.quantity * self.purchase_price
    }
}
