//! Money values as delivered by the catalog API.
//!
//! The API reports amounts as decimal numbers with an ISO currency code. The
//! page never does arithmetic on them; it only re-publishes them.

use serde::{Deserialize, Serialize};

/// A monetary amount with its currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount (e.g. `49.99`).
    pub amount: f64,
    /// ISO 4217 currency code (e.g. `"USD"`).
    pub currency: String,
}

impl Money {
    /// Create a new money value.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Amount as the shortest decimal string: `12.5` → `"12.5"`, `10.0` → `"10"`.
    pub fn amount_string(&self) -> String {
        if self.amount == 0.0 {
            // Avoid "-0"
            return "0".to_string();
        }
        format!("{}", self.amount)
    }
}

/// Gross and net amounts of a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxedMoney {
    pub gross: Money,
    #[serde(default)]
    pub net: Option<Money>,
}

impl TaxedMoney {
    /// A price where gross and net are the same.
    pub fn untaxed(money: Money) -> Self {
        Self {
            net: Some(money.clone()),
            gross: money,
        }
    }
}
