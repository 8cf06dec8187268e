//! Line item model for financials-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_quantity() -> Decimal {
    Decimal::ONE
}

/// Priced line on an estimate or job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Precomputed total; trusted over `quantity * unit_price` when present.
    #[serde(default)]
    pub line_total: Option<Decimal>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            line_total: None,
        }
    }

    /// A single unit at `unit_price`.
    pub fn single(description: impl Into<String>, unit_price: Decimal) -> Self {
        Self::new(description, default_quantity(), unit_price)
    }

    pub fn with_line_total(mut self, line_total: Decimal) -> Self {
        self.line_total = Some(line_total);
        self
    }

    /// `None` when `quantity * unit_price` overflows.
    pub fn effective_total(&self) -> Option<Decimal> {
        self.line_total
            .or_else(|| self.quantity.checked_mul(self.unit_price))
    }
}
