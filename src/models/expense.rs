//! Expense category model

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A slice of monthly spending with its share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    pub name: String,
    pub amount: Money,
    /// Share of total spending, 0-100
    pub percentage: f64,
    /// Presentation tag chosen by the host (e.g. "blue")
    #[serde(default, alias = "color")]
    pub color_tag: String,
}

impl ExpenseCategory {
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        percentage: f64,
        color_tag: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            percentage,
            color_tag: color_tag.into(),
        }
    }
}
