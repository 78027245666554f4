//! Monthly income/expense figures

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One month of income, expenses and profit
///
/// `profit` is carried as supplied. Data built with [`MonthlyRecord::new`]
/// always satisfies `profit == income - expenses`; data loaded from a host
/// may not, see [`MonthlyRecord::is_consistent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    /// Month label, e.g. "Jan"
    pub month: String,
    pub income: Money,
    pub expenses: Money,
    pub profit: Money,
}

impl MonthlyRecord {
    /// Create a record, deriving profit from income and expenses
    pub fn new(month: impl Into<String>, income: Money, expenses: Money) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            profit: income - expenses,
        }
    }

    /// Create a record with an explicitly supplied profit
    pub fn with_profit(
        month: impl Into<String>,
        income: Money,
        expenses: Money,
        profit: Money,
    ) -> Self {
        Self {
            month: month.into(),
            income,
            expenses,
            profit,
        }
    }

    /// Whether the stored profit equals income minus expenses
    pub fn is_consistent(&self) -> bool {
        self.profit == self.income - self.expenses
    }

    /// The larger of income and expenses; the height this month needs on a chart
    pub fn peak(&self) -> Money {
        self.income.max(self.expenses)
    }
}
