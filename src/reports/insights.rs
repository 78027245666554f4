//! Financial Insights Report
//!
//! Aggregates monthly income/expense records into the totals, growth and
//! savings figures shown on the insights view, plus the normalized bar
//! heights of the monthly chart.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{InsightPeriod, Money, MonthlyRecord};
use serde::Serialize;
use std::io::Write;

/// Sum of income over all records
pub fn total_income(records: &[MonthlyRecord]) -> Money {
    records.iter().map(|r| r.income).sum()
}

/// Sum of expenses over all records
pub fn total_expenses(records: &[MonthlyRecord]) -> Money {
    records.iter().map(|r| r.expenses).sum()
}

/// Total income minus total expenses
///
/// Computed from the totals rather than summing `profit`, so records with an
/// inconsistent stored profit do not skew it.
pub fn total_profit(records: &[MonthlyRecord]) -> Money {
    total_income(records) - total_expenses(records)
}

/// Percentage change of profit from the second-to-last to the last record
///
/// `None` when fewer than two records exist or the earlier profit is zero.
pub fn profit_change_pct(records: &[MonthlyRecord]) -> Option<f64> {
    let [.., previous, current] = records else {
        return None;
    };
    if previous.profit.is_zero() {
        return None;
    }
    let delta = (current.profit - previous.profit).cents() as f64;
    Some(delta / previous.profit.cents() as f64 * 100.0)
}

/// Total profit as a percentage of total income
///
/// `None` when total income is zero.
pub fn savings_rate_pct(records: &[MonthlyRecord]) -> Option<f64> {
    let income = total_income(records);
    if income.is_zero() {
        return None;
    }
    Some(total_profit(records).cents() as f64 / income.cents() as f64 * 100.0)
}

/// Largest income or expense figure across all records (zero when empty)
pub fn max_scale(records: &[MonthlyRecord]) -> Money {
    records
        .iter()
        .map(MonthlyRecord::peak)
        .max()
        .unwrap_or_else(Money::zero)
}

/// `value / scale`, clamped to `[0, 1]`; zero when the scale is not positive
pub fn bar_ratio(value: Money, scale: Money) -> f64 {
    if !scale.is_positive() || !value.is_positive() {
        return 0.0;
    }
    (value.cents() as f64 / scale.cents() as f64).min(1.0)
}

/// One column group of the monthly chart
#[derive(Debug, Clone, Serialize)]
pub struct ChartRow {
    pub month: String,
    pub income: Money,
    pub expenses: Money,
    pub profit: Money,
    pub income_ratio: f64,
    pub expenses_ratio: f64,
    pub profit_ratio: f64,
}

/// Financial Insights Report
#[derive(Debug, Clone, Serialize)]
pub struct InsightsReport {
    /// Period the records were windowed to
    pub period: InsightPeriod,
    /// Number of months in the window
    pub months: usize,
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_profit: Money,
    /// Month-over-month profit change in percent, if computable
    pub profit_change_pct: Option<f64>,
    /// Profit as a share of income in percent, if computable
    pub savings_rate_pct: Option<f64>,
    /// Chart normalization scale
    pub max_scale: Money,
    /// Most recent month in the window
    pub current_month: Option<MonthlyRecord>,
    /// Month before the most recent one
    pub previous_month: Option<MonthlyRecord>,
    pub chart: Vec<ChartRow>,
    /// Months whose stored profit differs from income - expenses
    pub inconsistent_months: Vec<String>,
}

impl InsightsReport {
    /// Generate the report over the trailing `period` of `records`
    pub fn generate(records: &[MonthlyRecord], period: InsightPeriod) -> Self {
        let window = period.window(records);
        let scale = max_scale(window);

        let chart = window
            .iter()
            .map(|r| ChartRow {
                month: r.month.clone(),
                income: r.income,
                expenses: r.expenses,
                profit: r.profit,
                income_ratio: bar_ratio(r.income, scale),
                expenses_ratio: bar_ratio(r.expenses, scale),
                profit_ratio: bar_ratio(r.profit, scale),
            })
            .collect();

        let inconsistent_months: Vec<String> = window
            .iter()
            .filter(|r| !r.is_consistent())
            .map(|r| r.month.clone())
            .collect();
        if !inconsistent_months.is_empty() {
            tracing::warn!(
                months = ?inconsistent_months,
                "profit does not equal income minus expenses"
            );
        }

        let (previous_month, current_month) = match window {
            [.., prev, cur] => (Some(prev.clone()), Some(cur.clone())),
            [only] => (None, Some(only.clone())),
            [] => (None, None),
        };

        Self {
            period,
            months: window.len(),
            total_income: total_income(window),
            total_expenses: total_expenses(window),
            total_profit: total_profit(window),
            profit_change_pct: profit_change_pct(window),
            savings_rate_pct: savings_rate_pct(window),
            max_scale: scale,
            current_month,
            previous_month,
            chart,
            inconsistent_months,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Insights ({} - {} months)\n",
            self.period, self.months
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>16}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>16}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Profit:     {:>16}  {}\n",
            self.total_profit.format_with_symbol(symbol),
            format_change(self.profit_change_pct)
        ));
        output.push_str(&format!(
            "Savings Rate:   {:>16}\n\n",
            format_optional_pct(self.savings_rate_pct)
        ));

        if self.chart.is_empty() {
            output.push_str("No monthly data.\n");
            return output;
        }

        const BAR_WIDTH: usize = 30;
        output.push_str(&format!(
            "{:<6} {:<8} {:>14}  {}\n",
            "Month", "Series", "Amount", "Scale"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        for row in &self.chart {
            let series = [
                ("income", row.income, row.income_ratio),
                ("expenses", row.expenses, row.expenses_ratio),
                ("profit", row.profit, row.profit_ratio),
            ];
            for (i, (label, amount, ratio)) in series.iter().enumerate() {
                let month = if i == 0 { row.month.as_str() } else { "" };
                output.push_str(&format!(
                    "{:<6} {:<8} {:>14}  {}\n",
                    month,
                    label,
                    amount.format_with_symbol(symbol),
                    crate::display::format_bar(*ratio, 1.0, BAR_WIDTH)
                ));
            }
        }

        if !self.inconsistent_months.is_empty() {
            output.push_str(&format!(
                "\nWarning: profit differs from income - expenses in: {}\n",
                self.inconsistent_months.join(", ")
            ));
        }

        output
    }

    /// Export the monthly rows and totals to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["Month", "Income", "Expenses", "Profit"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for row in &self.chart {
            csv_writer
                .write_record([
                    row.month.clone(),
                    format!("{:.2}", row.income.as_f64()),
                    format!("{:.2}", row.expenses.as_f64()),
                    format!("{:.2}", row.profit.as_f64()),
                ])
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        csv_writer
            .write_record([
                "TOTAL".to_string(),
                format!("{:.2}", self.total_income.as_f64()),
                format!("{:.2}", self.total_expenses.as_f64()),
                format!("{:.2}", self.total_profit.as_f64()),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}

fn format_optional_pct(value: Option<f64>) -> String {
    match value {
        Some(pct) => format!("{:.1}%", pct),
        None => "n/a".to_string(),
    }
}

fn format_change(value: Option<f64>) -> String {
    match value {
        Some(pct) if pct >= 0.0 => format!("+{:.1}% from last month", pct),
        Some(pct) => format!("{:.1}% from last month", pct),
        None => "n/a from last month".to_string(),
    }
}
