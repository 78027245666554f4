//! Reports module for fintrack
//!
//! Derived metrics behind the insights view: monthly aggregates and the
//! expense breakdown pie.

pub mod expense_breakdown;
pub mod insights;

pub use expense_breakdown::{pie_slices, ExpenseBreakdown, PieSlice};
pub use insights::{
    bar_ratio, max_scale, profit_change_pct, savings_rate_pct, total_expenses, total_income,
    total_profit, ChartRow, InsightsReport,
};
