//! Expense Breakdown Report
//!
//! Turns expense categories into pie-chart slices: cumulative start/end
//! angles, the large-arc flag and the sector path on a 100x100 viewbox.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseCategory, Money};
use serde::Serialize;
use std::io::Write;

/// Degrees of sweep per percentage point
pub const DEGREES_PER_PERCENT: f64 = 3.6;

/// Center of the pie on the viewbox
pub const PIE_CENTER: (f64, f64) = (50.0, 50.0);

/// Radius of the pie on the viewbox
pub const PIE_RADIUS: f64 = 40.0;

/// Point on the pie's circle at `angle` degrees
pub fn arc_point(angle: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (
        PIE_CENTER.0 + PIE_RADIUS * radians.cos(),
        PIE_CENTER.1 + PIE_RADIUS * radians.sin(),
    )
}

/// Geometry of one category's sector
#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub amount: Money,
    pub percentage: f64,
    pub color_tag: String,
    /// Degrees swept by all preceding slices
    pub start_angle: f64,
    pub end_angle: f64,
    /// 1 when the slice covers more than half the circle, else 0
    pub large_arc: u8,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Arc start point
    pub fn start_point(&self) -> (f64, f64) {
        arc_point(self.start_angle)
    }

    /// Arc end point
    pub fn end_point(&self) -> (f64, f64) {
        arc_point(self.end_angle)
    }

    /// Closed sector path: center, line to arc start, arc to arc end
    pub fn sector_path(&self) -> String {
        let (x1, y1) = self.start_point();
        let (x2, y2) = self.end_point();
        format!(
            "M {cx} {cy} L {x1:.3} {y1:.3} A {r} {r} 0 {flag} 1 {x2:.3} {y2:.3} Z",
            cx = PIE_CENTER.0,
            cy = PIE_CENTER.1,
            r = PIE_RADIUS,
            flag = self.large_arc,
        )
    }
}

/// Compute slice angles for categories in order
///
/// Angles are cumulative, so they never decrease along the sequence as long
/// as no percentage is negative.
pub fn pie_slices(categories: &[ExpenseCategory]) -> Vec<PieSlice> {
    let mut start_angle = 0.0;
    categories
        .iter()
        .map(|category| {
            let end_angle = start_angle + category.percentage * DEGREES_PER_PERCENT;
            let slice = PieSlice {
                name: category.name.clone(),
                amount: category.amount,
                percentage: category.percentage,
                color_tag: category.color_tag.clone(),
                start_angle,
                end_angle,
                large_arc: u8::from(category.percentage > 50.0),
            };
            start_angle = end_angle;
            slice
        })
        .collect()
}

/// Expense Breakdown Report
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseBreakdown {
    pub slices: Vec<PieSlice>,
    pub total_amount: Money,
    /// Sum of the supplied percentages (about 100 for well-formed data)
    pub percentage_sum: f64,
}

impl ExpenseBreakdown {
    /// Build from categories with supplied percentages
    pub fn generate(categories: &[ExpenseCategory]) -> Self {
        let percentage_sum: f64 = categories.iter().map(|c| c.percentage).sum();
        if !categories.is_empty() && (percentage_sum - 100.0).abs() > 0.5 {
            tracing::warn!(percentage_sum, "expense percentages do not sum to 100");
        }

        Self {
            slices: pie_slices(categories),
            total_amount: categories.iter().map(|c| c.amount).sum(),
            percentage_sum,
        }
    }

    /// Build from names and amounts, deriving each category's share
    ///
    /// Percentages are all zero when the total is not positive.
    pub fn from_amounts<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let entries: Vec<(String, Money)> =
            entries.into_iter().map(|(n, a)| (n.into(), a)).collect();
        let total: Money = entries.iter().map(|(_, a)| *a).sum();

        let categories: Vec<ExpenseCategory> = entries
            .into_iter()
            .map(|(name, amount)| {
                let percentage = if total.is_positive() {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                } else {
                    0.0
                };
                ExpenseCategory::new(name, amount, percentage, "")
            })
            .collect();

        Self::generate(&categories)
    }

    /// Total sweep of all slices in degrees
    pub fn total_sweep(&self) -> f64 {
        self.slices.last().map(|s| s.end_angle).unwrap_or(0.0)
    }

    /// Largest slices first
    pub fn top(&self, limit: usize) -> Vec<&PieSlice> {
        let mut slices: Vec<&PieSlice> = self.slices.iter().collect();
        slices.sort_by(|a, b| b.amount.cmp(&a.amount));
        slices.into_iter().take(limit).collect()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, symbol: &str, limit: Option<usize>) -> String {
        let mut output = String::new();

        output.push_str("Expense Categories\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.slices.is_empty() {
            output.push_str("No expense categories.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>7} {:>8} {:>8}  {}\n",
            "Category", "Amount", "%", "Start", "End", "Share"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        let rows: Vec<&PieSlice> = match limit {
            Some(n) => self.top(n),
            None => self.slices.iter().collect(),
        };
        for slice in rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>7} {:>7.1}° {:>7.1}°  {}\n",
                crate::display::truncate(&slice.name, 20),
                slice.amount.format_with_symbol(symbol),
                crate::display::format_percentage(slice.percentage),
                slice.start_angle,
                slice.end_angle,
                crate::display::format_bar(slice.percentage, 100.0, 20)
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12} {:>7}\n",
            "TOTAL",
            self.total_amount.format_with_symbol(symbol),
            crate::display::format_percentage(self.percentage_sum)
        ));

        output
    }

    /// Export slices to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["Category", "Amount", "Percentage", "Start Angle", "End Angle", "Path"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for slice in &self.slices {
            csv_writer
                .write_record([
                    slice.name.clone(),
                    format!("{:.2}", slice.amount.as_f64()),
                    format!("{:.2}", slice.percentage),
                    format!("{:.2}", slice.start_angle),
                    format!("{:.2}", slice.end_angle),
                    slice.sector_path(),
                ])
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }
}
