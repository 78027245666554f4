//! JSON Export functionality
//!
//! Exports a snapshot of the dashboard (raw dataset plus computed insights
//! and pie geometry) with schema versioning.

use crate::error::{FintrackError, FintrackResult};
use crate::models::InsightPeriod;
use crate::reports::{ExpenseBreakdown, InsightsReport};
use crate::storage::Dataset;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard snapshot structure
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot<'a> {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Source records
    pub dataset: &'a Dataset,

    /// Aggregates over the chosen period
    pub insights: InsightsReport,

    /// Pie geometry of the expense categories
    pub expenses: ExpenseBreakdown,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub month_count: usize,
    pub category_count: usize,
    pub transfer_count: usize,

    /// Date range of transfers (earliest)
    pub earliest_transfer: Option<String>,

    /// Date range of transfers (latest)
    pub latest_transfer: Option<String>,
}

impl<'a> DashboardSnapshot<'a> {
    /// Build a snapshot of `dataset` with insights over `period`
    pub fn new(dataset: &'a Dataset, period: InsightPeriod) -> Self {
        let earliest_transfer = dataset
            .transfers
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());

        let latest_transfer = dataset
            .transfers
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            month_count: dataset.monthly.len(),
            category_count: dataset.expense_categories.len(),
            transfer_count: dataset.transfers.len(),
            earliest_transfer,
            latest_transfer,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            dataset,
            insights: InsightsReport::generate(&dataset.monthly, period),
            expenses: ExpenseBreakdown::generate(&dataset.expense_categories),
            metadata,
        }
    }
}

/// Export the dashboard snapshot to JSON
pub fn export_snapshot_json<W: Write>(
    dataset: &Dataset,
    period: InsightPeriod,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    let snapshot = DashboardSnapshot::new(dataset, period);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
