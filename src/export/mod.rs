//! Export module for fintrack
//!
//! Provides data export in multiple formats:
//! - CSV: transfer lists (spreadsheet-compatible)
//! - JSON: machine-readable dashboard snapshot
//! - YAML: human-readable dashboard snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transfers_csv;
pub use json::{export_snapshot_json, DashboardSnapshot, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
