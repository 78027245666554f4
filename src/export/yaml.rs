//! YAML Export functionality
//!
//! Exports the dashboard snapshot to YAML format for human reading.

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::DashboardSnapshot;
use crate::models::InsightPeriod;
use crate::storage::Dataset;
use std::io::Write;

/// Export the dashboard snapshot to YAML format
pub fn export_snapshot_yaml<W: Write>(
    dataset: &Dataset,
    period: InsightPeriod,
    writer: &mut W,
) -> FintrackResult<()> {
    let snapshot = DashboardSnapshot::new(dataset, period);

    writeln!(writer, "# fintrack dashboard snapshot")?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)?;
    writeln!(writer, "# App Version: {}", snapshot.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export() {
        let dataset = Dataset::sample();
        let mut output = Vec::new();
        export_snapshot_yaml(&dataset, InsightPeriod::SixMonths, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("# fintrack dashboard snapshot"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("months: 6"));
    }

    #[test]
    fn test_yaml_is_parseable() {
        let dataset = Dataset::sample();
        let mut output = Vec::new();
        export_snapshot_yaml(&dataset, InsightPeriod::default(), &mut output).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_slice(&output).unwrap();
        assert_eq!(value["metadata"]["category_count"].as_u64(), Some(7));
    }
}
