//! CLI command for data export
//!
//! Writes the dashboard snapshot as JSON or YAML, or the transfer list as
//! CSV, to a file or stdout.

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_snapshot_json, export_snapshot_yaml, export_transfers_csv};
use crate::models::InsightPeriod;
use crate::storage::Dataset;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (dashboard snapshot)
    Json,
    /// YAML format (dashboard snapshot, human-readable)
    Yaml,
    /// CSV format (transfers only)
    Csv,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Period used for the computed insights
    #[arg(short, long)]
    pub period: Option<InsightPeriod>,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(
    dataset: &Dataset,
    settings: &Settings,
    args: ExportArgs,
) -> FintrackResult<()> {
    let period = args.period.unwrap_or(settings.insight_period);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(dataset, period, &args, &mut writer)?;
            writer.flush()?;
            println!("Exported {:?} to: {}", args.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(dataset, period, &args, &mut writer)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    dataset: &Dataset,
    period: InsightPeriod,
    args: &ExportArgs,
    writer: &mut W,
) -> FintrackResult<()> {
    match args.format {
        ExportFormat::Json => export_snapshot_json(dataset, period, writer, !args.compact),
        ExportFormat::Yaml => export_snapshot_yaml(dataset, period, writer),
        ExportFormat::Csv => export_transfers_csv(&dataset.transfers, writer),
    }
}
