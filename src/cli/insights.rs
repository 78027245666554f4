//! CLI command for the financial insights report

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::InsightPeriod;
use crate::reports::InsightsReport;
use crate::storage::{read_monthly_csv_file, Dataset};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments of the insights command
#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Period to report on (3M, 6M or 12M); defaults to the configured period
    #[arg(short, long)]
    pub period: Option<InsightPeriod>,

    /// Read monthly figures from a CSV file (month,income,expenses[,profit])
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Export to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the insights command
pub fn handle_insights_command(
    dataset: &Dataset,
    settings: &Settings,
    args: InsightsArgs,
) -> FintrackResult<()> {
    let period = args.period.unwrap_or(settings.insight_period);

    let imported;
    let records = match &args.csv {
        Some(path) => {
            imported = read_monthly_csv_file(path)?;
            imported.as_slice()
        }
        None => dataset.monthly.as_slice(),
    };

    let report = InsightsReport::generate(records, period);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Insights report exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
