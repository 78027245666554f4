//! CLI command for the expense breakdown

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::reports::ExpenseBreakdown;
use crate::storage::Dataset;
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Arguments of the expenses command
#[derive(Args, Debug)]
pub struct ExpensesArgs {
    /// Show top N categories only
    #[arg(long)]
    pub top: Option<usize>,

    /// Export slices to CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the expenses command
pub fn handle_expenses_command(
    dataset: &Dataset,
    settings: &Settings,
    args: ExpensesArgs,
) -> FintrackResult<()> {
    let breakdown = ExpenseBreakdown::generate(&dataset.expense_categories);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        breakdown.export_csv(&mut writer)?;
        println!("Expense breakdown exported to: {}", path.display());
    } else {
        println!(
            "{}",
            breakdown.format_terminal(&settings.currency_symbol, args.top)
        );
    }

    Ok(())
}
