//! CLI commands for international transfers
//!
//! Listing with search and status filters, summary stats, single-transfer
//! details, and quoting a new transfer. Nothing is sent.

use crate::display::{
    format_transfer_details, format_transfer_quote, format_transfer_register,
    format_transfer_stats,
};
use crate::error::{FintrackError, FintrackResult};
use crate::export::export_transfers_csv;
use crate::models::{CurrencyCode, Money, StatusFilter, TransferId};
use crate::services::{TransferDraft, TransferFilter, TransferService};
use crate::storage::Dataset;
use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Transfer subcommands
#[derive(Subcommand, Debug)]
pub enum TransferCommands {
    /// List transfers
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search on recipient name or email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter (all, completed, pending, failed)
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Export the matching transfers to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show totals sent, received and fees
    Stats,

    /// Show a single transfer
    Show {
        /// Transfer ID (e.g. tr-2 or 2)
        id: TransferId,
    },

    /// Validate and price a new transfer
    Quote {
        /// Recipient email
        #[arg(long)]
        email: String,

        /// Amount to send (e.g. 1000 or 1,000.50)
        #[arg(long)]
        amount: String,

        /// Source currency
        #[arg(long, default_value = "USD")]
        currency: CurrencyCode,

        /// Target currency
        #[arg(long)]
        to: CurrencyCode,

        /// Exchange rate (target units per source unit)
        #[arg(long)]
        rate: f64,

        /// Fee in the source currency
        #[arg(long, default_value = "0")]
        fee: String,

        /// Note for the recipient
        #[arg(long, default_value = "")]
        note: String,
    },
}

/// Handle transfer commands
pub fn handle_transfer_command(dataset: &Dataset, cmd: TransferCommands) -> FintrackResult<()> {
    let service = TransferService::new(&dataset.transfers);

    match cmd {
        TransferCommands::List {
            search,
            status,
            output,
        } => {
            let matched = service.filter(&TransferFilter::new(search, status));

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    FintrackError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                export_transfers_csv(matched.iter().copied(), &mut writer)?;
                println!(
                    "Exported {} transfer(s) to: {}",
                    matched.len(),
                    path.display()
                );
            } else {
                print!("{}", format_transfer_register(&matched));
            }
        }

        TransferCommands::Stats => {
            print!("{}", format_transfer_stats(&service.stats()));
        }

        TransferCommands::Show { id } => {
            let transfer = service.find(id)?;
            print!("{}", format_transfer_details(transfer));
        }

        TransferCommands::Quote {
            email,
            amount,
            currency,
            to,
            rate,
            fee,
            note,
        } => {
            let amount = parse_money(&amount, "amount")?;
            let fee = parse_money(&fee, "fee")?;
            let draft = TransferDraft::new(email, amount, currency, note);
            let quote = draft.quote(to, rate, fee)?;
            print!("{}", format_transfer_quote(&quote));
        }
    }

    Ok(())
}

fn parse_money(raw: &str, field: &str) -> FintrackResult<Money> {
    Money::parse(raw).map_err(|e| FintrackError::Validation(format!("Invalid {}: {}", field, e)))
}
