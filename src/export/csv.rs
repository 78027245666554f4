//! CSV Export functionality
//!
//! Exports transfer lists to a spreadsheet-compatible CSV file.

use crate::error::{FintrackError, FintrackResult};
use crate::models::Transfer;
use std::io::Write;

/// Export transfers to CSV, one row per transfer in the given order
pub fn export_transfers_csv<'a, W, I>(transfers: I, writer: &mut W) -> FintrackResult<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Transfer>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record([
            "ID",
            "Date",
            "Time",
            "Direction",
            "Recipient",
            "Email",
            "Country",
            "Amount",
            "Source Currency",
            "Converted",
            "Target Currency",
            "Rate",
            "Fee",
            "Status",
        ])
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    let mut count = 0usize;
    for transfer in transfers {
        csv_writer
            .write_record([
                transfer.id.to_string(),
                transfer.date.format("%Y-%m-%d").to_string(),
                transfer.time.format("%H:%M").to_string(),
                transfer.direction.to_string(),
                transfer.recipient.clone(),
                transfer.email.clone(),
                transfer.country.clone(),
                format!("{:.2}", transfer.amount.as_f64()),
                transfer.source_currency.to_string(),
                format!("{:.2}", transfer.converted_amount.as_f64()),
                transfer.target_currency.to_string(),
                transfer.exchange_rate.to_string(),
                format!("{:.2}", transfer.fee.as_f64()),
                transfer.status.to_string(),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;
    tracing::debug!(rows = count, "exported transfers csv");
    Ok(())
}
