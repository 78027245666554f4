//! Transfer display formatting
//!
//! Register rows, details and the stats summary for the transfers view.

use crate::models::{Transfer, TransferStatus};
use crate::services::{TransferQuote, TransferStats};

use super::report::{separator, truncate};

fn status_icon(status: TransferStatus) -> &'static str {
    match status {
        TransferStatus::Completed => "✓",
        TransferStatus::Pending => "…",
        TransferStatus::Failed => "✗",
    }
}

/// Format a single transfer as a register row
pub fn format_transfer_row(transfer: &Transfer) -> String {
    format!(
        "{} {:>5} {} {} {:<20} {:<16} {:>13} {} ≈ {:>14} {}",
        status_icon(transfer.status),
        transfer.id,
        transfer.date.format("%Y-%m-%d"),
        transfer.time.format("%H:%M"),
        truncate(&transfer.recipient, 20),
        truncate(&transfer.country, 16),
        format!("{}{}", transfer.direction.sign(), transfer.amount.format_grouped()),
        transfer.source_currency,
        transfer.converted_amount.format_grouped(),
        transfer.target_currency,
    )
}

/// Format a list of transfers as a register
pub fn format_transfer_register(transfers: &[&Transfer]) -> String {
    if transfers.is_empty() {
        return "No transfers found matching your criteria.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:>5} {:10} {:5} {:<20} {:<16} {:>17} {:>18}\n",
        "", "ID", "Date", "Time", "Recipient", "Country", "Amount", "Converted"
    ));
    output.push_str(&separator(100));
    output.push('\n');

    for transfer in transfers {
        output.push_str(&format_transfer_row(transfer));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transfer(s)\n", transfers.len()));
    output
}

/// Format transfer details for display
pub fn format_transfer_details(transfer: &Transfer) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transfer:   {}\n", transfer.id));
    output.push_str(&format!("Direction:  {}\n", transfer.direction));
    output.push_str(&format!("Recipient:  {} <{}>\n", transfer.recipient, transfer.email));
    output.push_str(&format!("Country:    {}\n", transfer.country));
    output.push_str(&format!(
        "Amount:     {}{} {}\n",
        transfer.direction.sign(),
        transfer.amount.format_grouped(),
        transfer.source_currency
    ));
    output.push_str(&format!(
        "Converted:  {} {}\n",
        transfer.converted_amount.format_grouped(),
        transfer.target_currency
    ));
    output.push_str(&format!(
        "Rate:       {} • Fee: {} {}\n",
        transfer.exchange_rate,
        transfer.fee.format_grouped(),
        transfer.source_currency
    ));
    output.push_str(&format!("Status:     {}\n", transfer.status));
    output.push_str(&format!(
        "When:       {} {}\n",
        transfer.date.format("%Y-%m-%d"),
        transfer.time.format("%H:%M")
    ));

    output
}

/// Format the transfer stats summary
pub fn format_transfer_stats(stats: &TransferStats) -> String {
    let mut output = String::new();

    output.push_str("Transfer Summary\n");
    output.push_str(&separator(40));
    output.push('\n');

    if stats.sent.is_empty() {
        output.push_str("Total Sent:     -\n");
    }
    for (currency, amount) in &stats.sent {
        output.push_str(&format!("Total Sent:     {:>14} {}\n", amount.format_grouped(), currency));
    }
    for (currency, amount) in &stats.received {
        output.push_str(&format!("Total Received: {:>14} {}\n", amount.format_grouped(), currency));
    }
    for (currency, amount) in &stats.fees {
        output.push_str(&format!("Fees:           {:>14} {}\n", amount.format_grouped(), currency));
    }
    output.push_str(&format!("Countries:      {:>14}\n", stats.countries));
    for status in TransferStatus::ALL {
        output.push_str(&format!(
            "{:<15} {:>14}\n",
            format!("{}:", capitalize(status.as_str())),
            stats.count(status)
        ));
    }

    output
}

/// Format a transfer quote
pub fn format_transfer_quote(quote: &TransferQuote) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Send:        {} {}\n",
        quote.amount.format_grouped(),
        quote.source_currency
    ));
    output.push_str(&format!("Rate:        {}\n", quote.exchange_rate));
    output.push_str(&format!(
        "Recipient gets: {} {}\n",
        quote.converted_amount.format_grouped(),
        quote.target_currency
    ));
    output.push_str(&format!(
        "Fee:         {} {}\n",
        quote.fee.format_grouped(),
        quote.source_currency
    ));
    output.push_str(&format!(
        "Total debit: {} {}\n",
        quote.total_debit.format_grouped(),
        quote.source_currency
    ));
    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::TransferService;
    use crate::storage::Dataset;

    #[test]
    fn test_format_transfer_row() {
        let data = Dataset::sample();
        let row = format_transfer_row(&data.transfers[0]);
        assert!(row.contains("Sarah Johnson"));
        assert!(row.contains("-2,500.00 USD"));
        assert!(row.contains("2,287.50 EUR"));
        assert!(row.starts_with('✓'));
    }

    #[test]
    fn test_received_row_has_plus_sign() {
        let data = Dataset::sample();
        let row = format_transfer_row(&data.transfers[1]);
        assert!(row.contains("+1,840.00 GBP"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(
            format_transfer_register(&[]),
            "No transfers found matching your criteria.\n"
        );
    }

    #[test]
    fn test_register_counts() {
        let data = Dataset::sample();
        let refs: Vec<&Transfer> = data.transfers.iter().collect();
        let text = format_transfer_register(&refs);
        assert!(text.contains("4 transfer(s)"));
    }

    #[test]
    fn test_details() {
        let data = Dataset::sample();
        let text = format_transfer_details(&data.transfers[3]);
        assert!(text.contains("yuki.tanaka@tech.jp"));
        assert!(text.contains("479,424.00 JPY"));
        assert!(text.contains("Status:     failed"));
    }

    #[test]
    fn test_stats_summary() {
        let data = Dataset::sample();
        let stats = TransferService::new(&data.transfers).stats();
        let text = format_transfer_stats(&stats);
        assert!(text.contains("6,450.00 USD"));
        assert!(text.contains("Failed:"));
    }
}
