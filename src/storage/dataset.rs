//! Dashboard dataset
//!
//! Bundles every record collection the dashboard reads. The built-in sample
//! set is what the dashboard shows when no host data is supplied.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::file_io::read_json_required;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    CurrencyCode, ExpenseCategory, Money, MonthlyRecord, Setting, SettingsBook, Transfer,
    TransferDirection, TransferId, TransferStatus,
};

/// All record collections behind the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub monthly: Vec<MonthlyRecord>,
    #[serde(default)]
    pub expense_categories: Vec<ExpenseCategory>,
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub settings: SettingsBook,
}

impl Dataset {
    /// Load a dataset from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> FintrackResult<Self> {
        let dataset: Dataset = read_json_required(path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            months = dataset.monthly.len(),
            categories = dataset.expense_categories.len(),
            transfers = dataset.transfers.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Load `path` if given, otherwise `default_path` if it exists,
    /// otherwise the built-in sample
    pub fn resolve(path: Option<&Path>, default_path: &Path) -> FintrackResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None if default_path.exists() => Self::load(default_path),
            None => {
                tracing::debug!("no dataset file, using sample data");
                Ok(Self::sample())
            }
        }
    }

    /// The dashboard's built-in sample data
    pub fn sample() -> Self {
        Self {
            monthly: sample_monthly(),
            expense_categories: sample_expense_categories(),
            transfers: sample_transfers(),
            settings: sample_settings(),
        }
    }
}

fn sample_monthly() -> Vec<MonthlyRecord> {
    [
        ("Jan", 8500, 6200),
        ("Feb", 9200, 6800),
        ("Mar", 7800, 5900),
        ("Apr", 10500, 7200),
        ("May", 11200, 8100),
        ("Jun", 9800, 7400),
        ("Jul", 12100, 8900),
        ("Aug", 10800, 7800),
        ("Sep", 11500, 8200),
        ("Oct", 12800, 9100),
        ("Nov", 13200, 9500),
        ("Dec", 14100, 10200),
    ]
    .into_iter()
    .map(|(month, income, expenses)| {
        MonthlyRecord::new(month, Money::from_units(income), Money::from_units(expenses))
    })
    .collect()
}

fn sample_expense_categories() -> Vec<ExpenseCategory> {
    [
        ("Housing", 3200, 35.0, "blue"),
        ("Food & Dining", 1800, 20.0, "green"),
        ("Transportation", 1200, 13.0, "yellow"),
        ("Entertainment", 900, 10.0, "purple"),
        ("Shopping", 800, 9.0, "pink"),
        ("Utilities", 600, 7.0, "orange"),
        ("Other", 500, 6.0, "gray"),
    ]
    .into_iter()
    .map(|(name, amount, percentage, color)| {
        ExpenseCategory::new(name, Money::from_units(amount), percentage, color)
    })
    .collect()
}

/// Calendar date in the sample year, checked at compile time
const fn sample_date(month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(2024, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

/// Wall-clock time, checked at compile time
const fn sample_time(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid sample time"),
    }
}

const JAN_13: NaiveDate = sample_date(1, 13);
const JAN_14: NaiveDate = sample_date(1, 14);
const JAN_15: NaiveDate = sample_date(1, 15);

#[allow(clippy::too_many_arguments)]
fn sample_transfer(
    id: u64,
    direction: TransferDirection,
    recipient: &str,
    email: &str,
    amount_cents: i64,
    currencies: (CurrencyCode, CurrencyCode),
    converted_cents: i64,
    status: TransferStatus,
    when: (NaiveDate, NaiveTime),
    fee_cents: i64,
    exchange_rate: f64,
    country: &str,
) -> Transfer {
    let (source_currency, target_currency) = currencies;
    let (date, time) = when;
    Transfer {
        id: TransferId::new(id),
        direction,
        recipient: recipient.to_string(),
        email: email.to_string(),
        amount: Money::from_cents(amount_cents),
        source_currency,
        target_currency,
        converted_amount: Money::from_cents(converted_cents),
        status,
        date,
        time,
        fee: Money::from_cents(fee_cents),
        exchange_rate,
        country: country.to_string(),
    }
}

fn sample_transfers() -> Vec<Transfer> {
    use TransferDirection::{Received, Sent};
    use TransferStatus::{Completed, Failed, Pending};

    const AT_09_45: NaiveTime = sample_time(9, 45);
    const AT_12_15: NaiveTime = sample_time(12, 15);
    const AT_14_30: NaiveTime = sample_time(14, 30);
    const AT_16_20: NaiveTime = sample_time(16, 20);

    vec![
        sample_transfer(
            1, Sent, "Sarah Johnson", "sarah.j@email.com",
            250_000, (CurrencyCode::usd(), CurrencyCode::eur()), 228_750, Completed,
            (JAN_15, AT_14_30), 1_250, 0.915, "Germany",
        ),
        sample_transfer(
            2, Received, "Marcus Chen", "marcus.chen@company.com",
            184_000, (CurrencyCode::gbp(), CurrencyCode::usd()), 232_416, Pending,
            (JAN_15, AT_12_15), 875, 1.263, "United Kingdom",
        ),
        sample_transfer(
            3, Sent, "Elena Rodriguez", "elena.r@freelance.com",
            75_000, (CurrencyCode::usd(), CurrencyCode::eur()), 68_625, Completed,
            (JAN_14, AT_09_45), 525, 0.915, "Spain",
        ),
        sample_transfer(
            4, Sent, "Yuki Tanaka", "yuki.tanaka@tech.jp",
            320_000, (CurrencyCode::usd(), CurrencyCode::jpy()), 47_942_400, Failed,
            (JAN_13, AT_16_20), 1_500, 149.82, "Japan",
        ),
    ]
}

fn sample_settings() -> SettingsBook {
    SettingsBook::new(
        vec![
            Setting::new("twoFactor", "Two-Factor Authentication", "Add an extra layer of security", true),
            Setting::new("biometric", "Biometric Login", "Use fingerprint or face recognition", false),
            Setting::new("loginAlerts", "Login Alerts", "Get notified of new device logins", true),
            Setting::new("autoLock", "Auto-Lock", "Lock app after 5 minutes of inactivity", true),
        ],
        vec![
            Setting::new("transactions", "Transaction Notifications", "Get notified of all transactions", true),
            Setting::new("marketing", "Marketing Updates", "Receive product updates and offers", false),
            Setting::new("security", "Security Alerts", "Important security notifications", true),
            Setting::new("monthly", "Monthly Statements", "Receive monthly account summaries", true),
        ],
    )
}

/// Check that a dataset's transfers have unique ids
pub fn validate_transfer_ids(dataset: &Dataset) -> FintrackResult<()> {
    let mut seen = std::collections::HashSet::new();
    for transfer in &dataset.transfers {
        if !seen.insert(transfer.id) {
            return Err(FintrackError::Validation(format!(
                "Duplicate transfer id {}",
                transfer.id
            )));
        }
    }
    Ok(())
}
