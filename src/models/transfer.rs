//! International transfer model
//!
//! Represents a sent or received cross-currency transfer together with its
//! conversion details and processing status.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency::CurrencyCode;
use super::ids::TransferId;
use super::money::Money;
use crate::error::FintrackError;

/// Which way the money moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferDirection {
    Sent,
    Received,
}

impl TransferDirection {
    /// Sign shown next to the amount in a register
    pub fn sign(&self) -> char {
        match self {
            Self::Sent => '-',
            Self::Received => '+',
        }
    }
}

impl fmt::Display for TransferDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Received => write!(f, "received"),
        }
    }
}

/// Processing status of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferStatus {
    Completed,
    Pending,
    Failed,
}

impl TransferStatus {
    pub const ALL: [TransferStatus; 3] = [Self::Completed, Self::Pending, Self::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(FintrackError::Validation(format!(
                "Invalid transfer status '{}'. Use completed, pending or failed",
                other
            ))),
        }
    }
}

/// Status selector of the transfer list: everything, or a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TransferStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: TransferStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<TransferStatus>()
            .map(Self::Only)
            .map_err(|_| {
                FintrackError::Validation(format!(
                    "Invalid status filter '{}'. Use all, completed, pending or failed",
                    s.trim()
                ))
            })
    }
}

/// A cross-currency transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: TransferId,
    #[serde(alias = "type")]
    pub direction: TransferDirection,
    /// Counterparty display name
    pub recipient: String,
    pub email: String,
    /// Amount in the source currency
    pub amount: Money,
    #[serde(alias = "currency")]
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    /// Amount in the target currency
    pub converted_amount: Money,
    pub status: TransferStatus,
    pub date: NaiveDate,
    /// Wall-clock time, written as `HH:MM`
    #[serde(with = "wall_clock")]
    pub time: NaiveTime,
    /// Fee charged in the source currency
    pub fee: Money,
    /// Target units per source unit
    pub exchange_rate: f64,
    pub country: String,
}

impl Transfer {
    pub fn is_sent(&self) -> bool {
        self.direction == TransferDirection::Sent
    }

    /// Case-insensitive substring match on recipient name or email.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search_lowercase(&self, needle: &str) -> bool {
        self.recipient.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }

    /// Conversion implied by amount and rate, for checking supplied data
    pub fn implied_conversion(&self) -> Money {
        self.amount.convert(self.exchange_rate)
    }
}

/// `HH:MM` (or `HH:MM:SS`) time of day
mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|_| serde::de::Error::custom(format!("invalid time '{}', expected HH:MM", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("Failed".parse::<TransferStatus>().unwrap(), TransferStatus::Failed);
        assert!("done".parse::<TransferStatus>().is_err());
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "pending".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(TransferStatus::Pending)
        );
        let err = "sent".parse::<StatusFilter>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(TransferStatus::Failed));
        assert!(StatusFilter::Only(TransferStatus::Failed).matches(TransferStatus::Failed));
        assert!(!StatusFilter::Only(TransferStatus::Failed).matches(TransferStatus::Pending));
    }

    #[test]
    fn test_deserialize_dashboard_row() {
        let row = r#"{
            "id": 1,
            "type": "sent",
            "recipient": "Sarah Johnson",
            "email": "sarah.j@email.com",
            "amount": 2500,
            "currency": "USD",
            "targetCurrency": "EUR",
            "convertedAmount": 2287.50,
            "status": "completed",
            "date": "2024-01-15",
            "time": "14:30",
            "fee": 12.50,
            "exchangeRate": 0.915,
            "country": "Germany",
            "flag": "DE"
        }"#;
        let transfer: Transfer = serde_json::from_str(row).unwrap();
        assert_eq!(transfer.id, TransferId::new(1));
        assert_eq!(transfer.direction, TransferDirection::Sent);
        assert_eq!(transfer.amount, Money::from_units(2500));
        assert_eq!(transfer.source_currency, CurrencyCode::usd());
        assert_eq!(transfer.converted_amount, Money::from_cents(228750));
        assert_eq!(transfer.fee, Money::from_cents(1250));
        assert_eq!(transfer.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
        assert_eq!(transfer.converted_amount, transfer.implied_conversion());
    }

    #[test]
    fn test_serialize_uses_camel_case_and_short_time() {
        let row = r#"{"id": 2, "direction": "received", "recipient": "Marcus Chen",
            "email": "m@c.com", "amount": 1840, "sourceCurrency": "GBP",
            "targetCurrency": "USD", "convertedAmount": 2324.16, "status": "pending",
            "date": "2024-01-15", "time": "12:15:00", "fee": 8.75,
            "exchangeRate": 1.263, "country": "United Kingdom"}"#;
        let transfer: Transfer = serde_json::from_str(row).unwrap();
        let value = serde_json::to_value(&transfer).unwrap();
        assert_eq!(value["sourceCurrency"], "GBP");
        assert_eq!(value["convertedAmount"], 2324.16);
        assert_eq!(value["time"], "12:15");
        assert!(value.get("source_currency").is_none());
    }

    #[test]
    fn test_rejects_bad_time() {
        let row = r#"{"id": 3, "type": "sent", "recipient": "x", "email": "x@y.z",
            "amount": 1, "currency": "USD", "targetCurrency": "EUR",
            "convertedAmount": 1, "status": "failed", "date": "2024-01-15",
            "time": "25:99", "fee": 0, "exchangeRate": 1.0, "country": "Spain"}"#;
        assert!(serde_json::from_str::<Transfer>(row).is_err());
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&TransferDirection::Received).unwrap();
        assert_eq!(json, "\"received\"");
        assert_eq!(TransferDirection::Sent.sign(), '-');
    }
}
