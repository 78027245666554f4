//! Transfer service
//!
//! Search and status filtering over a transfer list, summary statistics,
//! and validation/quoting of the new-transfer form.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    CurrencyCode, Money, StatusFilter, Transfer, TransferId, TransferStatus, SUPPORTED_CURRENCIES,
};

/// Search text plus status selector of the transfer list
#[derive(Debug, Clone, Default)]
pub struct TransferFilter {
    /// Case-insensitive substring matched against recipient and email
    pub search: String,
    pub status: StatusFilter,
}

impl TransferFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// Check if a transfer matches this filter
    pub fn matches(&self, transfer: &Transfer) -> bool {
        self.status.matches(transfer.status)
            && transfer.matches_search_lowercase(&self.search.to_lowercase())
    }
}

/// Totals across a transfer list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferStats {
    /// Sent amounts per source currency
    pub sent: BTreeMap<CurrencyCode, Money>,
    /// Received amounts per source currency
    pub received: BTreeMap<CurrencyCode, Money>,
    /// Fees per source currency
    pub fees: BTreeMap<CurrencyCode, Money>,
    /// Distinct destination countries
    pub countries: usize,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
}

impl TransferStats {
    pub fn total(&self) -> usize {
        self.completed + self.pending + self.failed
    }

    pub fn count(&self, status: TransferStatus) -> usize {
        match status {
            TransferStatus::Completed => self.completed,
            TransferStatus::Pending => self.pending,
            TransferStatus::Failed => self.failed,
        }
    }
}

/// Service over an in-memory transfer list
pub struct TransferService<'a> {
    transfers: &'a [Transfer],
}

impl<'a> TransferService<'a> {
    pub fn new(transfers: &'a [Transfer]) -> Self {
        Self { transfers }
    }

    /// Transfers matching `filter`, in list order
    ///
    /// No match is an empty list, never an error.
    pub fn filter(&self, filter: &TransferFilter) -> Vec<&'a Transfer> {
        let matched: Vec<&'a Transfer> = self
            .transfers
            .iter()
            .filter(|t| filter.matches(t))
            .collect();

        tracing::debug!(
            search = %filter.search,
            status = %filter.status,
            matched = matched.len(),
            total = self.transfers.len(),
            "filtered transfers"
        );
        matched
    }

    /// Find a transfer by id
    pub fn find(&self, id: TransferId) -> FintrackResult<&'a Transfer> {
        self.transfers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| FintrackError::transfer_not_found(id.to_string()))
    }

    /// Summary statistics over all transfers
    pub fn stats(&self) -> TransferStats {
        let mut stats = TransferStats::default();
        let mut countries = BTreeSet::new();

        for transfer in self.transfers {
            let bucket = if transfer.is_sent() {
                &mut stats.sent
            } else {
                &mut stats.received
            };
            *bucket
                .entry(transfer.source_currency.clone())
                .or_insert_with(Money::zero) += transfer.amount;
            *stats
                .fees
                .entry(transfer.source_currency.clone())
                .or_insert_with(Money::zero) += transfer.fee;

            countries.insert(transfer.country.as_str());

            match transfer.status {
                TransferStatus::Completed => stats.completed += 1,
                TransferStatus::Pending => stats.pending += 1,
                TransferStatus::Failed => stats.failed += 1,
            }
        }

        stats.countries = countries.len();
        stats
    }
}

/// The new-transfer form
#[derive(Debug, Clone)]
pub struct TransferDraft {
    pub recipient_email: String,
    pub amount: Money,
    pub currency: CurrencyCode,
    pub note: String,
}

/// Price of a draft at a given rate
#[derive(Debug, Clone, PartialEq)]
pub struct TransferQuote {
    pub amount: Money,
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub exchange_rate: f64,
    /// `amount * exchange_rate`, in the target currency
    pub converted_amount: Money,
    pub fee: Money,
    /// `amount + fee`, in the source currency
    pub total_debit: Money,
}

impl TransferDraft {
    pub fn new(
        recipient_email: impl Into<String>,
        amount: Money,
        currency: CurrencyCode,
        note: impl Into<String>,
    ) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            amount,
            currency,
            note: note.into(),
        }
    }

    /// Check the form fields
    pub fn validate(&self) -> FintrackResult<()> {
        let email = self.recipient_email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            }
            None => false,
        };
        if !valid_email {
            return Err(FintrackError::Validation(format!(
                "Invalid recipient email '{}'",
                self.recipient_email
            )));
        }

        if !self.amount.is_positive() {
            return Err(FintrackError::Validation(
                "Transfer amount must be greater than zero".into(),
            ));
        }

        if !self.currency.is_supported() {
            return Err(FintrackError::Validation(format!(
                "Unsupported currency {}. Use one of: {}",
                self.currency,
                SUPPORTED_CURRENCIES.join(", ")
            )));
        }

        Ok(())
    }

    /// Validate and price the draft
    pub fn quote(
        &self,
        target_currency: CurrencyCode,
        exchange_rate: f64,
        fee: Money,
    ) -> FintrackResult<TransferQuote> {
        self.validate()?;

        if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
            return Err(FintrackError::Validation(format!(
                "Exchange rate must be a positive number, got {}",
                exchange_rate
            )));
        }
        if fee.is_negative() {
            return Err(FintrackError::Validation("Fee cannot be negative".into()));
        }

        let total_debit = self.amount.checked_add(fee).ok_or_else(|| {
            FintrackError::Validation("Amount plus fee is too large".into())
        })?;

        Ok(TransferQuote {
            amount: self.amount,
            source_currency: self.currency.clone(),
            target_currency,
            exchange_rate,
            converted_amount: self.amount.convert(exchange_rate),
            fee,
            total_debit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Dataset;

    fn names(transfers: &[&Transfer]) -> Vec<String> {
        transfers.iter().map(|t| t.recipient.clone()).collect()
    }

    #[test]
    fn test_search_by_name() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        let result = service.filter(&TransferFilter::new("sarah", StatusFilter::All));
        assert_eq!(names(&result), vec!["Sarah Johnson"]);
    }

    #[test]
    fn test_status_only() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        let result = service.filter(&TransferFilter::new(
            "",
            StatusFilter::Only(TransferStatus::Failed),
        ));
        assert_eq!(names(&result), vec!["Yuki Tanaka"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        assert!(service
            .filter(&TransferFilter::new("zzz", StatusFilter::All))
            .is_empty());
    }

    #[test]
    fn test_search_matches_email_case_insensitive() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        let result = service.filter(&TransferFilter::new("COMPANY.COM", StatusFilter::All));
        assert_eq!(names(&result), vec!["Marcus Chen"]);
    }

    #[test]
    fn test_search_and_status_combine() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        let completed = StatusFilter::Only(TransferStatus::Completed);

        let result = service.filter(&TransferFilter::new("e", completed));
        assert_eq!(names(&result), vec!["Sarah Johnson", "Elena Rodriguez"]);

        let result = service.filter(&TransferFilter::new("yuki", completed));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_filter_keeps_order() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        let result = service.filter(&TransferFilter::default());
        assert_eq!(result.len(), data.transfers.len());
        assert_eq!(result[0].id, TransferId::new(1));
        assert_eq!(result[3].id, TransferId::new(4));
    }

    #[test]
    fn test_filter_matches_single() {
        let data = Dataset::sample();
        let filter = TransferFilter::new("tanaka", StatusFilter::All);
        assert!(filter.matches(&data.transfers[3]));
        assert!(!filter.matches(&data.transfers[0]));
    }

    #[test]
    fn test_find() {
        let data = Dataset::sample();
        let service = TransferService::new(&data.transfers);
        assert_eq!(service.find(TransferId::new(2)).unwrap().recipient, "Marcus Chen");
        assert!(service.find(TransferId::new(99)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_stats() {
        let data = Dataset::sample();
        let stats = TransferService::new(&data.transfers).stats();
        let usd = CurrencyCode::usd();
        let gbp = CurrencyCode::parse("GBP").unwrap();

        assert_eq!(stats.sent.get(&usd), Some(&Money::from_units(6450)));
        assert_eq!(stats.received.get(&gbp), Some(&Money::from_units(1840)));
        assert_eq!(stats.fees.get(&usd), Some(&Money::from_cents(3275)));
        assert_eq!(stats.countries, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_stats_empty() {
        let stats = TransferService::new(&[]).stats();
        assert_eq!(stats, TransferStats::default());
    }

    fn draft(email: &str, amount: i64, currency: &str) -> TransferDraft {
        TransferDraft::new(
            email,
            Money::from_units(amount),
            CurrencyCode::parse(currency).unwrap(),
            "",
        )
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft("recipient@email.com", 1000, "USD").validate().is_ok());
        assert!(draft("recipient.email.com", 1000, "USD").validate().is_err());
        assert!(draft("@email.com", 1000, "USD").validate().is_err());
        assert!(draft("a@b@c", 1000, "USD").validate().is_err());
        assert!(draft("a@b.com", 0, "USD").validate().is_err());
        assert!(draft("a@b.com", 10, "CHF").validate().is_err());
    }

    #[test]
    fn test_quote() {
        let quote = draft("sarah.j@email.com", 2500, "USD")
            .quote(
                CurrencyCode::parse("EUR").unwrap(),
                0.915,
                Money::from_cents(1250),
            )
            .unwrap();
        assert_eq!(quote.converted_amount, Money::from_cents(228750));
        assert_eq!(quote.total_debit, Money::from_cents(251250));
    }

    #[test]
    fn test_quote_rejects_bad_rate() {
        let d = draft("a@b.com", 10, "USD");
        let eur = CurrencyCode::parse("EUR").unwrap();
        assert!(d.quote(eur.clone(), 0.0, Money::zero()).is_err());
        assert!(d.quote(eur.clone(), f64::NAN, Money::zero()).is_err());
        assert!(d.quote(eur, 1.0, Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_quote_rejects_overflowing_total() {
        let d = TransferDraft::new("a@b.com", Money::from_cents(i64::MAX), CurrencyCode::usd(), "");
        let err = d
            .quote(CurrencyCode::eur(), 1.0, Money::from_cents(1))
            .unwrap_err();
        assert!(err.is_validation());
    }
}
