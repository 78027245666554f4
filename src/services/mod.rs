//! Service layer for fintrack
//!
//! The service layer provides filtering, statistics and form validation on
//! top of the in-memory record collections.

pub mod transfer;

pub use transfer::{TransferDraft, TransferFilter, TransferQuote, TransferService, TransferStats};
