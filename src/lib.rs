//! fintrack - data kernel of a personal finance dashboard
//!
//! This library computes the figures behind three dashboard views:
//! financial insights (monthly totals, growth, savings rate and the expense
//! pie), international transfers (search, status filter, stats and quotes),
//! and account settings (security and notification toggles).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (monthly records, transfers, settings, etc.)
//! - `reports`: Derived metrics (insights aggregates, pie geometry)
//! - `services`: Transfer filtering, stats and quoting
//! - `storage`: Sample data and read-only JSON/CSV input
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust
//! use fintrack::models::InsightPeriod;
//! use fintrack::reports::InsightsReport;
//! use fintrack::storage::Dataset;
//!
//! let data = Dataset::sample();
//! let report = InsightsReport::generate(&data.monthly, InsightPeriod::TwelveMonths);
//! assert_eq!(report.total_profit, report.total_income - report.total_expenses);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
