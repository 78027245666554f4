//! Core data models for fintrack
//!
//! This module contains the plain data rows the dashboard is built from:
//! monthly figures, expense categories, transfers and settings.

pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;
pub mod monthly;
pub mod period;
pub mod setting;
pub mod transfer;

pub use currency::{CurrencyCode, SUPPORTED_CURRENCIES};
pub use expense::ExpenseCategory;
pub use ids::{SettingId, TransferId};
pub use money::{Money, MoneyParseError};
pub use monthly::MonthlyRecord;
pub use period::InsightPeriod;
pub use setting::{Setting, SettingCategory, SettingsBook};
pub use transfer::{StatusFilter, Transfer, TransferDirection, TransferStatus};
