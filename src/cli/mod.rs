//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report and service layers.

pub mod expenses;
pub mod export;
pub mod insights;
pub mod setting;
pub mod transfer;

pub use expenses::{handle_expenses_command, ExpensesArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use insights::{handle_insights_command, InsightsArgs};
pub use setting::{handle_setting_command, SettingCommands};
pub use transfer::{handle_transfer_command, TransferCommands};
