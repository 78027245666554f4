//! Display formatting for terminal output
//!
//! Provides utilities for formatting dashboard data for terminal display,
//! including registers, bar charts and status indicators.

pub mod report;
pub mod setting;
pub mod transfer;

pub use report::{format_bar, format_percentage, separator, truncate};
pub use setting::{format_setting_category, format_settings};
pub use transfer::{
    format_transfer_details, format_transfer_quote, format_transfer_register, format_transfer_row,
    format_transfer_stats,
};
