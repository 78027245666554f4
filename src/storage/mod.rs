//! Data input layer for fintrack
//!
//! Provides the built-in sample dataset and read-only loading of host data
//! from JSON and CSV files.

pub mod dataset;
pub mod file_io;
pub mod import;

pub use dataset::{validate_transfer_ids, Dataset};
pub use file_io::read_json_required;
pub use import::{read_monthly_csv, read_monthly_csv_file};
