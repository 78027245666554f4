//! CSV import of monthly figures
//!
//! Expected columns: `month,income,expenses[,profit]` with a header row.
//! Amounts accept the same formats as [`Money::parse`]. When the profit
//! column is missing or blank it is derived from income and expenses.

use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, MonthlyRecord};

/// Read monthly records from a CSV reader
pub fn read_monthly_csv<R: Read>(reader: R) -> FintrackResult<Vec<MonthlyRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = row.map_err(|e| FintrackError::Import(format!("Line {}: {}", line, e)))?;
        records.push(parse_row(&row, line)?);
    }

    tracing::debug!(rows = records.len(), "imported monthly records");
    Ok(records)
}

/// Read monthly records from a CSV file
pub fn read_monthly_csv_file<P: AsRef<Path>>(path: P) -> FintrackResult<Vec<MonthlyRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| FintrackError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    read_monthly_csv(file)
}

fn parse_row(row: &StringRecord, line: usize) -> FintrackResult<MonthlyRecord> {
    let month = row
        .get(0)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| FintrackError::Import(format!("Line {}: missing month", line)))?;

    let income = parse_amount(row, 1, "income", line)?;
    let expenses = parse_amount(row, 2, "expenses", line)?;

    match row.get(3).map(str::trim).filter(|p| !p.is_empty()) {
        Some(_) => {
            let profit = parse_amount(row, 3, "profit", line)?;
            Ok(MonthlyRecord::with_profit(month, income, expenses, profit))
        }
        None => Ok(MonthlyRecord::new(month, income, expenses)),
    }
}

fn parse_amount(row: &StringRecord, column: usize, name: &str, line: usize) -> FintrackResult<Money> {
    let raw = row
        .get(column)
        .ok_or_else(|| FintrackError::Import(format!("Line {}: missing {}", line, name)))?;
    Money::parse(raw).map_err(|e| FintrackError::Import(format!("Line {}: {}: {}", line, name, e)))
}
