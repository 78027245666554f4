//! Insight period selector (3M / 6M / 12M)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FintrackError;

/// Trailing window of months shown by the insights view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsightPeriod {
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[default]
    #[serde(rename = "12M")]
    TwelveMonths,
}

impl InsightPeriod {
    /// All selectable periods, shortest first
    pub const ALL: [InsightPeriod; 3] = [
        InsightPeriod::ThreeMonths,
        InsightPeriod::SixMonths,
        InsightPeriod::TwelveMonths,
    ];

    /// Number of months covered
    pub const fn months(&self) -> usize {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
        }
    }

    /// The trailing `months()` records, or all of them when fewer exist
    pub fn window<'a, T>(&self, records: &'a [T]) -> &'a [T] {
        let start = records.len().saturating_sub(self.months());
        &records[start..]
    }
}

impl fmt::Display for InsightPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M", self.months())
    }
}

impl FromStr for InsightPeriod {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "3M" | "3" => Ok(Self::ThreeMonths),
            "6M" | "6" => Ok(Self::SixMonths),
            "12M" | "12" => Ok(Self::TwelveMonths),
            other => Err(FintrackError::Validation(format!(
                "Invalid period '{}'. Use 3M, 6M or 12M",
                other
            ))),
        }
    }
}
