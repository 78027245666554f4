//! Strongly-typed ID wrappers
//!
//! Newtype wrappers keep transfer numbers and setting keys from being mixed
//! up with plain integers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(u64);

impl TransferId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tr-{}", self.0)
    }
}

impl FromStr for TransferId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("tr-").unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

/// Stable key of a toggleable setting (e.g. `twoFactor`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingId(String);

impl SettingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SettingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<str> for SettingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_id_display_and_parse() {
        let id = TransferId::new(4);
        assert_eq!(id.to_string(), "tr-4");
        assert_eq!("tr-4".parse::<TransferId>().unwrap(), id);
        assert_eq!("4".parse::<TransferId>().unwrap(), id);
        assert!("tr-x".parse::<TransferId>().is_err());
    }

    #[test]
    fn test_setting_id_serialization() {
        let id = SettingId::new("twoFactor");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"twoFactor\"");
        assert!(id == *"twoFactor");
    }
}
