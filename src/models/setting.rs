//! Toggleable account settings
//!
//! Settings are grouped by category (security, notifications). The only
//! mutation is flipping a single setting's `enabled` flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::SettingId;
use crate::error::FintrackError;

/// Category key a setting is grouped under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    Security,
    Notifications,
}

impl SettingCategory {
    pub const ALL: [SettingCategory; 2] = [Self::Security, Self::Notifications];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Notifications => "notifications",
        }
    }

    /// Heading used when listing the category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Security => "Security Settings",
            Self::Notifications => "Notification Preferences",
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingCategory {
    type Err = FintrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "security" => Ok(Self::Security),
            "notifications" | "notification" => Ok(Self::Notifications),
            other => Err(FintrackError::Validation(format!(
                "Invalid setting category '{}'. Use security or notifications",
                other
            ))),
        }
    }
}

/// A single on/off setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: SettingId,
    pub label: String,
    pub description: String,
    pub enabled: bool,
}

impl Setting {
    pub fn new(
        id: impl Into<SettingId>,
        label: impl Into<String>,
        description: impl Into<String>,
        enabled: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            enabled,
        }
    }
}

/// All toggleable settings, keyed by category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsBook {
    #[serde(default)]
    pub security: Vec<Setting>,
    #[serde(default)]
    pub notifications: Vec<Setting>,
}

impl SettingsBook {
    pub fn new(security: Vec<Setting>, notifications: Vec<Setting>) -> Self {
        Self {
            security,
            notifications,
        }
    }

    /// Settings of one category, in display order
    pub fn category(&self, category: SettingCategory) -> &[Setting] {
        match category {
            SettingCategory::Security => &self.security,
            SettingCategory::Notifications => &self.notifications,
        }
    }

    fn category_mut(&mut self, category: SettingCategory) -> &mut Vec<Setting> {
        match category {
            SettingCategory::Security => &mut self.security,
            SettingCategory::Notifications => &mut self.notifications,
        }
    }

    /// Look up a setting by category and id
    pub fn get(&self, category: SettingCategory, id: &str) -> Option<&Setting> {
        self.category(category).iter().find(|s| s.id == *id)
    }

    /// Flip the `enabled` flag of the matching setting
    ///
    /// Returns the new value, or `None` when no setting in `category` has
    /// that id. An unknown id leaves the book untouched.
    pub fn toggle(&mut self, category: SettingCategory, id: &str) -> Option<bool> {
        let setting = self
            .category_mut(category)
            .iter_mut()
            .find(|s| s.id == *id)?;
        setting.enabled = !setting.enabled;
        tracing::debug!(%category, id, enabled = setting.enabled, "toggled setting");
        Some(setting.enabled)
    }

    /// Number of enabled settings in a category
    pub fn enabled_count(&self, category: SettingCategory) -> usize {
        self.category(category).iter().filter(|s| s.enabled).count()
    }
}
