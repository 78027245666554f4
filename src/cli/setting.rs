//! CLI commands for account settings

use crate::display::{format_setting_category, format_settings};
use crate::error::{FintrackError, FintrackResult};
use crate::models::SettingCategory;
use crate::storage::Dataset;
use clap::Subcommand;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingCommands {
    /// List settings, optionally for one category
    #[command(alias = "ls")]
    List {
        /// Category (security or notifications)
        category: Option<SettingCategory>,
    },

    /// Show a single setting
    Show {
        category: SettingCategory,
        id: String,
    },

    /// Flip a setting on or off (for this run only)
    Toggle {
        /// Category (security or notifications)
        category: SettingCategory,

        /// Setting ID (e.g. biometric)
        id: String,
    },
}

/// Handle settings commands
///
/// Takes the dataset by value: toggles apply to this in-memory copy and are
/// never written back.
pub fn handle_setting_command(mut dataset: Dataset, cmd: SettingCommands) -> FintrackResult<()> {
    match cmd {
        SettingCommands::List { category } => match category {
            Some(category) => print!("{}", format_setting_category(&dataset.settings, category)),
            None => print!("{}", format_settings(&dataset.settings)),
        },

        SettingCommands::Show { category, id } => {
            let setting = dataset
                .settings
                .get(category, &id)
                .ok_or_else(|| FintrackError::setting_not_found(format!("{}/{}", category, id)))?;
            println!("{} ({})", setting.label, setting.id);
            println!("  {}", setting.description);
            println!("  Enabled: {}", if setting.enabled { "yes" } else { "no" });
        }

        SettingCommands::Toggle { category, id } => {
            match dataset.settings.toggle(category, &id) {
                Some(enabled) => println!(
                    "{}/{} is now {}",
                    category,
                    id,
                    if enabled { "on" } else { "off" }
                ),
                None => println!("No setting '{}' in {}; nothing changed.", id, category),
            }
            println!();
            print!("{}", format_setting_category(&dataset.settings, category));
        }
    }

    Ok(())
}
