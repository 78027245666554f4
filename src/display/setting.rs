//! Settings display formatting

use crate::models::{SettingCategory, SettingsBook};

use super::report::separator;

/// Format one settings category with on/off markers
pub fn format_setting_category(book: &SettingsBook, category: SettingCategory) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", category.title()));
    output.push_str(&separator(60));
    output.push('\n');

    let settings = book.category(category);
    if settings.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    for setting in settings {
        let marker = if setting.enabled { "[on] " } else { "[off]" };
        output.push_str(&format!(
            "  {} {:<28} {}\n",
            marker, setting.label, setting.id
        ));
        if !setting.description.is_empty() {
            output.push_str(&format!("        {}\n", setting.description));
        }
    }

    output
}

/// Format every settings category
pub fn format_settings(book: &SettingsBook) -> String {
    SettingCategory::ALL
        .iter()
        .map(|c| format_setting_category(book, *c))
        .collect::<Vec<_>>()
        .join("\n")
}
