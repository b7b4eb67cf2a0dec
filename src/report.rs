//! Diagnostic report
//!
//! A plain-text summary of the whole option catalog, matching the layout
//! Otter Browser prints on `otter-browser --report`: one tab-indented line
//! per option with the name padded to 50 columns and three 20-column
//! fields after it.

use crate::settings::SettingsManager;
use crate::types::OptionType;

/// Render the settings report
///
/// Each line shows the option's default value (a `-` placeholder for
/// string- and path-typed options, whose defaults are usually empty or
/// machine-specific), whether the current global value still equals the
/// default, and in how many scopes the option is overridden. Read-only.
///
/// # Example
///
/// ```rust
/// use otterconf::{generate_report, SettingsManager};
///
/// let dir = tempfile::tempdir()?;
/// let settings = SettingsManager::new(dir.path());
///
/// let report = generate_report(&settings);
/// assert!(report.starts_with("Settings:\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn generate_report(settings: &SettingsManager) -> String {
    let override_counts = settings.override_counts();
    let mut report = String::from("Settings:\n");

    for name in settings.options() {
        let Some(identifier) = settings.option_identifier(&name) else {
            continue;
        };
        let Some(definition) = settings.option_definition(identifier) else {
            continue;
        };

        let default_text = match definition.kind {
            OptionType::String | OptionType::Path => "-".to_string(),
            _ => definition.default_value.to_string(),
        };

        let state = if settings.get_option(identifier).as_ref() == Some(&definition.default_value)
        {
            "default"
        } else {
            "non default"
        };

        let overrides = match override_counts.get(&name) {
            Some(count) => format!("{} override(s)", count),
            None => "no overrides".to_string(),
        };

        report.push_str(&format!(
            "\t{:<50}{:<20}{:<20}{:<20}\n",
            name, default_text, state, overrides
        ));
    }

    report.push('\n');
    report
}
