//! Error types for the settings store and its operations
//!
//! This module defines the error types used throughout the otterconf library.
//! All fallible public functions return [`Result<T, Error>`] for consistent
//! error handling. Read paths (value resolution) never fail: unknown
//! identifiers yield `None` and unreadable store files degrade to defaults,
//! so only write, registration and discovery operations produce errors.

use std::path::PathBuf;

use crate::types::{OptionId, OptionType};

/// Errors that can occur while registering options or writing settings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while writing a backing store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A backing store file exists but is not valid INI; the write was
    /// refused rather than overwriting whatever the file holds
    #[error("Cannot rewrite {}: existing file does not parse as INI: {message}", path.display())]
    StoreParse { path: PathBuf, message: String },

    /// Write or update addressed to an identifier that is not registered
    #[error("Unknown option identifier {0}")]
    UnknownOption(OptionId),

    /// Registration of a name that already maps to an identifier
    #[error("Option '{0}' is already registered")]
    DuplicateOption(String),

    /// Registration with an empty option name
    #[error("Option name must not be empty")]
    EmptyOptionName,

    /// A value whose variant does not match the option's declared type
    #[error("Option '{option}' expects a {expected} value, got {actual}")]
    ValueTypeMismatch {
        option: String,
        expected: OptionType,
        actual: &'static str,
    },

    /// Invalid glob pattern in an option-name query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),

    /// No Otter profile directory could be located
    #[error("No Otter profile directory found (searched: {searched:?})")]
    ProfileNotFound { searched: Vec<PathBuf> },

    /// An explicitly requested profile directory does not exist
    #[error("Invalid profile directory: {}", .0.display())]
    InvalidProfileDirectory(PathBuf),
}

/// Result type alias for convenience
///
/// All fallible public functions in the otterconf library return this type
/// alias for consistent error handling.
///
/// # Example
///
/// ```rust
/// use otterconf::{Result, OptionType, SettingValue, SettingsManager};
///
/// fn register_homepage_mirror(settings: &mut SettingsManager) -> Result<()> {
///     settings.register_option(
///         "Sync/HomePageMirror",
///         OptionType::String,
///         SettingValue::from(""),
///         &[],
///     )?;
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;
