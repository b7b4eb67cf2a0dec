//! # otterconf - Otter Browser settings store
//!
//! This library reads, resolves and edits the settings of an Otter Browser
//! profile: the global `otter.conf` file and the per-site `override.ini`
//! file. It carries the complete built-in option catalog, so a fresh
//! profile already resolves every option to a typed default.
//!
//! ## Features
//!
//! - Complete built-in option schema (about 170 typed options) plus runtime
//!   registration of custom options
//! - Typed values: booleans, integers, strings, colors, fonts, paths,
//!   string lists and constrained enumerations
//! - Per-site overrides with wildcard domain patterns (`*.example.org`) and
//!   deterministic precedence: exact host, most specific wildcard, global
//!   value, built-in default
//! - Atomic store writes; missing or unreadable files degrade to defaults
//!   instead of failing reads
//! - Synchronous change notification for every effective write
//! - Option-name filtering by glob patterns (e.g. `"Network/*"`)
//! - Diagnostic report matching the browser's own `--report` output
//!
//! ## Quick Start
//!
//! ### Resolving and writing values
//!
//! ```rust
//! use otterconf::{SettingsManager, SettingValue, Url};
//!
//! let profile = tempfile::tempdir()?;
//! let mut settings = SettingsManager::new(profile.path());
//!
//! // Every built-in option resolves to its default on a fresh profile
//! let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();
//! assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));
//!
//! // Global write
//! settings.set_value(zoom, Some(SettingValue::Int(125)), None)?;
//!
//! // Per-site override for one host
//! let url = Url::parse("https://mail.example.org/")?;
//! settings.set_value(zoom, Some(SettingValue::Int(80)), Some(&url))?;
//!
//! assert_eq!(settings.get_option_for_url(zoom, &url), Some(SettingValue::Int(80)));
//! assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(125)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Wildcard domain overrides
//!
//! ```rust
//! use otterconf::{Scope, SettingsManager, SettingValue, Url};
//!
//! let profile = tempfile::tempdir()?;
//! let mut settings = SettingsManager::new(profile.path());
//! let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();
//!
//! // Wildcard scopes cannot be expressed as URLs; write them through a Scope
//! settings.set_override(zoom, Some(SettingValue::Int(120)), &Scope::new("*.example.org"))?;
//!
//! let sub = Url::parse("https://news.example.org/")?;
//! assert_eq!(settings.get_option_for_url(zoom, &sub), Some(SettingValue::Int(120)));
//!
//! // The bare domain is not covered by its own wildcard
//! let bare = Url::parse("https://example.org/")?;
//! assert_eq!(settings.get_option_for_url(zoom, &bare), Some(SettingValue::Int(100)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Registering custom options
//!
//! ```rust
//! use otterconf::{OptionType, SettingsManager, SettingValue};
//!
//! let profile = tempfile::tempdir()?;
//! let mut settings = SettingsManager::new(profile.path());
//!
//! let sync = settings.register_option(
//!     "Backends/Sync",
//!     OptionType::Enumeration,
//!     SettingValue::from("none"),
//!     &["none", "file", "server"],
//! )?;
//!
//! assert_eq!(settings.get_option(sync), Some(SettingValue::from("none")));
//! assert_eq!(settings.option_name(sync), Some("Backends/Sync"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Watching for changes
//!
//! ```rust
//! use otterconf::{SettingsManager, SettingValue};
//! use std::sync::{Arc, Mutex};
//!
//! let profile = tempfile::tempdir()?;
//! let mut settings = SettingsManager::new(profile.path());
//! let home = settings.option_identifier("Browser/HomePage").unwrap();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! settings.subscribe(move |event| sink.lock().unwrap().push(event.identifier));
//!
//! settings.set_value(home, Some(SettingValue::from("https://otter-browser.org/")), None)?;
//! assert_eq!(*seen.lock().unwrap(), vec![home]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Querying option names
//!
//! ```rust
//! use otterconf::{query_options, SettingsManager};
//!
//! let profile = tempfile::tempdir()?;
//! let settings = SettingsManager::new(profile.path());
//!
//! let network = query_options(&settings.options(), &["Network/*"])?;
//! assert!(network.contains(&"Network/UserAgent".to_string()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Working with profiles
//!
//! ```rust,no_run
//! use otterconf::{find_profile_dir, SettingsManager};
//!
//! let info = find_profile_dir(None)?;
//! println!("Profile: {}", info.path.display());
//!
//! let settings = SettingsManager::new(&info.path);
//! println!("{} options registered", settings.options().len());
//! # Ok::<(), otterconf::Error>(())
//! ```
//!
//! ## File Layout
//!
//! Settings live in two INI files inside the profile directory:
//!
//! - `otter.conf` - global values; `Browser/HomePage` is stored as key
//!   `HomePage` under `[Browser]`
//! - `override.ini` - per-site values; one section per host or wildcard
//!   pattern, keyed by full option names
//!
//! ## Error Handling
//!
//! Reads never fail: an unknown identifier resolves to `None` and a
//! missing or unreadable store file behaves as an empty one. Write,
//! registration and discovery operations return [`Result<T, Error>`]:
//!
//! ```rust
//! use otterconf::{Error, SettingsManager, SettingValue};
//!
//! let profile = tempfile::tempdir().unwrap();
//! let mut settings = SettingsManager::new(profile.path());
//! let home = settings.option_identifier("Browser/HomePage").unwrap();
//!
//! match settings.set_value(home, Some(SettingValue::Bool(true)), None) {
//!     Err(Error::ValueTypeMismatch { option, expected, .. }) => {
//!         eprintln!("{} expects a {} value", option, expected);
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! ## See Also
//!
//! - [Otter Browser](https://otter-browser.org/)
//! - [QSettings INI format](https://doc.qt.io/qt-5/qsettings.html), which
//!   the store files follow

// Re-export all public types at crate root
pub use notifier::{ChangeEvent, SubscriptionId};
pub use registry::OptionRegistry;
pub use scope::Scope;
pub use settings::SettingsManager;
pub use types::{OptionDefinition, OptionFlags, OptionId, OptionType, SettingValue};

// Re-export error types
pub use error::{Error, Result};

// Re-export profile types
pub use profile::ProfileInfo;

// Re-export all public functions at crate root
pub use profile::find_profile_dir;
pub use query::query_options;
pub use report::generate_report;

// URLs appear throughout the public API; callers need the type to build them
pub use url::Url;

// All modules are private - use re-exports above for public API
mod error;
mod ini_store;
mod notifier;
mod profile;
mod query;
mod registry;
mod report;
mod schema;
mod scope;
mod settings;
mod types;
