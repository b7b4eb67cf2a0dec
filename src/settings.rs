//! Settings manager
//!
//! [`SettingsManager`] ties the registry, the two store files and the
//! change notifier together and implements value resolution. Precedence,
//! highest first: exact-host override, wildcard domain override (most
//! specific pattern first), global value, built-in default. Effective
//! values are never cached; every read goes back to the files, so changes
//! made by other processes are visible on the next call.

use std::path::Path;

use url::Url;

use crate::error::{Error, Result};
use crate::ini_store::{GlobalStore, OverrideStore};
use crate::notifier::{ChangeEvent, ChangeNotifier, SubscriptionId};
use crate::registry::OptionRegistry;
use crate::scope::Scope;
use crate::types::{OptionDefinition, OptionId, OptionType, SettingValue};

pub(crate) const GLOBAL_FILE: &str = "otter.conf";
pub(crate) const OVERRIDE_FILE: &str = "override.ini";

/// The settings store of one profile directory
///
/// Reads take `&self` and never fail: unknown identifiers resolve to
/// `None` and unreadable store files degrade to defaults. Writes take
/// `&mut self`, validate the identifier and the value type, persist
/// atomically and then notify subscribers. The manager keeps no lock of
/// its own; callers that share it across threads wrap it in a `Mutex`.
///
/// # Example
///
/// ```rust
/// use otterconf::{SettingsManager, SettingValue, Url};
///
/// let dir = tempfile::tempdir()?;
/// let mut settings = SettingsManager::new(dir.path());
///
/// let home = settings.option_identifier("Browser/HomePage").unwrap();
/// settings.set_value(home, Some(SettingValue::from("https://otter-browser.org/")), None)?;
///
/// let url = Url::parse("https://mail.example.org/inbox")?;
/// assert_eq!(
///     settings.get_option_for_url(home, &url),
///     Some(SettingValue::from("https://otter-browser.org/"))
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SettingsManager {
    registry: OptionRegistry,
    globals: GlobalStore,
    overrides: OverrideStore,
    notifier: ChangeNotifier,
    has_wildcard_overrides: bool,
}

impl SettingsManager {
    /// Open the settings store of a profile directory
    ///
    /// Neither file needs to exist yet; they are created on first write.
    /// The override file is scanned once for wildcard sections so that
    /// wildcard matching can be skipped entirely on profiles that never
    /// use it.
    pub fn new(profile_dir: impl AsRef<Path>) -> Self {
        let profile_dir = profile_dir.as_ref();
        let overrides = OverrideStore::new(profile_dir.join(OVERRIDE_FILE));
        let has_wildcard_overrides = overrides.scopes().iter().any(|scope| scope.is_wildcard());

        SettingsManager {
            registry: OptionRegistry::new(),
            globals: GlobalStore::new(profile_dir.join(GLOBAL_FILE)),
            overrides,
            notifier: ChangeNotifier::new(),
            has_wildcard_overrides,
        }
    }

    /// Effective global value of an option
    ///
    /// The stored global value if present and decodable as the option's
    /// type, else the definition default. `None` only for identifiers that
    /// were never registered.
    pub fn get_option(&self, identifier: OptionId) -> Option<SettingValue> {
        let definition = self.registry.definition(identifier)?;
        let name = self.registry.name(identifier)?;

        if let Some(value) = self
            .globals
            .get(name)
            .and_then(|raw| SettingValue::from_ini_str(&raw, definition.kind))
        {
            return Some(value);
        }

        Some(definition.default_value.clone())
    }

    /// Effective value of an option for a page URL
    ///
    /// Resolves through the full precedence chain for the URL's scope.
    /// URLs without a usable host (`about:`, `data:`) resolve globally.
    pub fn get_option_for_url(&self, identifier: OptionId, url: &Url) -> Option<SettingValue> {
        match Scope::from_url(url) {
            Some(scope) => self.get_option_in_scope(identifier, &scope),
            None => self.get_option(identifier),
        }
    }

    /// Effective value of an option in an explicit scope
    ///
    /// An exact entry for the scope wins. Otherwise, if any wildcard
    /// section has ever been seen, the scope's wildcard patterns are
    /// probed most specific first (`a.example.org` probes
    /// `*.example.org`, then `*.org`; a bare domain is not covered by its
    /// own wildcard). Entries that do not decode as the option's type are
    /// skipped. Without any override the global resolution applies.
    pub fn get_option_in_scope(&self, identifier: OptionId, scope: &Scope) -> Option<SettingValue> {
        let definition = self.registry.definition(identifier)?;
        let name = self.registry.name(identifier)?;

        if let Some(value) = self
            .overrides
            .get(scope, name)
            .and_then(|raw| SettingValue::from_ini_str(&raw, definition.kind))
        {
            return Some(value);
        }

        if self.has_wildcard_overrides {
            for raw in self.overrides.probe(&scope.wildcard_candidates(), name) {
                if let Some(value) = SettingValue::from_ini_str(&raw, definition.kind) {
                    return Some(value);
                }
            }
        }

        self.get_option(identifier)
    }

    /// Write a value, globally or scoped to a URL's host
    ///
    /// With a URL that has a usable host this is an override write for
    /// that host (see [`set_override`](Self::set_override)); otherwise the
    /// global entry is written. A global write that would not change the
    /// currently resolved value is dropped without touching the file or
    /// notifying; `None` removes the global entry, reverting the option to
    /// its default, and notifies only if an entry was actually removed.
    /// String text and list items are stored with surrounding whitespace
    /// trimmed; the change event carries the stored form.
    pub fn set_value(
        &mut self,
        identifier: OptionId,
        value: Option<SettingValue>,
        url: Option<&Url>,
    ) -> Result<()> {
        match url.and_then(Scope::from_url) {
            Some(scope) => self.set_override(identifier, value, &scope),
            None => self.set_global(identifier, value),
        }
    }

    /// Write or remove one override entry in a scope
    ///
    /// This is the only way to write wildcard scopes, since `*.` patterns
    /// cannot be expressed as URLs. `Some` upserts the entry, `None`
    /// removes it. Scoped writes always notify, even when the stored value
    /// did not change.
    pub fn set_override(
        &mut self,
        identifier: OptionId,
        value: Option<SettingValue>,
        scope: &Scope,
    ) -> Result<()> {
        let value = normalized(value);
        let name = self.checked_name(identifier, value.as_ref())?;

        match &value {
            Some(value) => self.overrides.set(scope, &name, &value.to_string())?,
            None => {
                self.overrides.remove(scope, &name)?;
            }
        }

        if scope.is_wildcard() {
            self.has_wildcard_overrides = true;
        }

        self.notify(ChangeEvent {
            identifier,
            value,
            scope: Some(scope.clone()),
        });
        Ok(())
    }

    fn set_global(&mut self, identifier: OptionId, value: Option<SettingValue>) -> Result<()> {
        let value = normalized(value);
        let name = self.checked_name(identifier, value.as_ref())?;

        match &value {
            Some(new_value) => {
                if self.get_option(identifier).as_ref() == Some(new_value) {
                    return Ok(());
                }
                self.globals.set(&name, &new_value.to_string())?;
            }
            None => {
                if !self.globals.remove(&name)? {
                    return Ok(());
                }
            }
        }

        self.notify(ChangeEvent {
            identifier,
            value,
            scope: None,
        });
        Ok(())
    }

    /// Remove override entries for a URL's scope
    ///
    /// `None` drops every override of the scope; `Some(name)` removes one
    /// entry (symbolic name spellings are accepted). Removing something
    /// that does not exist is not an error, and removal does not notify.
    pub fn remove_override(&mut self, url: &Url, option: Option<&str>) -> Result<()> {
        match Scope::from_url(url) {
            Some(scope) => self.remove_override_in_scope(&scope, option),
            None => Ok(()),
        }
    }

    /// Remove override entries for an explicit scope
    pub fn remove_override_in_scope(&mut self, scope: &Scope, option: Option<&str>) -> Result<()> {
        match option {
            Some(name) => {
                let name = match self.registry.identifier(name) {
                    Some(identifier) => {
                        self.registry.name(identifier).unwrap_or(name).to_string()
                    }
                    None => name.to_string(),
                };
                self.overrides.remove(scope, &name)?;
            }
            None => {
                self.overrides.remove_scope(scope)?;
            }
        }
        Ok(())
    }

    /// Whether a URL's scope carries an override
    ///
    /// With `Some(identifier)` this asks for that exact scope+option
    /// entry; with `None` it asks whether the scope has any override at
    /// all. Only the exact scope section is consulted; wildcard patterns
    /// that would apply to the URL do not count.
    pub fn has_override(&self, url: &Url, identifier: Option<OptionId>) -> bool {
        match Scope::from_url(url) {
            Some(scope) => self.has_override_in_scope(&scope, identifier),
            None => false,
        }
    }

    /// Whether an explicit scope carries an override
    pub fn has_override_in_scope(&self, scope: &Scope, identifier: Option<OptionId>) -> bool {
        match identifier {
            Some(identifier) => match self.registry.name(identifier) {
                Some(name) => self.overrides.contains(scope, name),
                None => false,
            },
            None => self.overrides.has_scope(scope),
        }
    }

    /// Register a new option at runtime
    pub fn register_option(
        &mut self,
        name: &str,
        kind: OptionType,
        default_value: SettingValue,
        choices: &[&str],
    ) -> Result<OptionId> {
        self.registry.register(name, kind, default_value, choices)
    }

    /// Replace an option's default value and choices
    pub fn update_option_definition(
        &mut self,
        identifier: OptionId,
        default_value: SettingValue,
        choices: &[&str],
    ) -> Result<()> {
        self.registry.update(identifier, default_value, choices)
    }

    pub fn option_definition(&self, identifier: OptionId) -> Option<&OptionDefinition> {
        self.registry.definition(identifier)
    }

    pub fn option_name(&self, identifier: OptionId) -> Option<&str> {
        self.registry.name(identifier)
    }

    pub fn option_identifier(&self, name: &str) -> Option<OptionId> {
        self.registry.identifier(name)
    }

    /// All registered option names, sorted
    pub fn options(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Path of the global store file (`otter.conf`)
    pub fn global_path(&self) -> &Path {
        self.globals.path()
    }

    /// Path of the override store file (`override.ini`)
    pub fn override_path(&self) -> &Path {
        self.overrides.path()
    }

    /// Every scope that currently has override entries, sorted
    pub fn override_scopes(&self) -> Vec<Scope> {
        self.overrides.scopes()
    }

    /// Name/value pairs of one scope's overrides, sorted by name
    ///
    /// Values decode per the registered option type; entries whose name is
    /// not registered (or whose text does not decode) are returned as raw
    /// strings.
    pub fn overrides_in_scope(&self, scope: &Scope) -> Vec<(String, SettingValue)> {
        self.overrides
            .entries_in_scope(scope)
            .into_iter()
            .map(|(name, raw)| {
                let kind = self
                    .registry
                    .identifier(&name)
                    .and_then(|identifier| self.registry.definition(identifier))
                    .map_or(OptionType::String, |definition| definition.kind);

                let value = SettingValue::from_ini_str(&raw, kind)
                    .unwrap_or(SettingValue::String(raw));
                (name, value)
            })
            .collect()
    }

    /// Count of override entries per option name across all scopes
    pub(crate) fn override_counts(&self) -> std::collections::HashMap<String, usize> {
        self.overrides.name_counts()
    }

    /// Subscribe to change events; the handler runs synchronously on every
    /// notifying write until unsubscribed
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&ChangeEvent) + Send + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(handler)
    }

    /// Drop a subscription; returns whether it existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn checked_name(
        &self,
        identifier: OptionId,
        value: Option<&SettingValue>,
    ) -> Result<String> {
        let definition = self
            .registry
            .definition(identifier)
            .ok_or(Error::UnknownOption(identifier))?;
        let name = self
            .registry
            .name(identifier)
            .ok_or(Error::UnknownOption(identifier))?
            .to_string();

        if let Some(value) = value {
            if !definition.kind.accepts(value) {
                return Err(Error::ValueTypeMismatch {
                    option: name,
                    expected: definition.kind,
                    actual: value.type_name(),
                });
            }
        }

        Ok(name)
    }

    fn notify(&mut self, event: ChangeEvent) {
        self.notifier.notify(&event);
    }
}

/// Stored form of a value: string text and list items are trimmed, since
/// INI parsing does not keep surrounding whitespace
fn normalized(value: Option<SettingValue>) -> Option<SettingValue> {
    match value {
        Some(SettingValue::String(text)) => Some(SettingValue::String(text.trim().to_string())),
        Some(SettingValue::List(items)) => Some(SettingValue::List(
            items.into_iter().map(|item| item.trim().to_string()).collect(),
        )),
        other => other,
    }
}
