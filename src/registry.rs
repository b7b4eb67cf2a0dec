//! Option registry
//!
//! The registry is the catalog of every known option: the built-in schema
//! plus anything registered at runtime. It owns the bidirectional mapping
//! between canonical names (`Browser/HomePage`) and numeric identifiers,
//! which are positions in the definition table and stay valid for the
//! process lifetime.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::schema::{SchemaEntry, BUILT_IN_OPTIONS};
use crate::types::{OptionDefinition, OptionFlags, OptionId, OptionType, SettingValue};

/// Catalog of option definitions with name and identifier lookup
///
/// # Example
///
/// ```rust
/// use otterconf::{OptionRegistry, OptionType, SettingValue};
///
/// let mut registry = OptionRegistry::new();
///
/// let id = registry.identifier("Browser/HomePage").unwrap();
/// assert_eq!(registry.name(id), Some("Browser/HomePage"));
///
/// let custom = registry.register(
///     "Backends/Sync",
///     OptionType::String,
///     SettingValue::from("none"),
///     &[],
/// )?;
/// assert_eq!(registry.definition(custom).unwrap().default_value.as_str(), Some("none"));
/// # Ok::<(), otterconf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    definitions: Vec<OptionDefinition>,
    names: Vec<String>,
    by_name: HashMap<String, OptionId>,
}

impl OptionRegistry {
    /// Build a registry holding the full built-in schema
    ///
    /// Identifiers of built-in options are their schema positions. The
    /// `Paths/*` defaults are machine-dependent and resolved here from the
    /// platform's download and home directories.
    pub fn new() -> Self {
        let mut registry = OptionRegistry {
            definitions: Vec::with_capacity(BUILT_IN_OPTIONS.len()),
            names: Vec::with_capacity(BUILT_IN_OPTIONS.len()),
            by_name: HashMap::with_capacity(BUILT_IN_OPTIONS.len()),
        };

        for entry in BUILT_IN_OPTIONS {
            let identifier = OptionId(registry.definitions.len());

            registry.definitions.push(OptionDefinition {
                identifier,
                kind: entry.kind,
                default_value: built_in_default(entry),
                choices: entry.choices.iter().map(|s| s.to_string()).collect(),
                flags: OptionFlags::BUILT_IN,
            });
            registry.names.push(entry.name.to_string());
            registry.by_name.insert(entry.name.to_string(), identifier);
        }

        registry
    }

    /// Register a new option at runtime
    ///
    /// The name is stored verbatim as the option's canonical name. Fails
    /// with [`Error::EmptyOptionName`] for an empty name,
    /// [`Error::DuplicateOption`] if the name (or its normalized form)
    /// already maps to an identifier, and [`Error::ValueTypeMismatch`] if
    /// the default does not match the declared type. The registry is left
    /// unchanged on any failure; a successful registration is permanent.
    pub fn register(
        &mut self,
        name: &str,
        kind: OptionType,
        default_value: SettingValue,
        choices: &[&str],
    ) -> Result<OptionId> {
        if name.is_empty() {
            return Err(Error::EmptyOptionName);
        }
        if self.identifier(name).is_some() {
            return Err(Error::DuplicateOption(name.to_string()));
        }
        if !kind.accepts(&default_value) {
            return Err(Error::ValueTypeMismatch {
                option: name.to_string(),
                expected: kind,
                actual: default_value.type_name(),
            });
        }

        let identifier = OptionId(self.definitions.len());

        self.definitions.push(OptionDefinition {
            identifier,
            kind,
            default_value,
            choices: choices.iter().map(|s| s.to_string()).collect(),
            flags: OptionFlags::CUSTOM,
        });
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), identifier);

        Ok(identifier)
    }

    /// Replace an option's default value and choices, keeping its type
    pub fn update(
        &mut self,
        identifier: OptionId,
        default_value: SettingValue,
        choices: &[&str],
    ) -> Result<()> {
        let definition = self
            .definitions
            .get_mut(identifier.0)
            .ok_or(Error::UnknownOption(identifier))?;

        if !definition.kind.accepts(&default_value) {
            return Err(Error::ValueTypeMismatch {
                option: self.names[identifier.0].clone(),
                expected: definition.kind,
                actual: default_value.type_name(),
            });
        }

        definition.default_value = default_value;
        definition.choices = choices.iter().map(|s| s.to_string()).collect();
        Ok(())
    }

    /// Definition for an identifier, or `None` if it was never registered
    pub fn definition(&self, identifier: OptionId) -> Option<&OptionDefinition> {
        self.definitions.get(identifier.0)
    }

    /// Canonical name for an identifier
    pub fn name(&self, identifier: OptionId) -> Option<&str> {
        self.names.get(identifier.0).map(|name| name.as_str())
    }

    /// Identifier for a name
    ///
    /// Tries the name verbatim first, then its normalized form, so the
    /// symbolic spelling `Browser_HomePageOption` finds `Browser/HomePage`.
    pub fn identifier(&self, name: &str) -> Option<OptionId> {
        if let Some(&identifier) = self.by_name.get(name) {
            return Some(identifier);
        }

        self.by_name.get(canonicalize(name).as_str()).copied()
    }

    /// All canonical names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }

    /// Number of registered options
    pub fn count(&self) -> usize {
        self.definitions.len()
    }
}

impl Default for OptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form of a symbolic option name: underscores become the
/// hierarchy separator and a trailing `Option` marker is dropped
fn canonicalize(name: &str) -> String {
    let canonical = name.replace('_', "/");

    match canonical.strip_suffix("Option") {
        Some(stripped) => stripped.to_string(),
        None => canonical,
    }
}

fn built_in_default(entry: &SchemaEntry) -> SettingValue {
    let dir = match entry.name {
        "Paths/Downloads" | "Paths/SaveFile" => dirs::download_dir(),
        "Paths/OpenFile" => dirs::home_dir(),
        _ => None,
    };

    match dir {
        Some(path) => SettingValue::String(path.to_string_lossy().into_owned()),
        None => entry.default.to_value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_ins_occupy_schema_positions() {
        let registry = OptionRegistry::new();

        assert_eq!(registry.count(), BUILT_IN_OPTIONS.len());
        assert_eq!(
            registry.identifier("AddressField/CompletionDisplayMode"),
            Some(OptionId(0))
        );
        assert_eq!(registry.name(OptionId(0)), Some("AddressField/CompletionDisplayMode"));

        let definition = registry.definition(OptionId(0)).unwrap();
        assert!(definition.flags.built_in);
        assert_eq!(definition.kind, OptionType::Enumeration);
    }

    #[test]
    fn test_name_identifier_bijection() {
        let registry = OptionRegistry::new();

        for index in 0..registry.count() {
            let identifier = OptionId(index);
            let name = registry.name(identifier).unwrap();
            assert_eq!(registry.identifier(name), Some(identifier));
        }
    }

    #[test]
    fn test_symbolic_names_normalize() {
        let registry = OptionRegistry::new();

        assert_eq!(
            registry.identifier("Browser_HomePageOption"),
            registry.identifier("Browser/HomePage")
        );
        assert_eq!(
            registry.identifier("Sessions_OptionsExludedFromSavingOption"),
            registry.identifier("Sessions/OptionsExludedFromSaving")
        );
        assert_eq!(registry.identifier("No/Such/Thing"), None);
    }

    #[test]
    fn test_register_appends_after_built_ins() {
        let mut registry = OptionRegistry::new();
        let before = registry.count();

        let identifier = registry
            .register("Custom/Feature", OptionType::Boolean, SettingValue::Bool(true), &[])
            .unwrap();

        assert_eq!(identifier.index(), before);
        assert_eq!(registry.count(), before + 1);
        assert_eq!(registry.identifier("Custom/Feature"), Some(identifier));

        let definition = registry.definition(identifier).unwrap();
        assert!(!definition.flags.built_in);
        assert!(definition.flags.enabled);
        assert!(definition.flags.visible);
    }

    #[test]
    fn test_duplicate_registration_fails_and_leaves_registry_unchanged() {
        let mut registry = OptionRegistry::new();
        let before = registry.count();

        let duplicate = registry.register(
            "Browser/HomePage",
            OptionType::String,
            SettingValue::from(""),
            &[],
        );
        assert!(matches!(duplicate, Err(Error::DuplicateOption(_))));

        // Symbolic spelling of an existing option is the same option
        let symbolic = registry.register(
            "Browser_HomePageOption",
            OptionType::String,
            SettingValue::from(""),
            &[],
        );
        assert!(matches!(symbolic, Err(Error::DuplicateOption(_))));

        assert_eq!(registry.count(), before);
    }

    #[test]
    fn test_register_rejects_empty_name_and_mismatched_default() {
        let mut registry = OptionRegistry::new();

        assert!(matches!(
            registry.register("", OptionType::String, SettingValue::from(""), &[]),
            Err(Error::EmptyOptionName)
        ));

        assert!(matches!(
            registry.register("Custom/Number", OptionType::Integer, SettingValue::from("ten"), &[]),
            Err(Error::ValueTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_update_replaces_default_and_choices() {
        let mut registry = OptionRegistry::new();
        let identifier = registry.identifier("Browser/ToolTipsMode").unwrap();

        registry
            .update(identifier, SettingValue::from("standard"), &["standard", "extended"])
            .unwrap();

        let definition = registry.definition(identifier).unwrap();
        assert_eq!(definition.default_value.as_str(), Some("standard"));
        assert_eq!(definition.choices, vec!["standard", "extended"]);

        let mismatch = registry.update(identifier, SettingValue::Bool(true), &[]);
        assert!(matches!(mismatch, Err(Error::ValueTypeMismatch { .. })));

        let unknown = registry.update(OptionId(9999), SettingValue::from(""), &[]);
        assert!(matches!(unknown, Err(Error::UnknownOption(_))));
    }

    #[test]
    fn test_names_are_sorted() {
        let registry = OptionRegistry::new();
        let names = registry.names();

        assert_eq!(names.len(), registry.count());
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_paths_defaults_are_strings() {
        let registry = OptionRegistry::new();

        for name in ["Paths/Downloads", "Paths/OpenFile", "Paths/SaveFile"] {
            let identifier = registry.identifier(name).unwrap();
            let definition = registry.definition(identifier).unwrap();
            assert_eq!(definition.kind, OptionType::Path);
            assert!(definition.default_value.as_str().is_some());
        }
    }
}
