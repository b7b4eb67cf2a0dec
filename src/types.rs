use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a registered option
///
/// Identifiers are indices into the registry's definition table: built-in
/// options occupy the schema positions in schema order, custom options are
/// appended after them. An identifier is stable for the process lifetime and
/// is never reused. There is no "invalid" identifier value; lookups that can
/// fail return `Option<OptionId>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub(crate) usize);

impl OptionId {
    /// Position of this option in the registry's definition table
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared type of an option
///
/// Color, Font, Path and Enumeration options carry string values; the type
/// records what the string means so front ends can render a fitting editor
/// and the store can decode raw file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Boolean,
    Integer,
    String,
    Color,
    Font,
    Path,
    List,
    Enumeration,
}

impl OptionType {
    /// Lowercase name of the type, as used in error messages and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Boolean => "boolean",
            OptionType::Integer => "integer",
            OptionType::String => "string",
            OptionType::Color => "color",
            OptionType::Font => "font",
            OptionType::Path => "path",
            OptionType::List => "list",
            OptionType::Enumeration => "enumeration",
        }
    }

    /// Returns true if `value`'s variant is legal for an option of this type
    pub fn accepts(&self, value: &SettingValue) -> bool {
        match self {
            OptionType::Boolean => matches!(value, SettingValue::Bool(_)),
            OptionType::Integer => matches!(value, SettingValue::Int(_)),
            OptionType::List => matches!(value, SettingValue::List(_)),
            OptionType::String
            | OptionType::Color
            | OptionType::Font
            | OptionType::Path
            | OptionType::Enumeration => matches!(value, SettingValue::String(_)),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed setting value
///
/// This is the value space of the store: booleans, integers, free-form text
/// (also used for colors, fonts, paths and enumeration choices) and string
/// lists.
///
/// # Example
///
/// ```rust
/// use otterconf::SettingValue;
///
/// let value = SettingValue::from(16);
/// assert_eq!(value.as_int(), Some(16));
/// assert_eq!(value.as_str(), None);
/// assert_eq!(value.to_string(), "16");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<String>),
}

impl SettingValue {
    /// Returns the boolean value if this is a `Bool` variant
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int` variant
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value if this is a `String` variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the list items if this is a `List` variant
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the variant name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::String(_) => "string",
            SettingValue::List(_) => "list",
        }
    }

    /// Decode a raw INI string into a value of the given option type
    ///
    /// Decoding is type-directed: the store keeps plain text on disk and the
    /// registry knows what each option's text means. Returns `None` when the
    /// raw text does not decode as the declared type (the resolver treats
    /// such entries as absent). Booleans accept `true`/`false` (any case) and
    /// `1`/`0`; lists are comma-separated with surrounding whitespace
    /// trimmed, and an empty string decodes as the empty list.
    pub fn from_ini_str(raw: &str, kind: OptionType) -> Option<SettingValue> {
        match kind {
            OptionType::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(SettingValue::Bool(true)),
                "false" | "0" => Some(SettingValue::Bool(false)),
                _ => None,
            },
            OptionType::Integer => raw.trim().parse::<i64>().ok().map(SettingValue::Int),
            OptionType::List => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Some(SettingValue::List(Vec::new()))
                } else {
                    Some(SettingValue::List(
                        trimmed.split(',').map(|item| item.trim().to_string()).collect(),
                    ))
                }
            }
            OptionType::String
            | OptionType::Color
            | OptionType::Font
            | OptionType::Path
            | OptionType::Enumeration => Some(SettingValue::String(raw.to_string())),
        }
    }
}

/// The `Display` form is also the INI serialization of the value: booleans as
/// `true`/`false`, integers in decimal, strings verbatim and lists
/// comma-joined (`a, b, c`). List items containing commas do not round-trip.
impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(v) => write!(f, "{}", v),
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::String(v) => f.write_str(v),
            SettingValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(v as i64)
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::String(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::String(v.to_string())
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(v: Vec<String>) -> Self {
        SettingValue::List(v)
    }
}

/// Presentation and origin flags of an option definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionFlags {
    pub enabled: bool,
    pub visible: bool,
    pub built_in: bool,
}

impl OptionFlags {
    /// Flags assigned to options from the built-in schema
    pub(crate) const BUILT_IN: OptionFlags = OptionFlags {
        enabled: true,
        visible: true,
        built_in: true,
    };

    /// Flags assigned to options registered at runtime
    pub(crate) const CUSTOM: OptionFlags = OptionFlags {
        enabled: true,
        visible: true,
        built_in: false,
    };
}

/// Definition of a registered option: identifier, declared type, default
/// value, legal choices (for constrained enumeration/list options) and flags
///
/// The canonical name is not part of the definition; it is owned by the
/// registry, which maps names and identifiers in both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDefinition {
    pub identifier: OptionId,
    pub kind: OptionType,
    pub default_value: SettingValue,
    pub choices: Vec<String>,
    pub flags: OptionFlags,
}
