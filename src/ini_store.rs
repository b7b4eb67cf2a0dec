//! INI-backed store files
//!
//! This module wraps the two files a profile keeps its settings in:
//! `otter.conf` (global values) and `override.ini` (per-site values). Both
//! are plain INI, parsed case-sensitively, with inline comments disabled
//! and multiline values enabled, so stored text may contain `;`, `#` and
//! embedded newlines. Files are opened per operation and never held open,
//! so external edits are picked up on the next call.
//!
//! The durability contract is asymmetric. Reads degrade: a missing,
//! unreadable or unparseable file behaves as an empty store and resolution
//! falls back to defaults. Writes are strict: the document is loaded,
//! modified and atomically renamed over the target, and a write against an
//! existing file that does not parse is refused with
//! [`Error::StoreParse`](crate::Error) instead of clobbering it.

use configparser::ini::Ini;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::scope::Scope;

/// An INI document bound to a path on disk
#[derive(Debug, Clone)]
struct IniFile {
    path: PathBuf,
}

impl IniFile {
    fn new(path: PathBuf) -> Self {
        IniFile { path }
    }

    /// Empty document with the store's INI dialect: case-sensitive names,
    /// no inline comments, multiline values. Comment symbols inside a value
    /// and newlines in stored text must survive a reload.
    fn document() -> Ini {
        let mut ini = Ini::new_cs();
        ini.set_inline_comment_symbols(Some(&[]));
        ini.set_multiline(true);
        ini
    }

    /// Parse the file for a read: any failure yields an empty document
    fn open_lenient(&self) -> Ini {
        let mut ini = Self::document();

        if self.path.exists() && ini.load(&self.path).is_err() {
            return Self::document();
        }

        ini
    }

    /// Parse the file for a write: a missing file is an empty document, an
    /// existing file that does not parse is an error
    fn open_strict(&self) -> Result<Ini> {
        let mut ini = Self::document();

        if self.path.exists() {
            ini.load(&self.path).map_err(|message| Error::StoreParse {
                path: self.path.clone(),
                message,
            })?;
        }

        Ok(ini)
    }

    /// Serialize the document and atomically replace the file
    fn store(&self, ini: &Ini) -> Result<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(ini.writes().as_bytes())?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        Ok(())
    }
}

/// Drop a section once its last key is gone, so an empty section header
/// does not linger in the file
fn prune_section(ini: &mut Ini, section: &str) {
    let empty = ini
        .get_map_ref()
        .get(section)
        .map_or(false, |entries| entries.is_empty());

    if empty {
        ini.remove_section(section);
    }
}

/// The global store, `otter.conf`
///
/// A hierarchical option name is stored with its first segment as the
/// section and the rest as the key: `Browser/HomePage` becomes key
/// `HomePage` under `[Browser]`, and `A/B/C` becomes key `B/C` under `[A]`.
/// Names without a separator land under `[General]`, the Qt settings
/// convention the original files follow.
#[derive(Debug, Clone)]
pub(crate) struct GlobalStore {
    file: IniFile,
}

impl GlobalStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        GlobalStore {
            file: IniFile::new(path),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.file.path
    }

    fn locate(name: &str) -> (&str, &str) {
        match name.split_once('/') {
            Some((section, key)) => (section, key),
            None => ("General", name),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<String> {
        let (section, key) = Self::locate(name);
        self.file.open_lenient().get(section, key)
    }

    pub(crate) fn set(&self, name: &str, raw: &str) -> Result<()> {
        let (section, key) = Self::locate(name);
        let mut ini = self.file.open_strict()?;
        ini.set(section, key, Some(raw.to_string()));
        self.file.store(&ini)
    }

    /// Remove the entry for `name`; returns whether a key was present
    pub(crate) fn remove(&self, name: &str) -> Result<bool> {
        let (section, key) = Self::locate(name);
        let mut ini = self.file.open_strict()?;

        if ini.remove_key(section, key).is_none() {
            return Ok(false);
        }

        prune_section(&mut ini, section);
        self.file.store(&ini)?;
        Ok(true)
    }
}

/// The override store, `override.ini`
///
/// One section per scope (host or wildcard pattern); keys inside a section
/// are full hierarchical option names, slashes kept verbatim.
#[derive(Debug, Clone)]
pub(crate) struct OverrideStore {
    file: IniFile,
}

impl OverrideStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        OverrideStore {
            file: IniFile::new(path),
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.file.path
    }

    pub(crate) fn get(&self, scope: &Scope, name: &str) -> Option<String> {
        self.file.open_lenient().get(scope.as_str(), name)
    }

    /// Raw values for `name` across `scopes`, in probe order, read from a
    /// single snapshot of the file
    pub(crate) fn probe(&self, scopes: &[Scope], name: &str) -> Vec<String> {
        let ini = self.file.open_lenient();

        scopes
            .iter()
            .filter_map(|scope| ini.get(scope.as_str(), name))
            .collect()
    }

    pub(crate) fn set(&self, scope: &Scope, name: &str, raw: &str) -> Result<()> {
        let mut ini = self.file.open_strict()?;
        ini.set(scope.as_str(), name, Some(raw.to_string()));
        self.file.store(&ini)
    }

    /// Remove one entry from a scope; returns whether a key was present
    pub(crate) fn remove(&self, scope: &Scope, name: &str) -> Result<bool> {
        let mut ini = self.file.open_strict()?;

        if ini.remove_key(scope.as_str(), name).is_none() {
            return Ok(false);
        }

        prune_section(&mut ini, scope.as_str());
        self.file.store(&ini)?;
        Ok(true)
    }

    /// Remove a whole scope section; returns whether the scope existed
    pub(crate) fn remove_scope(&self, scope: &Scope) -> Result<bool> {
        let mut ini = self.file.open_strict()?;

        if ini.remove_section(scope.as_str()).is_none() {
            return Ok(false);
        }

        self.file.store(&ini)?;
        Ok(true)
    }

    pub(crate) fn has_scope(&self, scope: &Scope) -> bool {
        self.file
            .open_lenient()
            .get_map_ref()
            .get(scope.as_str())
            .map_or(false, |entries| !entries.is_empty())
    }

    pub(crate) fn contains(&self, scope: &Scope, name: &str) -> bool {
        self.get(scope, name).is_some()
    }

    /// Every scope with at least one entry, sorted
    pub(crate) fn scopes(&self) -> Vec<Scope> {
        let ini = self.file.open_lenient();

        let mut scopes: Vec<Scope> = ini
            .get_map_ref()
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(section, _)| Scope::new(section.clone()))
            .collect();
        scopes.sort();
        scopes
    }

    /// Name/raw-value pairs of one scope, sorted by name
    pub(crate) fn entries_in_scope(&self, scope: &Scope) -> Vec<(String, String)> {
        let ini = self.file.open_lenient();

        let Some(entries) = ini.get_map_ref().get(scope.as_str()) else {
            return Vec::new();
        };

        let mut entries: Vec<(String, String)> = entries
            .iter()
            .filter_map(|(name, raw)| raw.as_ref().map(|raw| (name.clone(), raw.clone())))
            .collect();
        entries.sort();
        entries
    }

    /// How many scopes override each option name, over the whole file
    pub(crate) fn name_counts(&self) -> HashMap<String, usize> {
        let ini = self.file.open_lenient();
        let mut counts = HashMap::new();

        for entries in ini.get_map_ref().values() {
            for (name, raw) in entries {
                if raw.is_some() {
                    *counts.entry(name.clone()).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}
