//! Override scopes
//!
//! An override scope is the per-site axis of the settings store: either a
//! concrete host (`example.org`, `localhost`) or a wildcard domain pattern
//! (`*.example.org`) that covers every subdomain beneath it. Scopes become
//! section names in `override.ini`.

use serde::Serialize;
use std::fmt;
use url::Url;

/// A host or wildcard domain that scopes per-site overrides
///
/// ```
/// use otterconf::{Scope, Url};
///
/// let url = Url::parse("https://mail.example.org/inbox")?;
/// let scope = Scope::from_url(&url).unwrap();
/// assert_eq!(scope.as_str(), "mail.example.org");
/// assert!(!scope.is_wildcard());
///
/// assert!(Scope::new("*.example.org").is_wildcard());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    /// Create a scope from a literal host or wildcard pattern
    pub fn new(host: impl Into<String>) -> Self {
        Scope(host.into())
    }

    /// Derive the scope a URL belongs to
    ///
    /// Local `file:` URLs all share the `localhost` scope. URLs without a
    /// host (`data:`, `about:`) have no scope and resolve globally.
    pub fn from_url(url: &Url) -> Option<Self> {
        if url.scheme() == "file" {
            return Some(Scope("localhost".to_string()));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Some(Scope(host.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for `*.`-prefixed patterns that match whole domain subtrees
    pub fn is_wildcard(&self) -> bool {
        self.0.starts_with('*')
    }

    /// Wildcard patterns that would cover this host, nearest first
    ///
    /// Each candidate drops one more leading label: `a.b.example.org`
    /// yields `*.b.example.org`, `*.example.org`, `*.org`. A bare domain is
    /// not covered by its own wildcard, so `example.org` yields only
    /// `*.org`.
    pub(crate) fn wildcard_candidates(&self) -> Vec<Scope> {
        let labels: Vec<&str> = self.0.split('.').collect();

        (1..labels.len())
            .map(|start| Scope(format!("*.{}", labels[start..].join("."))))
            .collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Scope {
    fn from(host: &str) -> Self {
        Scope(host.to_string())
    }
}
