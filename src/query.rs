use glob::Pattern;

use crate::error::{Error, Result};

/// Filter option names by glob patterns (OR logic)
/// Returns the names matching any of the provided patterns
pub fn query_options(names: &[String], patterns: &[&str]) -> Result<Vec<String>> {
    // Compile all patterns first to fail fast on invalid patterns
    let compiled: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(names
        .iter()
        .filter(|name| compiled.iter().any(|pattern| pattern.matches(name)))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_names() -> Vec<String> {
        [
            "Browser/HomePage",
            "Browser/Locale",
            "Content/DefaultZoom",
            "Network/Proxy",
            "Network/UserAgent",
        ]
        .iter()
        .map(|name| name.to_string())
        .collect()
    }

    #[test]
    fn test_query_single_pattern() {
        let queried = query_options(&test_names(), &["Network/*"]).unwrap();
        assert_eq!(queried, vec!["Network/Proxy", "Network/UserAgent"]);
    }

    #[test]
    fn test_query_multiple_patterns_or_logic() {
        let queried = query_options(&test_names(), &["Browser/*", "Content/DefaultZoom"]).unwrap();
        assert_eq!(
            queried,
            vec!["Browser/HomePage", "Browser/Locale", "Content/DefaultZoom"]
        );
    }

    #[test]
    fn test_query_no_matches() {
        let queried = query_options(&test_names(), &["Updates/*"]).unwrap();
        assert!(queried.is_empty());
    }

    #[test]
    fn test_query_exact_match() {
        let queried = query_options(&test_names(), &["Browser/HomePage"]).unwrap();
        assert_eq!(queried, vec!["Browser/HomePage"]);
    }

    #[test]
    fn test_query_invalid_pattern() {
        let result = query_options(&test_names(), &["[invalid"]);
        assert!(matches!(result, Err(Error::InvalidGlobPattern(_))));
    }
}
