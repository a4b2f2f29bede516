//! Serving configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pagewin::LimitPolicy;
use serde::Deserialize;

/// Settings read from a YAML file.
///
/// ```yaml
/// limit:
///   max_limit: 50   # or null for no upper bound
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub limit: LimitPolicy,
}

impl Config {
    /// Parses a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Reads and parses a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Config::from_yaml(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(Config::from_yaml("{}").unwrap(), Config::default());
        assert_eq!(Config::default().limit.max_limit, Some(100));
    }

    #[test]
    fn max_limit() {
        let c = Config::from_yaml("limit:\n  max_limit: 5\n").unwrap();
        assert_eq!(c.limit, LimitPolicy::with_max(5));

        let c = Config::from_yaml("limit:\n  max_limit: null\n").unwrap();
        assert_eq!(c.limit, LimitPolicy::unbounded());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_yaml("limits: {}\n").is_err());
    }

    #[test]
    fn misspelled_limit_key_rejected() {
        assert!(Config::from_yaml("limit:\n  maxlimit: 5\n").is_err());
    }
}
