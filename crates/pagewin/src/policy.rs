//! Limit validation policy.

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Largest window a default policy allows.
pub const DEFAULT_MAX_LIMIT: usize = 100;

/// Bounds a requested limit must respect.
///
/// A limit is always rejected below 1. The upper bound is configurable and
/// defaults to [`DEFAULT_MAX_LIMIT`]; `max_limit: None` removes it.
///
/// ```
/// use pagewin::LimitPolicy;
///
/// let policy: LimitPolicy = serde_json::from_str(r#"{"max_limit": 10}"#).unwrap();
/// assert!(policy.check(10).is_ok());
/// assert!(policy.check(11).is_err());
///
/// assert!(LimitPolicy::unbounded().check(1_000_000).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitPolicy {
    pub max_limit: Option<usize>,
}

impl Default for LimitPolicy {
    fn default() -> Self {
        LimitPolicy {
            max_limit: Some(DEFAULT_MAX_LIMIT),
        }
    }
}

impl LimitPolicy {
    /// Policy with the given upper bound.
    pub fn with_max(max_limit: usize) -> Self {
        LimitPolicy {
            max_limit: Some(max_limit),
        }
    }

    /// Policy with no upper bound.
    pub fn unbounded() -> Self {
        LimitPolicy { max_limit: None }
    }

    /// Validates a limit, returning it as a window size.
    pub fn check(&self, limit: i64) -> Result<usize> {
        let invalid = || PageError::InvalidLimit {
            limit,
            max: self.max_limit,
        };
        let size = usize::try_from(limit).map_err(|_| invalid())?;
        if size == 0 {
            return Err(invalid());
        }
        match self.max_limit {
            Some(max) if size > max => Err(invalid()),
            _ => Ok(size),
        }
    }
}
