//! Record datasets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pagewin::Record;

const SAMPLE_USERS: &str = include_str!("../data/users.json");

/// The built-in four-user sample dataset.
pub fn sample_users() -> Result<Vec<Record>> {
    parse_records(SAMPLE_USERS).context("built-in user dataset is malformed")
}

/// Parses a JSON array of flat objects with string or integer values.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a dataset from a JSON file.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_records(&text).with_context(|| format!("parsing {}", path.display()))
}
