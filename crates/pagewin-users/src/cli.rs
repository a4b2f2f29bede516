//! Command-line front end for the `users` query.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pagewin::Paginator;

use crate::config::Config;
use crate::dataset::{load_records, sample_users};
use crate::user::{users, UsersArgs};

/// Get a list of users, one window at a time.
#[derive(Debug, Parser)]
#[command(name = "pagewin-users", version)]
pub struct Cli {
    /// Field to order by: name, occupation or age
    #[arg(long)]
    pub order_by: String,

    /// Maximum number of users in the window
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Zero-based index of the first user in the window
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Keep users whose name contains this text
    #[arg(long)]
    pub name: Option<String>,

    /// Keep users whose occupation contains this text
    #[arg(long)]
    pub occupation: Option<String>,

    /// JSON file with user records (defaults to the built-in sample)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Runs the query described by `cli` and renders the window as JSON.
pub fn run(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let dataset = match &cli.data {
        Some(path) => load_records(path)?,
        None => sample_users()?,
    };
    let paginator = Paginator::new(config.limit);
    log::info!(
        "serving {} records, limit policy {:?}",
        dataset.len(),
        paginator.policy()
    );

    let args = UsersArgs {
        order_by: cli.order_by,
        limit: cli.limit,
        offset: cli.offset,
        name: cli.name,
        occupation: cli.occupation,
    };
    let window = users(&paginator, &dataset, &args)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&window)?
    } else {
        serde_json::to_string(&window)?
    };
    Ok(json)
}
