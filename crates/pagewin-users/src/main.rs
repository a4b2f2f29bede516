use anyhow::Result;
use clap::Parser;
use flexi_logger::Logger;
use pagewin_users::cli::{run, Cli};

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;
    println!("{}", run(Cli::parse())?);
    Ok(())
}
