use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use traffic_counter::{parse_file, Report};

/// Summarise half-hour traffic counter records.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// File with one `<ISO 8601 timestamp> <car count>` record per line.
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let outcome = parse_file(&args.input).context("no report produced")?;
    println!("{}", Report::build(outcome));
    Ok(())
}
