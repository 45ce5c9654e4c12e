//! Table Builder entry point
//!
//! Reads the raw survey tables from `data/raw`, cleans and sorts them, and
//! writes CSV + LaTeX to `output/tables`.
//!
//! Usage:
//!   cargo run --bin build-tables

use anyhow::Context;
use wdd_artifacts::{logging, tables, Config};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::load(None).context("Failed to load configuration")?;
    let reports = tables::build_all(&config).context("Table build failed")?;

    eprintln!("✅ Built {} tables in {}", reports.len(), config.paths.tables_dir.display());
    Ok(())
}
