//! Figure Builder entry point
//!
//! Renders the three survey figures from `data/raw` into `output/figures`.
//!
//! Usage:
//!   cargo run --bin make-figures

use anyhow::Context;
use wdd_artifacts::{figures, logging, Config};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::load(None).context("Failed to load configuration")?;
    let reports = figures::make_all(&config).context("Figure build failed")?;

    for report in &reports {
        eprintln!("📊 {}", report.path.display());
    }
    Ok(())
}
