use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use wdd_artifacts::{figures, logging, tables, Config};

#[derive(Parser)]
#[command(name = "wdd_artifacts")]
#[command(about = "Builds the tables and figures for the wafer defect detection survey")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the raw CSV inputs
    #[arg(long, global = true)]
    raw_dir: Option<PathBuf>,

    /// Output root; tables and figures go to <dir>/tables and <dir>/figures
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean and sort the survey tables, writing CSV and LaTeX
    Tables,
    /// Render the survey figures as PNG
    Figures,
    /// Build tables, then figures
    All,
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(raw_dir) = &cli.raw_dir {
        config = config.with_raw_dir(raw_dir);
    }
    if let Some(out_dir) = &cli.out_dir {
        config = config.with_output_root(out_dir);
    }
    Ok(config)
}

fn run_tables(config: &Config) -> anyhow::Result<()> {
    println!("📋 Building tables from {}...", config.paths.raw_dir.display());
    let reports = tables::build_all(config).context("Table build failed")?;
    for report in &reports {
        let tex = if report.tex_path.is_some() { " (+ .tex)" } else { "" };
        println!("   {} rows -> {}{}", report.rows, report.csv_path.display(), tex);
    }
    println!("✅ {} tables written to {}", reports.len(), config.paths.tables_dir.display());
    Ok(())
}

fn run_figures(config: &Config) -> anyhow::Result<()> {
    println!("📊 Rendering figures from {}...", config.paths.raw_dir.display());
    let reports = figures::make_all(config).context("Figure build failed")?;
    for report in &reports {
        println!("   {} points -> {}", report.rows, report.path.display());
    }
    println!("✅ {} figures written to {}", reports.len(), config.paths.figures_dir.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(?config, "Loaded configuration");

    let result = match cli.command {
        Commands::Tables => run_tables(&config),
        Commands::Figures => run_figures(&config),
        Commands::All => run_tables(&config).and_then(|_| run_figures(&config)),
    };

    if let Err(e) = &result {
        error!("Run failed: {:#}", e);
        println!("❌ Run failed: {:#}", e);
    }
    result
}
