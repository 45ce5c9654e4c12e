//! Figure Builder: derives plot-ready series from the raw tables and
//! rasterizes each chart to PNG.

pub mod accuracy_cost;
pub mod dataset_comparison;
pub mod parse;
pub mod timeline;

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::constants::{self, *};
use crate::error::Result;
use crate::render::png;
use crate::table::{csv_io, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    AccuracyVsCost,
    TimelineEvolution,
    DatasetComparison,
}

impl Figure {
    pub const ALL: [Figure; 3] =
        [Figure::AccuracyVsCost, Figure::TimelineEvolution, Figure::DatasetComparison];

    /// Base name of the raw table the figure is drawn from.
    pub fn source(&self) -> &'static str {
        match self {
            Figure::AccuracyVsCost => TABLE1_MODEL_PERFORMANCE,
            Figure::TimelineEvolution => TABLE8_DETECTION_EVOLUTION,
            Figure::DatasetComparison => TABLE3_DATASETS,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Figure::AccuracyVsCost => FIGURE1_ACCURACY_VS_COST,
            Figure::TimelineEvolution => FIGURE2_TIMELINE_EVOLUTION,
            Figure::DatasetComparison => FIGURE3_DATASET_COMPARISON,
        }
    }

    /// Derive the series and lay out the chart as SVG.
    /// Returns the SVG and the number of rows in the series.
    pub fn render_svg(&self, table: &Table, config: &Config) -> Result<(String, usize)> {
        let figure = &config.figures;
        match self {
            Figure::AccuracyVsCost => {
                let points = accuracy_cost::load(table)?;
                Ok((accuracy_cost::render_svg(&points, figure), points.len()))
            }
            Figure::TimelineEvolution => {
                let milestones = timeline::load(table)?;
                for m in &milestones {
                    if let Some(c) = m.category.as_deref().filter(|c| !timeline::is_known_category(c)) {
                        debug!(label = %m.label, category = c, "Category outside palette, drawing gray");
                    }
                }
                Ok((timeline::render_svg(&milestones, figure), milestones.len()))
            }
            Figure::DatasetComparison => {
                let points = dataset_comparison::load(table)?;
                Ok((dataset_comparison::render_svg(&points, figure), points.len()))
            }
        }
    }
}

/// Outcome of rendering one figure.
#[derive(Debug, Clone)]
pub struct FigureReport {
    pub figure: Figure,
    pub rows: usize,
    pub path: PathBuf,
}

/// Render every figure. The first failure stops the run.
pub fn make_all(config: &Config) -> Result<Vec<FigureReport>> {
    fs::create_dir_all(&config.paths.figures_dir)?;
    Figure::ALL.iter().map(|figure| make_figure(*figure, config)).collect()
}

pub fn make_figure(figure: Figure, config: &Config) -> Result<FigureReport> {
    let span = tracing::info_span!("figure", name = figure.file_name());
    let _enter = span.enter();

    let input = config.paths.raw_dir.join(constants::csv_file_name(figure.source()));
    let table = csv_io::read_csv(&input)?;

    let (svg, rows) = figure.render_svg(&table, config)?;
    let bytes = png::svg_to_png(&svg, config.figures.dpi)?;

    let path = config.paths.figures_dir.join(figure.file_name());
    fs::write(&path, bytes)?;
    info!(rows, "Saved {}", path.display());

    Ok(FigureReport { figure, rows, path })
}
