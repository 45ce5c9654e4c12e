//! Samples vs classes for the public wafer map datasets.

use super::parse::{format_sample_tick, parse_sample_count};
use crate::config::FigureConfig;
use crate::constants::{COL_CLASSES, COL_DATASET, COL_TOTAL_SAMPLES};
use crate::error::Result;
use crate::render::axes::{Axis, GridStyle};
use crate::render::chart::Chart;
use crate::render::color::cycle_color;
use crate::render::primitives::{MarkerStyle, TextAnchor, TextBaseline, TextStyle};
use crate::table::Table;

pub const TITLE: &str = "Datasets: Samples vs Classes";

/// Fixed sample-count ticks: 1K, 10K, 100K, 1M.
pub const SAMPLE_TICKS: [f64; 4] = [1e3, 1e4, 1e5, 1e6];

const LABEL_OFFSET: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPoint {
    pub dataset: String,
    pub total_samples: Option<f64>,
    pub classes: Option<f64>,
}

pub fn load(table: &Table) -> Result<Vec<DatasetPoint>> {
    let names = table.column(COL_DATASET)?;
    let samples = table.column(COL_TOTAL_SAMPLES)?;
    let classes = table.column(COL_CLASSES)?;

    Ok(names
        .iter()
        .zip(samples)
        .zip(classes)
        .map(|((name, samples), classes)| DatasetPoint {
            dataset: name.as_text().unwrap_or_default(),
            total_samples: samples.as_text().and_then(|s| parse_sample_count(&s)),
            classes: classes.to_numeric().as_number(),
        })
        .collect())
}

pub fn render_svg(points: &[DatasetPoint], config: &FigureConfig) -> String {
    let xs: Vec<f64> = points.iter().filter_map(|p| p.total_samples).collect();
    let ys: Vec<f64> = points.iter().filter_map(|p| p.classes).collect();

    let x_axis = Axis::log_decades(&xs)
        .with_ticks(&SAMPLE_TICKS, format_sample_tick)
        .with_label("Samples (log scale)");
    let y_axis = Axis::linear_for(&ys, 6).with_label("Classes");
    let mut chart = Chart::new(config, x_axis, y_axis, GridStyle::Dashed, TITLE);

    let marker = MarkerStyle::from_area(120.0, cycle_color(0));
    let label_style = TextStyle::sized(8.0).anchored(TextAnchor::Middle, TextBaseline::Alphabetic);
    for p in points {
        chart.point(p.total_samples, p.classes, &marker);
        let above = p.classes.map(|c| c + LABEL_OFFSET);
        chart.label(p.total_samples, above, &p.dataset, &label_style);
    }

    chart.into_svg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::csv_io::read_csv_from;

    const CSV: &str = "Dataset,Year,Total Samples,Classes,Source\n\
WM-811K,2014,\"811,457\",9,TSMC\n\
MixedWM38,2020,\"38,015\",38,Fab\n\
Private,2019,undisclosed,5,Internal\n";

    #[test]
    fn test_load_strips_separators() {
        let table = read_csv_from("t3".to_string(), CSV.as_bytes()).unwrap();
        let points = load(&table).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].total_samples, Some(811457.0));
        assert_eq!(points[1].classes, Some(38.0));
        assert_eq!(points[2].total_samples, None);
    }

    #[test]
    fn test_render_uses_fixed_tick_labels() {
        let table = read_csv_from("t3".to_string(), CSV.as_bytes()).unwrap();
        let svg = render_svg(&load(&table).unwrap(), &FigureConfig::default());
        for label in [">10K</text>", ">100K</text>", ">1M</text>"] {
            assert!(svg.contains(label), "missing tick {}", label);
        }
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">MixedWM38</text>"));
        assert!(!svg.contains(">Private</text>"));
    }
}
