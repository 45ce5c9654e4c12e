//! Accuracy vs computational cost for the surveyed models.

use super::parse::parse_flops_billions;
use crate::config::FigureConfig;
use crate::constants::{COL_ACCURACY, COL_FLOPS, COL_MODEL};
use crate::error::Result;
use crate::render::axes::{Axis, GridStyle};
use crate::render::chart::Chart;
use crate::render::color::cycle_color;
use crate::render::primitives::{MarkerStyle, TextAnchor, TextBaseline, TextStyle};
use crate::table::Table;

pub const TITLE: &str = "Accuracy vs Computational Cost for Wafer Defect Detection Models";

#[derive(Debug, Clone, PartialEq)]
pub struct CostPoint {
    pub model: String,
    pub accuracy_pct: Option<f64>,
    pub flops_b: Option<f64>,
}

/// One point per row of the model performance table.
pub fn load(table: &Table) -> Result<Vec<CostPoint>> {
    let models = table.column(COL_MODEL)?;
    let accuracy = table.column(COL_ACCURACY)?;
    let flops = table.column(COL_FLOPS)?;

    Ok(models
        .iter()
        .zip(accuracy)
        .zip(flops)
        .map(|((model, acc), flops)| CostPoint {
            model: model.as_text().unwrap_or_default(),
            accuracy_pct: acc.to_numeric().as_number(),
            flops_b: flops.as_text().and_then(|s| parse_flops_billions(&s)),
        })
        .collect())
}

pub fn render_svg(points: &[CostPoint], config: &FigureConfig) -> String {
    let xs: Vec<f64> = points.iter().filter_map(|p| p.flops_b).collect();
    let ys: Vec<f64> = points.iter().filter_map(|p| p.accuracy_pct).collect();

    let x_axis = Axis::linear_for(&xs, 6).with_label("FLOPs (billions)");
    let y_axis = Axis::linear_for(&ys, 6).with_label("Accuracy (%)");
    let mut chart = Chart::new(config, x_axis, y_axis, GridStyle::Solid, TITLE);

    let label_style = TextStyle::sized(8.0).anchored(TextAnchor::Start, TextBaseline::Alphabetic);
    for (i, p) in points.iter().enumerate() {
        // Each model takes the next color of the categorical cycle
        let marker = MarkerStyle::from_area(36.0, cycle_color(i));
        chart.point(p.flops_b, p.accuracy_pct, &marker);
        chart.label(p.flops_b, p.accuracy_pct, &p.model, &label_style);
    }

    chart.into_svg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::csv_io::read_csv_from;

    const CSV: &str = "Model,Accuracy (%),FLOPs,Dataset\n\
ResNet-50,97.5,4.1B,WM-811K\n\
MobileNetV2,95.2,300M,WM-811K\n\
ViT-B/16,bad,17.6G,MixedWM38\n\
CustomCNN,93.0,unknown,WM-811K\n";

    #[test]
    fn test_load_converts_units_and_keeps_rows() {
        let table = read_csv_from("t1".to_string(), CSV.as_bytes()).unwrap();
        let points = load(&table).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].flops_b, Some(4.1));
        assert!((points[1].flops_b.unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(points[2].accuracy_pct, None);
        assert_eq!(points[3].flops_b, None);
        assert_eq!(points[3].model, "CustomCNN");
    }

    #[test]
    fn test_only_complete_points_are_drawn() {
        let table = read_csv_from("t1".to_string(), CSV.as_bytes()).unwrap();
        let svg = render_svg(&load(&table).unwrap(), &FigureConfig::default());
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(">ResNet-50</text>"));
        assert!(!svg.contains(">CustomCNN</text>"));
        assert!(svg.contains("FLOPs (billions)"));
    }
}
