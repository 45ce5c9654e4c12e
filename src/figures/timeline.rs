//! Detection accuracy over time, colored by technology category.

use crate::config::FigureConfig;
use crate::constants::*;
use crate::error::Result;
use crate::render::axes::{Axis, GridStyle};
use crate::render::chart::Chart;
use crate::render::color::Color;
use crate::render::primitives::{LineStyle, MarkerStyle, TextAnchor, TextBaseline, TextStyle};
use crate::table::{Cell, SortKey, Table};

pub const TITLE: &str = "Wafer Defect Detection Evolution";

/// Color for categories outside the palette.
pub const FALLBACK_COLOR: &str = "#777777";

const CATEGORY_PALETTE: [(&str, &str); 9] = [
    ("Manual", "#56b2c9"),
    ("Optical", "#f3c178"),
    ("E-beam", "#f38181"),
    ("Digital", "#7cb7c6"),
    ("ML", "#f6d55c"),
    ("DL", "#d64255"),
    ("Advanced DL", "#c44c9d"),
    ("Transformers", "#7a4f9c"),
    ("Modern AI", "#4f7d5f"),
];

/// Vertical offset of point labels, in accuracy percentage points.
const LABEL_OFFSET: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub year: Option<f64>,
    pub accuracy_pct: Option<f64>,
    pub defect_size_nm: Option<f64>,
    pub category: Option<String>,
    pub label: String,
}

impl Milestone {
    pub fn color(&self) -> Color {
        category_color(self.category.as_deref())
    }
}

pub fn is_known_category(category: &str) -> bool {
    CATEGORY_PALETTE.iter().any(|(name, _)| *name == category)
}

/// Palette color of a category, gray when unknown or missing.
pub fn category_color(category: Option<&str>) -> Color {
    let hex = category
        .and_then(|c| CATEGORY_PALETTE.iter().find(|(name, _)| *name == c))
        .map(|(_, hex)| *hex)
        .unwrap_or(FALLBACK_COLOR);
    Color::hex(hex)
}

/// Milestones in chronological order; rows without a year come last.
pub fn load(table: &Table) -> Result<Vec<Milestone>> {
    let mut table = table.clone();
    for column in [COL_EVO_YEAR, COL_EVO_ACCURACY, COL_EVO_DEFECT_SIZE] {
        table.coerce_numeric(column)?;
    }
    table.sort_by_keys(&[SortKey::asc(COL_EVO_YEAR)])?;

    let year = table.column_index(COL_EVO_YEAR)?;
    let accuracy = table.column_index(COL_EVO_ACCURACY)?;
    let size = table.column_index(COL_EVO_DEFECT_SIZE)?;
    let category = table.column_index(COL_EVO_CATEGORY)?;
    let label = table.column_index(COL_EVO_LABEL)?;

    Ok(table
        .rows()
        .iter()
        .map(|row: &Vec<Cell>| Milestone {
            year: row[year].as_number(),
            accuracy_pct: row[accuracy].as_number(),
            defect_size_nm: row[size].as_number(),
            category: row[category].as_text(),
            label: row[label].as_text().unwrap_or_default(),
        })
        .collect())
}

pub fn render_svg(milestones: &[Milestone], config: &FigureConfig) -> String {
    let xs: Vec<f64> = milestones.iter().filter_map(|m| m.year).collect();
    let ys: Vec<f64> = milestones.iter().filter_map(|m| m.accuracy_pct).collect();

    let x_axis = Axis::linear_for(&xs, 8).with_label("Year");
    let y_axis = Axis::linear_for(&ys, 6).with_label("Accuracy (%)");
    let mut chart = Chart::new(config, x_axis, y_axis, GridStyle::Dashed, TITLE);

    for m in milestones {
        let marker = MarkerStyle::from_area(140.0, m.color()).with_opacity(0.9);
        chart.point(m.year, m.accuracy_pct, &marker);
    }

    let path: Vec<_> = milestones.iter().map(|m| (m.year, m.accuracy_pct)).collect();
    chart.connect(&path, &LineStyle::dashed(Color::hex("#888888"), 1.0));

    let label_style = TextStyle::sized(8.0).anchored(TextAnchor::Middle, TextBaseline::Alphabetic);
    for m in milestones {
        let above = m.accuracy_pct.map(|a| a + LABEL_OFFSET);
        chart.label(m.year, above, &m.label, &label_style);
    }

    chart.into_svg()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::csv_io::read_csv_from;

    const CSV: &str = "year,accuracy_pct,defect_size_nm,category,label\n\
2015,92.0,45,DL,CNN\n\
1985,60,1000,Manual,Visual inspection\n\
2021,98.7,7,Quantum,Hybrid\n\
unknown,70,250,Optical,Brightfield\n\
2000,80.5,n/a,ML,SVM\n";

    fn milestones() -> Vec<Milestone> {
        let table = read_csv_from("t8".to_string(), CSV.as_bytes()).unwrap();
        load(&table).unwrap()
    }

    #[test]
    fn test_sorted_by_year_missing_last() {
        let ms = milestones();
        assert_eq!(ms.len(), 5);
        let labels: Vec<_> = ms.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Visual inspection", "SVM", "CNN", "Hybrid", "Brightfield"]);
        assert_eq!(ms[1].defect_size_nm, None);
        assert_eq!(ms[0].defect_size_nm, Some(1000.0));
    }

    #[test]
    fn test_palette_and_gray_fallback() {
        assert_eq!(category_color(Some("DL")).to_hex(), "#d64255");
        assert_eq!(category_color(Some("Modern AI")).to_hex(), "#4f7d5f");
        assert_eq!(category_color(Some("Quantum")).to_hex(), FALLBACK_COLOR);
        assert_eq!(category_color(None).to_hex(), FALLBACK_COLOR);
        // Matching is exact
        assert_eq!(category_color(Some("dl")).to_hex(), FALLBACK_COLOR);
        assert!(is_known_category("E-beam"));
        assert!(!is_known_category("Quantum"));
    }

    #[test]
    fn test_render_colors_points_and_draws_dashed_line() {
        let svg = render_svg(&milestones(), &FigureConfig::default());
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(svg.contains("#56b2c9"));
        assert!(svg.contains("#777777"));
        assert!(svg.contains(r##"stroke="#888888""##));
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains(">Hybrid</text>"));
    }
}
