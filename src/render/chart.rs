use super::axes::{draw_axes, Axis, GridStyle, PlotArea};
use super::canvas::Canvas;
use super::primitives::{LineStyle, MarkerStyle, TextStyle};
use crate::config::FigureConfig;

/// A single-panel scatter chart in data coordinates.
///
/// Points with a missing or unplaceable coordinate are skipped rather than
/// failing the figure.
pub struct Chart {
    canvas: Canvas,
    area: PlotArea,
    x_axis: Axis,
    y_axis: Axis,
}

impl Chart {
    /// Lay out the canvas and draw axes, grid and title beneath the data.
    pub fn new(config: &FigureConfig, x_axis: Axis, y_axis: Axis, grid: GridStyle, title: &str) -> Self {
        let mut canvas = Canvas::new(config.width_pt(), config.height_pt());
        let area = PlotArea::standard(&canvas);
        draw_axes(&mut canvas, &area, &x_axis, &y_axis, grid, title);
        Self { canvas, area, x_axis, y_axis }
    }

    /// Canvas position of a data point, if both coordinates can be placed.
    pub fn to_px(&self, x: Option<f64>, y: Option<f64>) -> Option<(f64, f64)> {
        let (x, y) = (x?, y?);
        if !self.x_axis.accepts(x) || !self.y_axis.accepts(y) {
            return None;
        }
        Some((
            self.x_axis.data_to_pixel(x, self.area.left, self.area.right()),
            self.y_axis.data_to_pixel(y, self.area.bottom(), self.area.top),
        ))
    }

    /// Draw one marker; returns whether it was placed.
    pub fn point(&mut self, x: Option<f64>, y: Option<f64>, marker: &MarkerStyle) -> bool {
        match self.to_px(x, y) {
            Some((px, py)) => {
                self.canvas.marker(px, py, marker);
                true
            }
            None => false,
        }
    }

    pub fn label(&mut self, x: Option<f64>, y: Option<f64>, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        if let Some((px, py)) = self.to_px(x, y) {
            self.canvas.text(px, py, text, style);
        }
    }

    /// Connect points in order; a missing point breaks the line.
    pub fn connect(&mut self, points: &[(Option<f64>, Option<f64>)], style: &LineStyle) {
        let mut segment: Vec<(f64, f64)> = Vec::new();
        for &(x, y) in points {
            match self.to_px(x, y) {
                Some(p) => segment.push(p),
                None => {
                    self.canvas.polyline(&segment, style);
                    segment.clear();
                }
            }
        }
        self.canvas.polyline(&segment, style);
    }

    pub fn into_svg(self) -> String {
        self.canvas.finish_svg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Color;

    fn chart() -> Chart {
        Chart::new(
            &FigureConfig::default(),
            Axis::linear_for(&[0.0, 10.0], 5),
            Axis::linear_for(&[0.0, 10.0], 5),
            GridStyle::Solid,
            "t",
        )
    }

    #[test]
    fn missing_coordinates_are_skipped() {
        let mut c = chart();
        let m = MarkerStyle::default();
        assert!(c.point(Some(1.0), Some(2.0), &m));
        assert!(!c.point(None, Some(2.0), &m));
        assert!(!c.point(Some(f64::INFINITY), Some(2.0), &m));
        assert_eq!(c.into_svg().matches("<circle").count(), 1);
    }

    #[test]
    fn missing_point_breaks_line() {
        let mut c = chart();
        let pts = [(Some(1.0), Some(1.0)), (Some(2.0), Some(2.0)), (None, None), (Some(3.0), Some(3.0)), (Some(4.0), Some(4.0))];
        c.connect(&pts, &LineStyle::dashed(Color::hex("#888888"), 1.0));
        assert_eq!(c.into_svg().matches("<polyline").count(), 2);
    }
}
