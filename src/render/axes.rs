use super::canvas::Canvas;
use super::color::{self, Color};
use super::primitives::*;

/// Axis with tick positions and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub log: bool,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
}

impl Axis {
    /// Linear axis over the finite values with 5% padding and "nice number" ticks.
    pub fn linear_for(values: &[f64], target_ticks: usize) -> Self {
        let (lo, hi) = match finite_bounds(values.iter().copied()) {
            Some((lo, hi)) if (hi - lo).abs() > 1e-12 => {
                let pad = (hi - lo) * 0.05;
                (lo - pad, hi + pad)
            }
            Some((v, _)) => {
                let pad = if v == 0.0 { 1.0 } else { v.abs() * 0.05 };
                (v - pad, v + pad)
            }
            None => (0.0, 1.0),
        };

        let step = nice_step((hi - lo) / (target_ticks.max(2) - 1) as f64);
        let ticks = linear_ticks(lo, hi, step);
        let labels = ticks.iter().map(|v| format_tick(*v, step)).collect();

        Self {
            min: lo,
            max: hi,
            log: false,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
        }
    }

    /// Log axis spanning the decades that enclose the positive values.
    pub fn log_decades(values: &[f64]) -> Self {
        let positive = values.iter().copied().filter(|v| *v > 0.0);
        let (lo_exp, hi_exp) = match finite_bounds(positive) {
            Some((lo, hi)) => {
                let lo_exp = clamp_exp(lo.log10().floor());
                let hi_exp = clamp_exp(hi.log10().ceil()).max(lo_exp + 1);
                (lo_exp, hi_exp)
            }
            None => (0, 1),
        };

        let ticks: Vec<f64> = (lo_exp..=hi_exp).map(|exp| 10f64.powi(exp)).collect();
        let labels = ticks.iter().map(|t| format!("{}", t)).collect();
        let (lo, hi) = (10f64.powi(lo_exp), 10f64.powi(hi_exp));

        Self {
            min: lo,
            max: hi,
            log: true,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
        }
    }

    /// Replace ticks with explicit positions, keeping only those inside the range.
    pub fn with_ticks<F>(mut self, positions: &[f64], formatter: F) -> Self
    where
        F: Fn(f64) -> String,
    {
        let (lo, hi) = (self.min * (1.0 - 1e-9), self.max * (1.0 + 1e-9));
        self.tick_positions = positions.iter().copied().filter(|p| *p >= lo && *p <= hi).collect();
        self.tick_labels = self.tick_positions.iter().map(|p| formatter(*p)).collect();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether a value can be placed on this axis.
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && (!self.log || value > 0.0)
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = if self.log {
            (value.ln() - self.min.ln()) / (self.max.ln() - self.min.ln())
        } else {
            (value - self.min) / (self.max - self.min)
        };
        px_min + frac * (px_max - px_min)
    }
}

fn finite_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.filter(|v| v.is_finite()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Most ticks an axis will carry.
const MAX_TICKS: f64 = 50.0;

/// Decade exponents kept within the normal `f64` range.
const MIN_EXP: i32 = -300;
const MAX_EXP: i32 = 300;

fn clamp_exp(exp: f64) -> i32 {
    if exp.is_nan() {
        return 0;
    }
    exp.clamp(MIN_EXP as f64, MAX_EXP as f64) as i32
}

/// Multiples of `step` within `[lo, hi]`, indexed by integer so rounding at
/// large magnitudes cannot stall the walk. Empty when there would be too many.
fn linear_ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step + 1e-6).floor();
    let count = last - first + 1.0;
    if !count.is_finite() || count < 1.0 || count > MAX_TICKS {
        return Vec::new();
    }
    (0..count as usize).map(|k| (first + k as f64) * step).collect()
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        // Avoid "-0"
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Fixed margins sized for one title line and one label per axis.
    pub fn standard(canvas: &Canvas) -> Self {
        let (left, right, top, bottom) = (56.0, 14.0, 28.0, 40.0);
        Self {
            left,
            top,
            width: (canvas.width - left - right).max(50.0),
            height: (canvas.height - top - bottom).max(50.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStyle {
    Solid,
    Dashed,
}

impl GridStyle {
    fn line_style(&self) -> LineStyle {
        match self {
            GridStyle::Solid => LineStyle::solid(color::GRID, 0.8),
            GridStyle::Dashed => LineStyle::dashed(color::GRID.with_alpha(0.4), 0.8),
        }
    }
}

const TICK_LENGTH: f64 = 3.5;
const TICK_FONT: f64 = 8.0;
const LABEL_FONT: f64 = 10.0;
const TITLE_FONT: f64 = 12.0;

/// Draw frame, outward ticks, grid, tick labels, axis labels and title.
pub fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    grid: GridStyle,
    title: &str,
) {
    let frame_color: Color = color::BLACK;
    let tick_style = LineStyle::solid(frame_color, 0.8);
    let grid_style = grid.line_style();

    let x_label_style =
        TextStyle::sized(TICK_FONT).anchored(TextAnchor::Middle, TextBaseline::Hanging);
    for (val, label) in x_axis.tick_positions.iter().zip(&x_axis.tick_labels) {
        let px = x_axis.data_to_pixel(*val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.top, px, area.bottom(), &grid_style);
        canvas.line(px, area.bottom(), px, area.bottom() + TICK_LENGTH, &tick_style);
        canvas.text(px, area.bottom() + TICK_LENGTH + 2.0, label, &x_label_style);
    }

    let y_label_style = TextStyle::sized(TICK_FONT).anchored(TextAnchor::End, TextBaseline::Central);
    for (val, label) in y_axis.tick_positions.iter().zip(&y_axis.tick_labels) {
        let py = y_axis.data_to_pixel(*val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.right(), py, &grid_style);
        canvas.line(area.left, py, area.left - TICK_LENGTH, py, &tick_style);
        canvas.text(area.left - TICK_LENGTH - 2.0, py, label, &y_label_style);
    }

    canvas.rect(area.left, area.top, area.width, area.height, &Style::stroked(frame_color, 0.8));

    let label_style = TextStyle::sized(LABEL_FONT).anchored(TextAnchor::Middle, TextBaseline::Alphabetic);
    if !x_axis.label.is_empty() {
        let y = area.bottom() + TICK_LENGTH + TICK_FONT + 16.0;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.label, &label_style);
    }
    if !y_axis.label.is_empty() {
        let x = area.left - 40.0;
        let y = area.top + area.height / 2.0;
        canvas.text_rotated(x, y, &y_axis.label, &label_style, -90.0);
    }

    if !title.is_empty() {
        let title_style = TextStyle::sized(TITLE_FONT).anchored(TextAnchor::Middle, TextBaseline::Alphabetic);
        canvas.text(area.left + area.width / 2.0, area.top - 8.0, title, &title_style);
    }
}
