//! Minimal chart rendering: an SVG canvas with scatter/line/text primitives,
//! axes layout, and PNG rasterization.

pub mod axes;
pub mod canvas;
pub mod chart;
pub mod color;
pub mod png;
pub mod primitives;
