use resvg::{tiny_skia, usvg};

use crate::error::{ArtifactError, Result};

/// Convert an SVG document to PNG bytes at the given DPI, on white.
pub fn svg_to_png(svg: &str, dpi: u32) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| ArtifactError::Render(e.to_string()))?;

    let scale = dpi as f32 / 72.0;
    let size = tree.size();
    let (w, h) = pixel_size(size.width(), size.height(), dpi);

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| ArtifactError::Render(format!("cannot allocate {}x{} pixmap", w, h)))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| ArtifactError::Render(e.to_string()))
}

/// Pixel dimensions of a canvas measured in points.
pub fn pixel_size(width_pt: f32, height_pt: f32, dpi: u32) -> (u32, u32) {
    let scale = dpi as f32 / 72.0;
    ((width_pt * scale).round() as u32, (height_pt * scale).round() as u32)
}
