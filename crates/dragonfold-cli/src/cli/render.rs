//! PNG rasterization using resvg.

use resvg::usvg;
use tiny_skia::Pixmap;

use super::common::VIEWPORT;

/// Fixed output filename for `--save`.
pub const PNG_FILENAME: &str = "dragon_curve.png";

/// Fixed PNG edge length in pixels.
pub const PNG_SIZE: u32 = 2000;

/// Error type for PNG rendering.
#[derive(Debug)]
pub enum RenderError {
    Parse(String),
    Pixmap,
    Save(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Parse(msg) => write!(f, "SVG parse error: {}", msg),
            RenderError::Pixmap => write!(f, "Failed to allocate pixmap"),
            RenderError::Save(msg) => write!(f, "Failed to save PNG: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Rasterize an SVG document to a square PNG at the fixed resolution.
pub fn render_png(svg_content: &str, path: &str) -> Result<(), RenderError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| RenderError::Parse(e.to_string()))?;

    let mut pixmap = Pixmap::new(PNG_SIZE, PNG_SIZE).ok_or(RenderError::Pixmap)?;

    let scale = PNG_SIZE as f32 / VIEWPORT as f32;
    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .map_err(|e| RenderError::Save(e.to_string()))
}
