//! Common utilities shared across CLI commands.

use dragonfold::gradient::segment_bounds;
use dragonfold::{Gradient, Point, bounding_box};

/// Square SVG viewport edge length in user units.
pub const VIEWPORT: f64 = 1000.0;

/// Padding between the curve and the viewport edge.
pub const PADDING: f64 = 40.0;

/// Solid stroke color used when no gradient is selected.
pub const SOLID_STROKE: &str = "#ff7f0e";

/// Parse a required fold count argument, exiting with an error message
/// on anything that is not a non-negative integer.
pub fn parse_folds(arg: Option<&String>) -> u32 {
    let raw = arg.unwrap_or_else(|| {
        eprintln!("Error: fold count required");
        std::process::exit(1);
    });
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid fold count: {} (expected a non-negative integer)", raw);
        std::process::exit(1);
    })
}

/// Styling options for SVG output.
pub struct DrawStyle {
    pub gradient: Option<Gradient>,
    pub background: String,
    pub stroke_width: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            gradient: None,
            background: "black".to_string(),
            stroke_width: 2.0,
        }
    }
}

/// Convert the curve polyline to an SVG document.
///
/// The curve is scaled to fit the square viewport with padding and the
/// y axis is flipped so the output matches plot orientation. In gradient
/// mode the polyline is split into one `<polyline>` per fold generation,
/// colored by evenly spaced gradient samples; otherwise a single solid
/// polyline is emitted.
pub fn curve_to_svg(points: &[Point], folds: u32, style: &DrawStyle) -> String {
    let (min_x, min_y, max_x, max_y) =
        bounding_box(points).unwrap_or((0.0, 0.0, 1.0, 1.0));

    // Degenerate spans (e.g. the zero-fold strip) still need a finite scale.
    let span_x = (max_x - min_x).max(1e-9);
    let span_y = (max_y - min_y).max(1e-9);
    let avail = VIEWPORT - PADDING * 2.0;
    let scale = (avail / span_x).min(avail / span_y);

    let center_x = (min_x + max_x) / 2.0;
    let center_y = (min_y + max_y) / 2.0;

    let map = |p: &Point| {
        (
            VIEWPORT / 2.0 + (p.x - center_x) * scale,
            VIEWPORT / 2.0 - (p.y - center_y) * scale,
        )
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
<rect width="100%" height="100%" fill="{}"/>
"#,
        VIEWPORT, VIEWPORT, VIEWPORT, VIEWPORT, style.background
    ));

    match style.gradient {
        Some(gradient) => {
            let colors = gradient.segment_colors(folds);
            let bounds = segment_bounds(folds);
            for ((start, end), color) in bounds.iter().zip(&colors) {
                push_polyline(
                    &mut svg,
                    &points[*start..=*end],
                    &color.to_hex(),
                    style.stroke_width,
                    map,
                );
            }
        }
        None => {
            push_polyline(&mut svg, points, SOLID_STROKE, style.stroke_width, map);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Append one `<polyline>` element for a run of points.
fn push_polyline<F>(svg: &mut String, points: &[Point], stroke: &str, width: f64, map: F)
where
    F: Fn(&Point) -> (f64, f64),
{
    let coords: String = points
        .iter()
        .map(|p| {
            let (x, y) = map(p);
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    svg.push_str(&format!(
        "  <polyline points=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\" fill=\"none\"/>\n",
        coords, stroke, width
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragonfold::{FoldPolicy, generate_dragon_curve};
    use std::f64::consts::PI;

    fn classic(folds: u32) -> Vec<Point> {
        generate_dragon_curve(folds, PI / 2.0, FoldPolicy::Constant)
    }

    #[test]
    fn solid_mode_emits_one_polyline() {
        let svg = curve_to_svg(&classic(4), 4, &DrawStyle::default());
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains(SOLID_STROKE));
        assert!(svg.contains("fill=\"black\""));
    }

    #[test]
    fn gradient_mode_emits_one_polyline_per_generation() {
        let style = DrawStyle {
            gradient: Some(Gradient::Viridis),
            ..DrawStyle::default()
        };
        let svg = curve_to_svg(&classic(5), 5, &style);
        assert_eq!(svg.matches("<polyline").count(), 6);
    }

    #[test]
    fn zero_folds_renders_without_blowing_up() {
        // Flat bounding box exercises the degenerate-span guard
        let svg = curve_to_svg(&classic(0), 0, &DrawStyle::default());
        assert!(svg.contains("<polyline"));
        assert!(!svg.contains("inf"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn background_color_is_applied() {
        let style = DrawStyle {
            background: "white".to_string(),
            ..DrawStyle::default()
        };
        let svg = curve_to_svg(&classic(2), 2, &style);
        assert!(svg.contains("fill=\"white\""));
    }
}
