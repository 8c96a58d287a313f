//! Dragon curve construction.
//!
//! The curve is grown from a unit segment by repeating the paper-fold
//! recurrence: rotate the whole polyline by the fold angle, re-anchor the
//! rotated copy onto the shared endpoint, and append it in reverse order.
//! Each step doubles the point count minus one, so after `folds` steps
//! the polyline has exactly `2^folds + 1` vertices.

use crate::folds::FoldPolicy;
use crate::geometry::{Point, rotation_matrix};

/// Calculate the dragon curve polyline for a number of paper strip folds.
///
/// * `folds` - how many times the strip is folded; the output has
///   `2^folds + 1` points, so keep this at roughly 25 or below.
/// * `angle` - the turn angle in radians applied at each fold; `PI / 2`
///   gives the classic dragon curve. An angle of 0 (or any multiple of
///   2π) is accepted and produces a collinear, visually degenerate
///   polyline.
/// * `policy` - whether successive folds all turn the same way or
///   alternate.
///
/// The result always starts at the origin with a unit first segment;
/// `folds = 0` returns `[(0,0), (1,0)]` unchanged. The construction is
/// deterministic: identical inputs give identical output.
pub fn generate_dragon_curve(folds: u32, angle: f64, policy: FoldPolicy) -> Vec<Point> {
    let mut points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];

    for direction in policy.directions(folds) {
        points = fold_once(&points, direction * angle);
    }

    points
}

/// Perform one fold step: append a rotated mirror of the polyline.
///
/// The rotated copy is translated so its final point lands back on the
/// unrotated polyline's final point, then walked in reverse. The shared
/// endpoint is skipped so it appears only once, giving `2n - 1` points.
fn fold_once(points: &[Point], angle: f64) -> Vec<Point> {
    let rot = rotation_matrix(angle);

    // Re-anchor: the rotated last point must coincide with the original
    // last point, which becomes the pivot corner of the new fold.
    let anchor = points[points.len() - 1];
    let rotated_anchor = rot.apply(anchor);
    let dx = anchor.x - rotated_anchor.x;
    let dy = anchor.y - rotated_anchor.y;

    let mut next = Vec::with_capacity(2 * points.len() - 1);
    next.extend_from_slice(points);

    for p in points.iter().rev().skip(1) {
        next.push(rot.apply(*p).translate(dx, dy));
    }

    next
}
