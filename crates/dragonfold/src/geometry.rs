//! Core geometry types: points, rotation matrices, bounding boxes.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by an offset vector.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 2x2 matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
}

impl Mat2 {
    #[inline]
    pub fn new(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self { m00, m01, m10, m11 }
    }

    /// Apply the matrix to a point (matrix-vector product).
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m00 * p.x + self.m01 * p.y,
            self.m10 * p.x + self.m11 * p.y,
        )
    }
}

/// Build the standard counter-clockwise rotation matrix for an angle
/// in radians:
///
/// ```text
/// [ cos θ  -sin θ ]
/// [ sin θ   cos θ ]
/// ```
pub fn rotation_matrix(angle: f64) -> Mat2 {
    let (sin, cos) = angle.sin_cos();
    Mat2::new(cos, -sin, sin, cos)
}

/// Get the bounding box of a point sequence as (min_x, min_y, max_x, max_y).
///
/// Returns `None` for an empty sequence.
pub fn bounding_box(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn rotation_zero_is_identity() {
        let mat = rotation_matrix(0.0);
        assert!((mat.m00 - 1.0).abs() < EPS);
        assert!(mat.m01.abs() < EPS);
        assert!(mat.m10.abs() < EPS);
        assert!((mat.m11 - 1.0).abs() < EPS);
    }

    #[test]
    fn quarter_turn_maps_east_to_north() {
        let mat = rotation_matrix(PI / 2.0);
        let p = mat.apply(Point::new(1.0, 0.0));
        assert!(p.x.abs() < EPS, "expected x = 0, got {}", p.x);
        assert!((p.y - 1.0).abs() < EPS, "expected y = 1, got {}", p.y);
    }

    #[test]
    fn negative_angle_rotates_clockwise() {
        let mat = rotation_matrix(-PI / 2.0);
        let p = mat.apply(Point::new(1.0, 0.0));
        assert!(p.x.abs() < EPS);
        assert!((p.y + 1.0).abs() < EPS);
    }

    #[test]
    fn bbox_of_points() {
        let points = vec![
            Point::new(-1.0, 2.0),
            Point::new(3.0, -4.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(bounding_box(&points), Some((-1.0, -4.0, 3.0, 2.0)));
    }

    #[test]
    fn bbox_of_empty_slice() {
        assert_eq!(bounding_box(&[]), None);
    }
}
