//! # dragonfold
//!
//! Generate the plane-filling "dragon curve" produced by iteratively
//! folding a strip of paper, plus the combinatorial relations between
//! fold counts and corner counts and the color gradients used to shade
//! the curve fold-by-fold.
//!
//! The library is pure: every function either computes a value or builds
//! and returns a fresh polyline. Rendering lives in the CLI crate.

pub mod curve;
pub mod folds;
pub mod geometry;
pub mod gradient;

// Re-export common types at crate root for convenience.
pub use curve::generate_dragon_curve;
pub use folds::{FoldPolicy, is_even, nb_corners, nb_folds, nb_points};
pub use geometry::{Mat2, Point, bounding_box, rotation_matrix};
pub use gradient::{Gradient, Rgb};
