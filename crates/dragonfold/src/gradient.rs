//! Color gradients for shading the curve fold by fold.
//!
//! The renderer colors the polyline in `folds + 1` contiguous runs, one
//! per fold generation, sampling the chosen gradient at evenly spaced
//! positions. Gradients are a closed enumeration so an unrecognized name
//! is an explicit `None` at the lookup, never a silent default.

use crate::folds::nb_corners;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex color string for SVG attributes, e.g. `#ff7f0e`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Anchor stops for the viridis colormap, evenly spaced over [0, 1].
const VIRIDIS: &[Rgb] = &[
    Rgb::new(68, 1, 84),
    Rgb::new(59, 82, 139),
    Rgb::new(33, 145, 140),
    Rgb::new(94, 201, 98),
    Rgb::new(253, 231, 37),
];

/// Anchor stops for the inferno colormap, evenly spaced over [0, 1].
const INFERNO: &[Rgb] = &[
    Rgb::new(0, 0, 4),
    Rgb::new(87, 16, 110),
    Rgb::new(188, 55, 84),
    Rgb::new(249, 142, 9),
    Rgb::new(252, 255, 164),
];

/// Anchor stops for the cool colormap (cyan to magenta).
const COOL: &[Rgb] = &[Rgb::new(0, 255, 255), Rgb::new(255, 0, 255)];

/// The tab20 categorical palette (20 distinct colors).
const TAB: &[Rgb] = &[
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xae, 0xc7, 0xe8),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0xff, 0xbb, 0x78),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0x98, 0xdf, 0x8a),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0xff, 0x98, 0x96),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0xc5, 0xb0, 0xd5),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xc4, 0x9c, 0x94),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0xf7, 0xb6, 0xd2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xc7, 0xc7, 0xc7),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0xdb, 0xdb, 0x8d),
    Rgb::new(0x17, 0xbe, 0xcf),
    Rgb::new(0x9e, 0xda, 0xe5),
];

/// Available color gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    Viridis,
    Inferno,
    Cool,
    Tab,
}

impl Gradient {
    /// Get all available gradients.
    pub fn all() -> &'static [Gradient] {
        &[
            Gradient::Viridis,
            Gradient::Inferno,
            Gradient::Cool,
            Gradient::Tab,
        ]
    }

    /// Get gradient name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Gradient::Viridis => "viridis",
            Gradient::Inferno => "inferno",
            Gradient::Cool => "cool",
            Gradient::Tab => "tab",
        }
    }

    /// Parse gradient from string. Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Gradient> {
        match name.to_lowercase().as_str() {
            "viridis" => Some(Gradient::Viridis),
            "inferno" => Some(Gradient::Inferno),
            "cool" => Some(Gradient::Cool),
            "tab" | "tab20" => Some(Gradient::Tab),
            _ => None,
        }
    }

    /// Sample the gradient at `t` in [0, 1] (clamped).
    ///
    /// Smooth gradients interpolate linearly between anchor stops; the
    /// tab palette is categorical and snaps to one of its 20 entries.
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        match self {
            Gradient::Viridis => lerp_stops(VIRIDIS, t),
            Gradient::Inferno => lerp_stops(INFERNO, t),
            Gradient::Cool => lerp_stops(COOL, t),
            Gradient::Tab => {
                let idx = ((t * TAB.len() as f64) as usize).min(TAB.len() - 1);
                TAB[idx]
            }
        }
    }

    /// One color per fold generation: `folds + 1` samples evenly spaced
    /// over [0, 1].
    pub fn segment_colors(&self, folds: u32) -> Vec<Rgb> {
        let n = folds as usize + 1;
        if n == 1 {
            return vec![self.sample(0.0)];
        }
        (0..n)
            .map(|k| self.sample(k as f64 / (n - 1) as f64))
            .collect()
    }
}

/// Linear interpolation across evenly spaced color stops.
fn lerp_stops(stops: &[Rgb], t: f64) -> Rgb {
    let last = stops.len() - 1;
    let scaled = t * last as f64;
    let i = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - i as f64;

    let a = stops[i];
    let b = stops[i + 1];
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Inclusive point-index ranges partitioning a curve of `folds` folds
/// into `folds + 1` contiguous runs, one per fold generation.
///
/// Run 0 is the initial strip `[0, 1]`; run k covers the points added at
/// fold k, `[2^(k-1), 2^k]`. The shared boundary point appears in both
/// adjacent runs so the drawn segments connect.
pub fn segment_bounds(folds: u32) -> Vec<(usize, usize)> {
    let mut bounds = Vec::with_capacity(folds as usize + 1);
    bounds.push((0, 1));
    for k in 1..=folds {
        let start = nb_corners(k - 1) as usize + 1;
        let end = nb_corners(k) as usize + 1;
        bounds.push((start, end));
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for g in Gradient::all() {
            assert_eq!(Gradient::from_name(g.name()), Some(*g));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Gradient::from_name("VIRIDIS"), Some(Gradient::Viridis));
        assert_eq!(Gradient::from_name("Tab20"), Some(Gradient::Tab));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(Gradient::from_name("plasma"), None);
        assert_eq!(Gradient::from_name(""), None);
    }

    #[test]
    fn sample_hits_the_endpoints() {
        assert_eq!(Gradient::Viridis.sample(0.0), VIRIDIS[0]);
        assert_eq!(Gradient::Viridis.sample(1.0), VIRIDIS[VIRIDIS.len() - 1]);
        assert_eq!(Gradient::Cool.sample(0.0), Rgb::new(0, 255, 255));
        assert_eq!(Gradient::Cool.sample(1.0), Rgb::new(255, 0, 255));
    }

    #[test]
    fn sample_clamps_out_of_range() {
        assert_eq!(Gradient::Cool.sample(-1.0), Gradient::Cool.sample(0.0));
        assert_eq!(Gradient::Cool.sample(2.0), Gradient::Cool.sample(1.0));
    }

    #[test]
    fn cool_midpoint_is_halfway() {
        let mid = Gradient::Cool.sample(0.5);
        assert_eq!(mid, Rgb::new(128, 128, 255));
    }

    #[test]
    fn tab_is_categorical() {
        assert_eq!(Gradient::Tab.sample(0.0), TAB[0]);
        assert_eq!(Gradient::Tab.sample(1.0), TAB[19]);
        // Values inside a bucket snap to the same entry
        assert_eq!(Gradient::Tab.sample(0.01), Gradient::Tab.sample(0.04));
    }

    #[test]
    fn one_color_per_fold_generation() {
        for f in 0..=6u32 {
            assert_eq!(Gradient::Inferno.segment_colors(f).len(), f as usize + 1);
        }
    }

    #[test]
    fn bounds_partition_the_polyline() {
        for f in 0..=8u32 {
            let bounds = segment_bounds(f);
            assert_eq!(bounds.len(), f as usize + 1);
            assert_eq!(bounds[0].0, 0);
            // Last range ends at the final point index, 2^f
            assert_eq!(bounds[bounds.len() - 1].1 as u64, (1u64 << f));
            // Adjacent ranges share exactly one boundary point
            for pair in bounds.windows(2) {
                assert_eq!(pair[0].1, pair[1].0);
            }
            // Every range holds at least one drawable segment
            for (start, end) in &bounds {
                assert!(end > start);
            }
        }
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb::new(255, 127, 14).to_hex(), "#ff7f0e");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }
}
