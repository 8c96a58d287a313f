//! Fold combinatorics - the numeric relations between fold counts and
//! corner counts, and the fold-direction policies.
//!
//! Folding a paper strip `f` times produces `2^f - 1` corners, so the
//! unfolded curve has `2^f + 1` vertices. Point counts grow exponentially;
//! callers should keep `folds` at roughly 25 or below.

/// Number of corners produced by a given number of paper strip folds:
/// `2^folds - 1`.
///
/// `folds` must be below 64 (the count overflows u64 beyond that).
#[inline]
pub fn nb_corners(folds: u32) -> u64 {
    (1u64 << folds) - 1
}

/// Number of polyline vertices after a given number of folds:
/// `2^folds + 1`, i.e. `nb_corners(folds) + 2`.
#[inline]
pub fn nb_points(folds: u32) -> u64 {
    nb_corners(folds) + 2
}

/// Number of folds performed to obtain a given number of corners:
/// `log2(corners + 1)`.
///
/// Exact powers-of-two-minus-one corner counts recover an integer fold
/// count (up to floating point); anything else returns a fractional
/// value, which signals that no integer fold count produces that many
/// corners. Inputs below -1 yield NaN per IEEE semantics.
#[inline]
pub fn nb_folds(corners: f64) -> f64 {
    (corners + 1.0).log2()
}

/// Whether a number is even. Correct for negative inputs.
#[inline]
pub fn is_even(num: i64) -> bool {
    num % 2 == 0
}

/// Fold-direction policy: which way each successive fold turns.
///
/// Resolved once into a direction sequence before the fold loop runs,
/// rather than branching inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldPolicy {
    /// Every fold turns the same way (+1).
    Constant,
    /// Folds alternate up and down: +1 on even steps, -1 on odd steps
    /// (0-indexed).
    Alternating,
}

impl FoldPolicy {
    /// Map the original boolean `alternate` flag onto a policy.
    pub fn from_alternate(alternate: bool) -> FoldPolicy {
        if alternate {
            FoldPolicy::Alternating
        } else {
            FoldPolicy::Constant
        }
    }

    /// Resolve the policy into one signed unit direction per fold step.
    pub fn directions(&self, folds: u32) -> Vec<f64> {
        match self {
            FoldPolicy::Constant => vec![1.0; folds as usize],
            FoldPolicy::Alternating => (0..folds)
                .map(|f| if is_even(f as i64) { 1.0 } else { -1.0 })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_counts() {
        assert_eq!(nb_corners(0), 0);
        assert_eq!(nb_corners(1), 1);
        assert_eq!(nb_corners(2), 3);
        assert_eq!(nb_corners(3), 7);
        assert_eq!(nb_corners(4), 15);
    }

    #[test]
    fn point_counts() {
        assert_eq!(nb_points(0), 2);
        assert_eq!(nb_points(3), 9);
    }

    #[test]
    fn folds_corners_round_trip() {
        for f in 0..=20u32 {
            let corners = nb_corners(f) as f64;
            let recovered = nb_folds(corners);
            assert!(
                (recovered - f as f64).abs() < 1e-9,
                "round trip failed for {} folds: got {}",
                f,
                recovered
            );
        }
    }

    #[test]
    fn fractional_folds_for_unreachable_corner_counts() {
        // 4 corners is not 2^k - 1 for any integer k
        let f = nb_folds(4.0);
        assert!((f - f.round()).abs() > 1e-6);
    }

    #[test]
    fn even_check_handles_negatives() {
        assert!(is_even(0));
        assert!(is_even(2));
        assert!(!is_even(1));
        assert!(is_even(-2));
        assert!(!is_even(-3));
    }

    #[test]
    fn constant_policy_directions() {
        assert_eq!(FoldPolicy::Constant.directions(4), vec![1.0, 1.0, 1.0, 1.0]);
        assert!(FoldPolicy::Constant.directions(0).is_empty());
    }

    #[test]
    fn alternating_policy_directions() {
        assert_eq!(
            FoldPolicy::Alternating.directions(5),
            vec![1.0, -1.0, 1.0, -1.0, 1.0]
        );
    }

    #[test]
    fn policy_from_flag() {
        assert_eq!(FoldPolicy::from_alternate(false), FoldPolicy::Constant);
        assert_eq!(FoldPolicy::from_alternate(true), FoldPolicy::Alternating);
    }
}
