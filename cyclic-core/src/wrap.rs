//! Cyclic wrap law.
//!
//! Every input path (typed values, increments, pointer drags) folds raw values
//! back into the domain with the same Euclidean rule:
//!
//! ```text
//! wrap(raw) = min + (raw - min) mod (max - min)      result in [min, max)
//! ```
//!
//! Negative offsets wrap to the top of the range rather than keeping their
//! sign, and a nonzero `min` is honored by both typed and dragged input.

/// Wrap `raw` into `[min, max)`.
///
/// Callers guarantee `max > min` and finite inputs; [`crate::SliderDomain`]
/// enforces this at construction.
pub fn wrap(raw: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let wrapped = min + (raw - min).rem_euclid(range);
    // rem_euclid can round up to exactly `range` for tiny negative offsets.
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}

/// Wrap relative to zero: `raw` mod `max`, always in `[0, max)`.
pub fn wrap_simple(raw: f64, max: f64) -> f64 {
    wrap(raw, 0.0, max)
}

/// Round to the nearest integer, ties toward positive infinity (`-2.5 -> -2`).
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_inside_range() {
        for v in [0.0, 1.0, 45.0, 359.0, 359.5] {
            assert_eq!(wrap_simple(v, 360.0), v);
        }
    }

    #[test]
    fn above_max_folds_back() {
        assert_eq!(wrap_simple(370.0, 360.0), 10.0);
        assert_eq!(wrap_simple(720.0, 360.0), 0.0);
        assert_eq!(wrap_simple(20.0, 10.0), 0.0);
    }

    #[test]
    fn negative_raw_lands_at_top() {
        assert_eq!(wrap_simple(-2.0, 10.0), 8.0);
        assert_eq!(wrap_simple(-360.0, 360.0), 0.0);
    }

    #[test]
    fn symmetric_range_wraps_both_ways() {
        assert_eq!(wrap(190.0, -180.0, 180.0), -170.0);
        assert_eq!(wrap(-190.0, -180.0, 180.0), 170.0);
        assert_eq!(wrap(180.0, -180.0, 180.0), -180.0);
    }

    #[test]
    fn offset_range_honors_min() {
        assert_eq!(wrap(210.0, 100.0, 200.0), 110.0);
        assert_eq!(wrap(90.0, 100.0, 200.0), 190.0);
    }

    #[test]
    fn fractional_values() {
        assert_eq!(wrap(10.5, 0.0, 10.0), 0.5);
        assert_eq!(wrap(3.5, 0.0, 10.0), 3.5);
    }

    #[test]
    fn tiny_negative_never_returns_max() {
        let w = wrap(-1e-18, 0.0, 360.0);
        assert!((0.0..360.0).contains(&w));
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.4), 0.0);
    }

    #[test]
    fn near_ties_round_down() {
        let below_half = 0.5 - f64::EPSILON / 4.0;
        assert_eq!(below_half, 0.49999999999999994);
        assert_eq!(round_half_up(below_half), 0.0);
        assert_eq!(round_half_up(-below_half), 0.0);
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(4503599627370495.5), 4503599627370496.0);
    }
}
