//! Shared arithmetic for projections and deltas.

/// Percent change from `old` to `new`.
///
/// Unguarded: `old == 0.0` yields NaN or an infinity, which callers render
/// as `n/a`.
pub fn pct_change(new: f64, old: f64) -> f64 {
    (new - old) / old * 100.0
}

/// Share of `part` in `whole`, in percent.
pub fn pct_of(part: f64, whole: f64) -> f64 {
    part / whole * 100.0
}

/// Round half-way cases up (towards positive infinity).
///
/// `f64::round` rounds half away from zero; day counts use the
/// half-up convention so that -2.5 becomes -2.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_change_basic() {
        assert!((pct_change(106_250.0, 85_000.0) - 25.0).abs() < 1e-9);
        assert!((pct_change(38_250.0, 17_000.0) - 125.0).abs() < 1e-9);
        assert!((pct_change(50.0, 100.0) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn pct_change_from_zero_is_not_finite() {
        assert!(pct_change(10.0, 0.0).is_infinite());
        assert!(pct_change(0.0, 0.0).is_nan());
    }

    #[test]
    fn round_half_up_matches_convention() {
        assert_eq!(round_half_up(24.0), 24.0);
        assert_eq!(round_half_up(23.5), 24.0);
        assert_eq!(round_half_up(23.49), 23.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }
}
