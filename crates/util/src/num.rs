//! Floating-point formatting for the JSON wire format.

/// Format a finite `f64` as the shortest decimal text that re-parses to the
/// identical value.
///
/// The round-trip guarantee comes from `ryu`. Inputs must be finite; callers
/// check before delegating here.
///
/// # Examples
///
/// ```
/// use json_tree_util::num::format_f64;
///
/// assert_eq!(format_f64(1.5), "1.5");
/// assert_eq!(format_f64(-0.25), "-0.25");
/// ```
pub fn format_f64(f: f64) -> String {
    debug_assert!(f.is_finite());
    let mut buf = ryu::Buffer::new();
    buf.format_finite(f).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_F64_3_14: f64 = 314.0 / 100.0;

    #[test]
    fn formats_simple_fractions() {
        assert_eq!(format_f64(1.5), "1.5");
        assert_eq!(format_f64(-2.5), "-2.5");
        assert_eq!(format_f64(TEST_F64_3_14), "3.14");
    }

    #[test]
    fn formats_integral_floats_with_fraction() {
        assert_eq!(format_f64(0.0), "0.0");
        assert_eq!(format_f64(3.0), "3.0");
        assert_eq!(format_f64(-1.0), "-1.0");
    }

    #[test]
    fn keeps_negative_zero() {
        assert_eq!(format_f64(-0.0), "-0.0");
    }

    #[test]
    fn round_trips_extremes() {
        for f in [
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            f64::EPSILON,
            5e-324,
            1e308,
            0.1,
            1.0 / 3.0,
        ] {
            let text = format_f64(f);
            let back: f64 = text.parse().unwrap();
            assert_eq!(back.to_bits(), f.to_bits(), "{} -> {}", f, text);
        }
    }
}
