//! Decimal rounding shared by the score and timing helpers

/// Smallest magnitude at which every f64 is an integer (2^52)
const MIN_INTEGRAL: f64 = 4_503_599_627_370_496.0;

/// Round `value` to `decimals` places after the decimal point
///
/// Ties round away from zero (`f64::round`). Non-finite inputs pass through,
/// as do values too large to carry a fractional part.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if value.abs() >= MIN_INTEGRAL {
        return value;
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_three_places() {
        assert_eq!(round_to(9.0 / 7.0, 3), 1.286);
        assert_eq!(round_to(10.0 / 11.0, 3), 0.909);
        assert_eq!(round_to(2.0, 3), 2.0);
    }

    #[test]
    fn test_round_to_ties_away_from_zero() {
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_round_to_negative() {
        assert_eq!(round_to(-1.23456, 2), -1.23);
    }

    #[test]
    fn test_round_to_large_values_unchanged() {
        assert_eq!(round_to(2e306, 3), 2e306);
        assert_eq!(round_to(-f64::MAX, 3), -f64::MAX);
        assert_eq!(round_to(4_503_599_627_370_497.0, 3), 4_503_599_627_370_497.0);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
        assert!(round_to(f64::NAN, 3).is_nan());
    }
}
