//! Small numeric helpers shared by the quantity types.

/// Floored division, matching `divmod` semantics: the quotient is rounded
/// toward negative infinity.
pub(crate) fn div_floor(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

/// Floored quotient and remainder. The remainder takes the sign of the
/// divisor, so `div_rem(-5.0, 2.0)` is `(-3.0, 1.0)`.
pub(crate) fn div_rem(a: f64, b: f64) -> (f64, f64) {
    let quotient = div_floor(a, b);
    (quotient, a - quotient * b)
}

/// Bit pattern used for hashing a magnitude. Collapses -0.0 onto 0.0 so
/// that equal magnitudes hash equally.
pub(crate) fn hashable_bits(value: f64) -> u64 {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_rem_positive() {
        let (quotient, remainder) = div_rem(7.0, 2.0);
        assert_eq!(3.0, quotient);
        assert_eq!(1.0, remainder);
    }

    #[test]
    fn test_div_rem_negative_dividend() {
        // Floored semantics: -5 / 2 rounds down to -3, remainder 1.
        let (quotient, remainder) = div_rem(-5.0, 2.0);
        assert_eq!(-3.0, quotient);
        assert_eq!(1.0, remainder);
    }

    #[test]
    fn test_negative_zero_hashes_like_zero() {
        assert_eq!(hashable_bits(0.0), hashable_bits(-0.0));
    }
}
