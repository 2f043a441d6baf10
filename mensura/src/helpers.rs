//! Small numeric helpers for the concrete quantity types in this crate.

/// Floored quotient and remainder, matching `divmod` semantics: the
/// quotient rounds toward negative infinity and the remainder takes the
/// sign of the divisor.
pub(crate) fn div_rem(a: f64, b: f64) -> (f64, f64) {
    let quotient = (a / b).floor();
    (quotient, a - quotient * b)
}

/// Bit pattern used for hashing a magnitude. Collapses -0.0 onto 0.0 so
/// that equal magnitudes hash equally.
pub(crate) fn hashable_bits(value: f64) -> u64 {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits()
}
