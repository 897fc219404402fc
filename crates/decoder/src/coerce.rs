//! Numeric coercion for 64-bit integers carried on the wire as doubles.
//!
//! The encoder writes `long` values as JSON numbers that the client runtime
//! reads as IEEE-754 doubles. Decoding reads the double and rounds it back,
//! so only magnitudes up to 2^53 round-trip exactly. Larger values are
//! accepted and silently lose precision.

/// Largest magnitude every integer up to which is exactly representable (2^53).
pub const MAX_EXACT_LONG: f64 = 9_007_199_254_740_992.0;

/// Round a double to the nearest `i64`, ties to even.
///
/// Exact for `|value| <= 2^53`. Values outside the `i64` range saturate.
pub fn to_long(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Whether [`to_long`] is guaranteed exact for this value.
pub fn is_exact_long(value: f64) -> bool {
    value.abs() <= MAX_EXACT_LONG
}
