//! Integer helpers for beat subdivisions.

use num::Integer;

/// Calculates the greatest common divisor of two numbers using Euclid's algorithm.
#[must_use]
pub const fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Multiplies `total` by `numerator / denominator`, returning the quotient only when it is an exact integer.
///
/// Returns `None` for a zero denominator or a remainder.
#[must_use]
pub fn exact_div(total: u64, numerator: u64, denominator: u64) -> Option<u64> {
    if denominator == 0 {
        return None;
    }
    let (quotient, remainder) = total.checked_mul(numerator)?.div_rem(&denominator);
    (remainder == 0).then_some(quotient)
}
