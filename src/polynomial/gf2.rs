//! Polynomial arithmetic in GF(2)[x]
//!
//! A polynomial is packed into a `u64`: bit `i` (from the low end) is the
//! coefficient of x^i. Addition and subtraction are both XOR, so long
//! division never borrows and multiplication never carries.

use crate::error::{error_codes, CodingError, CodingResult};

/// Number of significant bits in `value`.
///
/// Zero is written as a single `0` digit, so its bit-length is 1.
#[inline]
pub const fn bit_length(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (u64::BITS - value.leading_zeros()) as usize
    }
}

/// Degree of a polynomial, `None` for the zero polynomial
#[inline]
pub const fn degree(value: u64) -> Option<usize> {
    if value == 0 {
        None
    } else {
        Some(bit_length(value) - 1)
    }
}

/// Hamming weight: the number of set bits
#[inline]
pub const fn popcount(value: u64) -> u32 {
    value.count_ones()
}

/// Long division over GF(2) without validating the divisor.
///
/// Walks the dividend from its top bit down; whenever the bit aligned with
/// the divisor's leading term is set, the shifted divisor is XORed out and
/// the matching quotient bit is recorded. The caller guarantees
/// `divisor != 0`.
#[inline]
pub(crate) fn long_division(dividend: u64, divisor: u64) -> (u64, u64) {
    let divisor_len = bit_length(divisor);
    let dividend_len = bit_length(dividend);
    if dividend_len < divisor_len {
        return (0, dividend);
    }

    let mut quotient = 0u64;
    let mut remainder = dividend;
    for shift in (0..=dividend_len - divisor_len).rev() {
        if (remainder >> (shift + divisor_len - 1)) & 1 == 1 {
            remainder ^= divisor << shift;
            quotient |= 1 << shift;
        }
    }

    (quotient, remainder)
}

/// Divide `dividend` by `divisor` in GF(2)[x].
///
/// Returns `(quotient, remainder)` with
/// `bit_length(remainder) < bit_length(divisor)` whenever the divisor has
/// degree at least 1. A dividend shorter than the divisor comes back
/// unchanged as the remainder with a zero quotient.
///
/// # Errors
///
/// `CodingError::InvalidDivisor` if `divisor` is zero.
///
/// # Example
///
/// ```
/// use gf2_cyclic::polynomial::gf2_divide;
///
/// // (x^6 + x^4) / (x^3 + x + 1) = x^3 + 1, remainder x + 1
/// let (quotient, remainder) = gf2_divide(0b1010000, 0b1011).unwrap();
/// assert_eq!(quotient, 0b1001);
/// assert_eq!(remainder, 0b011);
/// ```
pub fn gf2_divide(dividend: u64, divisor: u64) -> CodingResult<(u64, u64)> {
    if divisor == 0 {
        return Err(CodingError::invalid_divisor("gf2_divide"));
    }
    Ok(long_division(dividend, divisor))
}

/// Remainder of `dividend` modulo `divisor` in GF(2)[x]
pub fn gf2_remainder(dividend: u64, divisor: u64) -> CodingResult<u64> {
    gf2_divide(dividend, divisor).map(|(_, remainder)| remainder)
}

/// Carry-less product of two polynomials.
///
/// # Errors
///
/// `CodingError::Overflow` if the product's degree would exceed 63.
pub fn gf2_multiply(a: u64, b: u64) -> CodingResult<u64> {
    let (deg_a, deg_b) = match (degree(a), degree(b)) {
        (Some(deg_a), Some(deg_b)) => (deg_a, deg_b),
        _ => return Ok(0),
    };
    if deg_a + deg_b >= u64::BITS as usize {
        return Err(CodingError::overflow(
            "gf2_multiply",
            &format!(
                "product degree {} does not fit in 64 bits",
                deg_a + deg_b
            ),
            error_codes::PRODUCT_TOO_WIDE,
        ));
    }

    let mut product = 0u64;
    let mut shifted = a;
    let mut rest = b;
    while rest != 0 {
        if rest & 1 == 1 {
            product ^= shifted;
        }
        shifted <<= 1;
        rest >>= 1;
    }

    Ok(product)
}
