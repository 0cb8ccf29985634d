//! Binomial coefficients

use crate::error::{error_codes, CodingError, CodingResult};

/// Number of ways to choose `i` positions out of `n`, C(i, n).
///
/// Computed with the multiplicative formula in 128-bit arithmetic, so the
/// result is exact; it fails rather than wraps once it no longer fits in a
/// `u64` (the first such row is n = 68).
///
/// # Errors
///
/// `InvalidParameter` if `i > n`, `Overflow` if the result exceeds `u64::MAX`.
pub fn binomial(i: usize, n: usize) -> CodingResult<u64> {
    if i > n {
        return Err(CodingError::invalid_parameter(
            "i",
            &format!("0 <= i <= n = {}", n),
            &i.to_string(),
            error_codes::BINOMIAL_OUT_OF_RANGE,
        ));
    }

    let k = i.min(n - i);
    let mut result: u128 = 1;
    for j in 0..k {
        // C(n, j) * (n - j) / (j + 1) = C(n, j + 1), always exact
        result = result * (n - j) as u128 / (j + 1) as u128;
        if result > u64::MAX as u128 {
            return Err(CodingError::overflow(
                "binomial",
                &format!("C({}, {}) exceeds u64::MAX", i, n),
                error_codes::BINOMIAL_OVERFLOW,
            ));
        }
    }

    Ok(result as u64)
}

/// Every coefficient C(i, n) for `i = 0..=n`
pub fn binomial_row(n: usize) -> CodingResult<Vec<u64>> {
    (0..=n).map(|i| binomial(i, n)).collect()
}
