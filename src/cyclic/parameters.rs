//! Code parameters
//!
//! A cyclic code is fixed by its generator g(x) and the message length k;
//! the redundancy r and the codeword length n follow from them.

use serde::{Deserialize, Serialize};

use crate::error::{error_codes, CodingError, CodingResult};
use crate::polynomial::{BitVector, MAX_WIDTH};

/// Lengths describing an (n, k) cyclic code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeParameters {
    /// Information digits per message
    pub k: usize,

    /// Redundancy digits, the degree of g(x)
    pub r: usize,

    /// Codeword length, `k + r`
    pub n: usize,
}

impl CodeParameters {
    /// Derive the parameters for messages of `k` digits under `generator`.
    ///
    /// The generator is read most significant coefficient first and r is
    /// taken from its width, so its leading digit must be `1` for r to be
    /// deg g(x). Its width must be at least 2.
    pub fn for_generator(generator: &BitVector, k: usize) -> CodingResult<Self> {
        if generator.value() == 0 {
            return Err(CodingError::invalid_divisor("generator polynomial"));
        }
        if !generator.has_leading_one() {
            return Err(CodingError::invalid_parameter(
                "generator",
                "a leading '1' digit",
                &generator.to_string(),
                error_codes::INVALID_GENERATOR,
            ));
        }
        let r = generator.width() - 1;
        if r == 0 {
            return Err(CodingError::invalid_parameter(
                "generator",
                "degree at least 1",
                &generator.to_string(),
                error_codes::INVALID_GENERATOR,
            ));
        }
        if k == 0 {
            return Err(CodingError::invalid_parameter(
                "message length",
                "at least one information digit",
                "0",
                error_codes::INVALID_MESSAGE,
            ));
        }

        let n = k + r;
        if n > MAX_WIDTH {
            return Err(CodingError::overflow(
                "code parameters",
                &format!("n = {} + {} exceeds {} bits", k, r, MAX_WIDTH),
                error_codes::BIT_VECTOR_TOO_WIDE,
            ));
        }

        Ok(Self { k, r, n })
    }

    /// Code rate k / n
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }
}
