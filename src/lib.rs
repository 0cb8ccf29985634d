/*!
 * GF(2) Cyclic Coding Library
 *
 * This crate implements cyclic redundancy coding over the binary field
 * GF(2), where addition and subtraction are both XOR.
 *
 * The main building blocks are:
 *
 * - Polynomial arithmetic on integer-packed binary polynomials
 *   (bit-length, popcount, long division, carry-less multiplication)
 * - A systematic encoder that appends the remainder modulo the generator
 *   polynomial to the message
 * - An exhaustive analyzer that injects every possible error vector into a
 *   codeword and tabulates the detection capability per error multiplicity
 *
 * The analysis enumerates 2^n - 1 error vectors and is only practical for
 * short codes.
 */

/// GF(2) polynomial arithmetic and fixed-width bit vectors
pub mod polynomial;

/// Systematic cyclic encoding
pub mod cyclic;

/// Error-detection analysis and binomial coefficients
pub mod analysis;

/// Analysis configuration
pub mod config;

/// Common error types for the library
pub mod error;

// Re-export main types for convenience
pub use analysis::{analyze, binomial, DetectionTable, WeightClass};
pub use config::AnalysisConfig;
pub use cyclic::{encode, CyclicCode};
pub use error::{CodingError, CodingResult};
pub use polynomial::{gf2_divide, popcount, BitVector};

/// Provides the most commonly used types and operations in one import.
pub mod prelude {
    pub use crate::analysis::analyze;
    pub use crate::analysis::analyze_bits;
    pub use crate::analysis::analyze_with_config;
    pub use crate::analysis::binomial;
    pub use crate::analysis::DetectionTable;
    pub use crate::analysis::WeightClass;
    pub use crate::config::AnalysisConfig;
    pub use crate::cyclic::encode;
    pub use crate::cyclic::encode_bits;
    pub use crate::cyclic::CodeParameters;
    pub use crate::cyclic::CyclicCode;
    pub use crate::cyclic::EncodingTrace;
    pub use crate::error::CodingError;
    pub use crate::error::CodingResult;
    pub use crate::polynomial::bit_length;
    pub use crate::polynomial::gf2_divide;
    pub use crate::polynomial::gf2_multiply;
    pub use crate::polynomial::gf2_remainder;
    pub use crate::polynomial::popcount;
    pub use crate::polynomial::BitVector;

    /// Encode `message` with `generator` and analyze the resulting codeword.
    ///
    /// Both arguments are bit strings, most significant digit first. The
    /// codeword length is the message length plus the generator's degree.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2_cyclic::prelude::*;
    ///
    /// let (trace, table) = encode_and_analyze("1010", "1011", &AnalysisConfig::default()).unwrap();
    /// assert_eq!(trace.codeword.to_string(), "1010011");
    /// assert_eq!(table.class(0).unwrap().detected, 0);
    /// ```
    pub fn encode_and_analyze(
        message: &str,
        generator: &str,
        config: &AnalysisConfig,
    ) -> CodingResult<(EncodingTrace, DetectionTable)> {
        let message = BitVector::from_bit_str(message)?;
        let code = CyclicCode::from_bit_str(generator, message.width())?;
        let trace = code.encode_traced(&message)?;
        let table = analyze_with_config(
            trace.codeword.value(),
            code.generator().value(),
            code.n(),
            config,
        )?;
        Ok((trace, table))
    }
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_encode_and_analyze() {
        let (trace, table) =
            encode_and_analyze("1010", "1011", &AnalysisConfig::sequential()).unwrap();
        assert_eq!(trace.shifted.to_string(), "1010000");
        assert_eq!(trace.codeword.to_string(), "1010011");
        assert_eq!(table.length(), 7);
        assert_eq!(table.minimum_undetected_weight(), Some(3));
    }

    #[test]
    fn test_encode_and_analyze_rejects_bad_input() {
        let config = AnalysisConfig::default();
        assert!(encode_and_analyze("10a0", "1011", &config).is_err());
        assert!(encode_and_analyze("1010", "0", &config).is_err());
        // n = 30 is above the default limit of 24
        assert!(encode_and_analyze(&"1".repeat(27), "1011", &config).is_err());
    }
}
