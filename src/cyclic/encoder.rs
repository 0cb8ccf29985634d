//! Systematic cyclic encoder
//!
//! The codeword is `x^(n-k)·m(x) + (x^(n-k)·m(x) mod g(x))`: the message
//! followed by the remainder, zero-padded to r digits.

use serde::{Deserialize, Serialize};

use crate::cyclic::CodeParameters;
use crate::error::{error_codes, CodingError, CodingResult};
use crate::polynomial::{gf2_remainder, BitVector};

/// Intermediate values produced while encoding one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingTrace {
    /// The message as given
    pub message: BitVector,

    /// `x^(n-k)·m(x)`: the message with r zeros appended
    pub shifted: BitVector,

    /// `x^(n-k)·m(x) mod g(x)`, padded to r digits
    pub remainder: BitVector,

    /// Message followed by the padded remainder, n digits
    pub codeword: BitVector,
}

/// A cyclic code defined by its generator polynomial and message length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicCode {
    generator: BitVector,
    parameters: CodeParameters,
}

impl CyclicCode {
    /// Create a code encoding `k`-digit messages with `generator`
    pub fn new(generator: BitVector, k: usize) -> CodingResult<Self> {
        let parameters = CodeParameters::for_generator(&generator, k)?;
        Ok(Self {
            generator,
            parameters,
        })
    }

    /// Create a code from a generator written as a bit string
    pub fn from_bit_str(generator: &str, k: usize) -> CodingResult<Self> {
        Self::new(BitVector::from_bit_str(generator)?, k)
    }

    pub fn generator(&self) -> &BitVector {
        &self.generator
    }

    pub fn parameters(&self) -> CodeParameters {
        self.parameters
    }

    /// Information digits per message
    pub fn k(&self) -> usize {
        self.parameters.k
    }

    /// Redundancy digits
    pub fn r(&self) -> usize {
        self.parameters.r
    }

    /// Codeword length
    pub fn n(&self) -> usize {
        self.parameters.n
    }

    /// Code rate k / n
    pub fn rate(&self) -> f64 {
        self.parameters.rate()
    }

    /// Encode `message`, returning the codeword
    pub fn encode(&self, message: &BitVector) -> CodingResult<BitVector> {
        self.encode_traced(message).map(|trace| trace.codeword)
    }

    /// Encode `message`, keeping every intermediate value
    pub fn encode_traced(&self, message: &BitVector) -> CodingResult<EncodingTrace> {
        self.check_width("message", message, self.k())?;
        let r = self.r();

        // 1. x^(n-k)·m(x): append r zero digits
        let shifted = message.append_zeros(r)?;
        log::debug!("x^(n-k)*m(x) = {}", shifted);

        // 2. remainder of the shifted message modulo g(x)
        let remainder = gf2_remainder(shifted.value(), self.generator.value())?;
        let remainder = BitVector::new(remainder, r)?;
        log::debug!("x^(n-k)*m(x) mod g(x) = {}", remainder);

        // 3. message followed by the padded remainder
        let codeword = message.concat(&remainder)?;
        log::debug!("codeword = {}", codeword);

        Ok(EncodingTrace {
            message: *message,
            shifted,
            remainder,
            codeword,
        })
    }

    /// Remainder of `received` modulo g(x); zero when no error is detected
    pub fn syndrome(&self, received: &BitVector) -> CodingResult<u64> {
        self.check_width("received word", received, self.n())?;
        gf2_remainder(received.value(), self.generator.value())
    }

    /// Whether `received` divides evenly by g(x)
    pub fn is_codeword(&self, received: &BitVector) -> CodingResult<bool> {
        Ok(self.syndrome(received)? == 0)
    }

    fn check_width(&self, name: &str, bits: &BitVector, expected: usize) -> CodingResult<()> {
        if bits.width() != expected {
            return Err(CodingError::invalid_parameter(
                name,
                &format!("{} digits", expected),
                &format!("{} ({} digits)", bits, bits.width()),
                error_codes::INVALID_MESSAGE,
            ));
        }
        Ok(())
    }
}

/// Encode a message with a generator, both given as bit strings.
///
/// The codeword has `k + r` digits, where `k` is the message length and
/// `r` the generator's degree.
///
/// # Example
///
/// ```
/// use gf2_cyclic::cyclic::encode;
///
/// assert_eq!(encode("1010", "1011").unwrap(), "1010011");
/// ```
pub fn encode(message: &str, generator: &str) -> CodingResult<String> {
    let message = BitVector::from_bit_str(message)?;
    let generator = BitVector::from_bit_str(generator)?;
    encode_bits(&message, &generator).map(|codeword| codeword.to_string())
}

/// Encode a message with a generator, both as bit vectors
pub fn encode_bits(message: &BitVector, generator: &BitVector) -> CodingResult<BitVector> {
    CyclicCode::new(*generator, message.width())?.encode(message)
}
