//! Systematic cyclic codes over GF(2)
//!
//! Messages of k digits are encoded into codewords of n = k + r digits by
//! appending the remainder of `x^r·m(x)` modulo the generator g(x), so every
//! codeword divides evenly by g(x).

mod encoder;
mod parameters;

pub use encoder::{encode, encode_bits, CyclicCode, EncodingTrace};
pub use parameters::CodeParameters;
