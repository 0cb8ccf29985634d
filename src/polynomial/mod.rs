//! Binary polynomials over GF(2)
//!
//! Integer-packed arithmetic (bit-length, popcount, long division and
//! carry-less multiplication) plus the fixed-width [`BitVector`] used
//! wherever the number of digits matters.

mod bit_vector;
mod gf2;

pub use bit_vector::{BitVector, MAX_WIDTH};
pub use gf2::{bit_length, degree, gf2_divide, gf2_multiply, gf2_remainder, popcount};

pub(crate) use gf2::long_division;
