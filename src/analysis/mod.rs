//! Error-detection analysis for cyclic codes
//!
//! Exhaustively enumerates error vectors against a valid codeword and
//! reports, for each error multiplicity, how many are caught by a nonzero
//! syndrome.

mod combinatorics;
mod detection;

pub use combinatorics::{binomial, binomial_row};
pub use detection::{analyze, analyze_bits, analyze_with_config, DetectionTable, WeightClass};
