//! Fixed-width bit vectors
//!
//! The integer value of a bit vector alone loses leading zeros, while a
//! codeword's length is part of its meaning. `BitVector` keeps the two
//! together and refuses any conversion that would drop a digit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{error_codes, CodingError, CodingResult};
use crate::polynomial::gf2::{bit_length, degree, popcount};

/// Widest bit vector that fits in the packed `u64` representation
pub const MAX_WIDTH: usize = u64::BITS as usize;

/// A bit vector of explicit width, most significant bit first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    value: u64,
    width: usize,
}

impl BitVector {
    /// Create a bit vector holding `value` in exactly `width` digits.
    ///
    /// Fails if `width` is zero or above [`MAX_WIDTH`], or if `value` needs
    /// more than `width` digits.
    pub fn new(value: u64, width: usize) -> CodingResult<Self> {
        check_width(width)?;
        if value != 0 && bit_length(value) > width {
            return Err(CodingError::invalid_parameter(
                "value",
                &format!("a value that fits in {} bits", width),
                &format!("{:#b} ({} bits)", value, bit_length(value)),
                error_codes::VALUE_EXCEEDS_WIDTH,
            ));
        }
        Ok(Self { value, width })
    }

    /// Minimal-width bit vector for `value` (zero becomes a single `0`)
    pub fn from_value(value: u64) -> Self {
        Self {
            value,
            width: bit_length(value),
        }
    }

    /// Parse a string of `'0'`/`'1'` digits; every digit, leading zeros
    /// included, counts toward the width.
    pub fn from_bit_str(bits: &str) -> CodingResult<Self> {
        if bits.is_empty() {
            return Err(CodingError::invalid_parameter(
                "bit string",
                "at least one '0' or '1' digit",
                "an empty string",
                error_codes::INVALID_BIT_STRING,
            ));
        }
        check_width(bits.len())?;

        let mut value = 0u64;
        for (position, digit) in bits.chars().enumerate() {
            let bit = match digit {
                '0' => 0,
                '1' => 1,
                other => {
                    return Err(CodingError::invalid_parameter(
                        "bit string",
                        "only '0' and '1' digits",
                        &format!("{:?} at position {} in {:?}", other, position, bits),
                        error_codes::INVALID_BIT_STRING,
                    ))
                }
            };
            value = (value << 1) | bit;
        }

        Ok(Self {
            value,
            width: bits.len(),
        })
    }

    /// Integer value of the vector
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of digits, leading zeros included
    pub fn width(&self) -> usize {
        self.width
    }

    /// Hamming weight
    pub fn weight(&self) -> u32 {
        popcount(self.value)
    }

    /// Degree of the polynomial the vector denotes, `None` when all digits are zero
    pub fn degree(&self) -> Option<usize> {
        degree(self.value)
    }

    /// Whether the leading digit is a `1`
    pub fn has_leading_one(&self) -> bool {
        (self.value >> (self.width - 1)) & 1 == 1
    }

    /// Multiply by x^count: append `count` zero digits on the right
    pub fn append_zeros(&self, count: usize) -> CodingResult<Self> {
        let width = self.width + count;
        check_width(width)?;
        Ok(Self {
            value: shift_left(self.value, count),
            width,
        })
    }

    /// Concatenate `other` after `self`
    pub fn concat(&self, other: &Self) -> CodingResult<Self> {
        let width = self.width + other.width;
        check_width(width)?;
        Ok(Self {
            value: shift_left(self.value, other.width) | other.value,
            width,
        })
    }

    /// Same value, left-padded with zeros to `width` digits.
    ///
    /// Fails if the value needs more digits than `width`.
    pub fn zero_padded(&self, width: usize) -> CodingResult<Self> {
        Self::new(self.value, width)
    }
}

fn check_width(width: usize) -> CodingResult<()> {
    if width == 0 {
        return Err(CodingError::invalid_parameter(
            "width",
            "at least one digit",
            "0",
            error_codes::INVALID_BIT_STRING,
        ));
    }
    if width > MAX_WIDTH {
        return Err(CodingError::overflow(
            "bit vector",
            &format!("width {} exceeds {} bits", width, MAX_WIDTH),
            error_codes::BIT_VECTOR_TOO_WIDE,
        ));
    }
    Ok(())
}

// Shifting a u64 by 64 is not defined; callers have already checked the width.
fn shift_left(value: u64, count: usize) -> u64 {
    value.checked_shl(count as u32).unwrap_or(0)
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width)
    }
}

impl FromStr for BitVector {
    type Err = CodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bit_str(s)
    }
}

impl Serialize for BitVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitVector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = String::deserialize(deserializer)?;
        Self::from_bit_str(&bits).map_err(serde::de::Error::custom)
    }
}
