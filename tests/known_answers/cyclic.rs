// Encoder known answers: message, generator, x^r*m(x), remainder, codeword

use serde::{Deserialize, Serialize};

/// One systematic encoding worked out by hand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodingVector {
    pub message: String,
    pub generator: String,
    pub shifted: String,
    pub remainder: String,
    pub codeword: String,
}

fn vector(
    message: &str,
    generator: &str,
    shifted: &str,
    remainder: &str,
    codeword: &str,
) -> EncodingVector {
    EncodingVector {
        message: message.to_string(),
        generator: generator.to_string(),
        shifted: shifted.to_string(),
        remainder: remainder.to_string(),
        codeword: codeword.to_string(),
    }
}

/// Encodings under g(x) = x^3 + x + 1, the (7, 4) Hamming code
pub fn hamming_vectors() -> Vec<EncodingVector> {
    vec![
        vector("1010", "1011", "1010000", "011", "1010011"),
        vector("0010", "1011", "0010000", "110", "0010110"),
        vector("1101", "1011", "1101000", "001", "1101001"),
        vector("0001", "1011", "0001000", "011", "0001011"),
        vector("0000", "1011", "0000000", "000", "0000000"),
    ]
}

/// Encodings under other generators
pub fn other_vectors() -> Vec<EncodingVector> {
    vec![
        // g(x) = x + 1 appends a single parity digit
        vector("101", "11", "1010", "0", "1010"),
        vector("111", "11", "1110", "1", "1111"),
        // g(x) = x^2 + x + 1
        vector("1", "111", "100", "11", "111"),
        vector("1001", "111", "100100", "00", "100100"),
        // g(x) = x^4 + x + 1
        vector("11010110", "10011", "110101100000", "0110", "110101100110"),
    ]
}

pub fn all_vectors() -> Vec<EncodingVector> {
    let mut vectors = hamming_vectors();
    vectors.extend(other_vectors());
    vectors
}
