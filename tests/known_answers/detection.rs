// Detection known answers: codeword, generator, No per multiplicity

use serde::{Deserialize, Serialize};

/// Detected error counts for one codeword/generator pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionVector {
    pub codeword: String,
    pub generator: String,
    pub detected: Vec<u64>,
    pub minimum_undetected_weight: Option<usize>,
}

fn vector(
    codeword: &str,
    generator: &str,
    detected: &[u64],
    minimum_undetected_weight: Option<usize>,
) -> DetectionVector {
    DetectionVector {
        codeword: codeword.to_string(),
        generator: generator.to_string(),
        detected: detected.to_vec(),
        minimum_undetected_weight,
    }
}

pub fn standard_vectors() -> Vec<DetectionVector> {
    vec![
        vector("1010011", "1011", &[0, 7, 21, 28, 28, 21, 7, 0], Some(3)),
        vector("1101001", "1011", &[0, 7, 21, 28, 28, 21, 7, 0], Some(3)),
        vector("1010", "11", &[0, 4, 0, 4, 0], Some(2)),
        vector("111", "111", &[0, 3, 3, 0], Some(3)),
        vector("100100", "111", &[0, 6, 12, 12, 12, 6, 0], Some(2)),
        vector(
            "110101100110",
            "10011",
            &[0, 12, 66, 203, 457, 748, 872, 738, 462, 208, 62, 11, 1],
            Some(3),
        ),
    ]
}
