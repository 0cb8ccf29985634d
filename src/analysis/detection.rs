//! Exhaustive error-detection analysis
//!
//! Every nonzero error vector of length n is XORed onto a valid codeword
//! and the result is divided by g(x). A nonzero syndrome means the error
//! was detected. Detections are tallied by the error's Hamming weight
//! (its multiplicity) and compared against C(i, n), the number of error
//! vectors of that weight.
//!
//! The sweep costs O(2^n · n) and is meant for short codes; the length is
//! bounded by [`AnalysisConfig::max_length`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::binomial;
use crate::config::{AnalysisConfig, ANALYSIS_LENGTH_LIMIT};
use crate::error::{error_codes, CodingError, CodingResult};
use crate::polynomial::{bit_length, long_division, popcount, BitVector};

/// Detection statistics for errors of one multiplicity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightClass {
    /// Number of flipped digits, i
    pub multiplicity: usize,

    /// C(i, n): error vectors with this many flipped digits
    pub combinations: u64,

    /// No: how many of them produce a nonzero syndrome
    pub detected: u64,

    /// Co: detected / combinations, as a percentage
    pub capability: f64,
}

impl WeightClass {
    /// Error vectors of this multiplicity that go unnoticed
    pub fn undetected(&self) -> u64 {
        self.combinations.saturating_sub(self.detected)
    }
}

/// Detection capability of a code, per error multiplicity `0..=n`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectionTable")]
pub struct DetectionTable {
    length: usize,
    classes: Vec<WeightClass>,
}

// Wire form of a report, checked before it becomes a `DetectionTable`
#[derive(Deserialize)]
struct RawDetectionTable {
    length: usize,
    classes: Vec<WeightClass>,
}

fn malformed(expected: &str, actual: String) -> CodingError {
    CodingError::invalid_parameter(
        "detection table",
        expected,
        &actual,
        error_codes::MALFORMED_TABLE,
    )
}

impl TryFrom<RawDetectionTable> for DetectionTable {
    type Error = CodingError;

    fn try_from(raw: RawDetectionTable) -> CodingResult<Self> {
        let RawDetectionTable { length, classes } = raw;
        if length == 0 || length > ANALYSIS_LENGTH_LIMIT {
            return Err(malformed(
                &format!("length in 1..={}", ANALYSIS_LENGTH_LIMIT),
                length.to_string(),
            ));
        }
        if classes.len() != length + 1 {
            return Err(malformed(
                &format!("{} weight classes", length + 1),
                classes.len().to_string(),
            ));
        }
        for (index, class) in classes.iter().enumerate() {
            if class.multiplicity != index {
                return Err(malformed(
                    &format!("multiplicity {} at position {}", index, index),
                    class.multiplicity.to_string(),
                ));
            }
            let combinations = binomial(index, length)?;
            if class.combinations != combinations {
                return Err(malformed(
                    &format!("C({}, {}) = {}", index, length, combinations),
                    class.combinations.to_string(),
                ));
            }
            if class.detected > class.combinations {
                return Err(malformed(
                    &format!("at most {} detected at multiplicity {}", combinations, index),
                    class.detected.to_string(),
                ));
            }
        }

        Ok(Self { length, classes })
    }
}

impl DetectionTable {
    /// Codeword length n
    pub fn length(&self) -> usize {
        self.length
    }

    /// All `n + 1` classes, indexed by multiplicity
    pub fn classes(&self) -> &[WeightClass] {
        &self.classes
    }

    /// The class for multiplicity `i`
    pub fn class(&self, i: usize) -> Option<&WeightClass> {
        self.classes.get(i)
    }

    /// Number of nonzero error vectors, 2^n - 1
    pub fn total_patterns(&self) -> u64 {
        self.classes.iter().skip(1).map(|class| class.combinations).sum()
    }

    /// Number of error vectors detected across all multiplicities
    pub fn total_detected(&self) -> u64 {
        self.classes.iter().map(|class| class.detected).sum()
    }

    /// Number of nonzero error vectors that go unnoticed
    pub fn total_undetected(&self) -> u64 {
        self.total_patterns().saturating_sub(self.total_detected())
    }

    /// Share of all nonzero error vectors detected, as a percentage
    pub fn overall_capability(&self) -> f64 {
        self.total_detected() as f64 / self.total_patterns() as f64 * 100.0
    }

    /// Smallest multiplicity with at least one undetected error vector.
    ///
    /// For a linear code this is its minimum distance; `None` means every
    /// nonzero error is detected.
    pub fn minimum_undetected_weight(&self) -> Option<usize> {
        self.classes
            .iter()
            .skip(1)
            .find(|class| class.undetected() > 0)
            .map(|class| class.multiplicity)
    }

    /// Render the table as pretty-printed JSON
    pub fn to_json(&self) -> CodingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read back a report written by [`DetectionTable::to_json`].
    ///
    /// Fails with `InvalidParameter` if the counts are inconsistent with
    /// the stated length.
    pub fn from_json(json: &str) -> CodingResult<Self> {
        let raw: RawDetectionTable = serde_json::from_str(json)?;
        Self::try_from(raw)
    }
}

impl fmt::Display for DetectionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>3} | {:>12} | {:>12} | {:>8}", "i", "C(i,n)", "No", "Co")?;
        writeln!(f, "{:-<3}-+-{:-<12}-+-{:-<12}-+-{:-<8}", "", "", "", "")?;
        for class in &self.classes {
            writeln!(
                f,
                "{:>3} | {:>12} | {:>12} | {:>7.2}%",
                class.multiplicity, class.combinations, class.detected, class.capability
            )?;
        }
        Ok(())
    }
}

/// Tabulate how well `generator` detects errors injected into `codeword`,
/// a valid codeword of `length` digits, using the default configuration.
///
/// # Errors
///
/// - `InvalidDivisor` if `generator` is zero
/// - `InvalidParameter` if `generator` is the constant 1, which divides
///   every word and so detects nothing
/// - `InvalidParameter` if `length` is zero, above the configured limit, or
///   too short to hold `codeword`
/// - `InvariantViolation` if `codeword` does not divide evenly by `generator`
///
/// # Example
///
/// ```
/// use gf2_cyclic::analysis::analyze;
///
/// let table = analyze(0b1010011, 0b1011, 7).unwrap();
/// assert_eq!(table.class(1).unwrap().detected, 7);
/// assert_eq!(table.minimum_undetected_weight(), Some(3));
/// ```
pub fn analyze(codeword: u64, generator: u64, length: usize) -> CodingResult<DetectionTable> {
    analyze_with_config(codeword, generator, length, &AnalysisConfig::default())
}

/// Analyze a codeword given as a bit vector; its width is the length n
pub fn analyze_bits(codeword: &BitVector, generator: &BitVector) -> CodingResult<DetectionTable> {
    analyze(codeword.value(), generator.value(), codeword.width())
}

/// [`analyze`] with explicit settings
pub fn analyze_with_config(
    codeword: u64,
    generator: u64,
    length: usize,
    config: &AnalysisConfig,
) -> CodingResult<DetectionTable> {
    config.validate()?;
    if generator == 0 {
        return Err(CodingError::invalid_divisor("analyze"));
    }
    if generator == 1 {
        return Err(CodingError::invalid_parameter(
            "generator",
            "degree at least 1",
            "1",
            error_codes::INVALID_GENERATOR,
        ));
    }
    if length == 0 || length > config.max_length {
        return Err(CodingError::invalid_parameter(
            "length",
            &format!("1..={} digits", config.max_length),
            &length.to_string(),
            error_codes::ANALYSIS_LENGTH_EXCEEDED,
        ));
    }
    if bit_length(codeword) > length {
        return Err(CodingError::invalid_parameter(
            "codeword",
            &format!("a value that fits in {} digits", length),
            &format!("{:#b}", codeword),
            error_codes::CODEWORD_EXCEEDS_LENGTH,
        ));
    }

    let (_, baseline) = long_division(codeword, generator);
    if baseline != 0 {
        log::error!(
            "codeword {:#b} leaves remainder {:#b} modulo {:#b} before any error is injected",
            codeword,
            baseline,
            generator
        );
        return Err(CodingError::invariant_violation(
            "baseline_syndrome",
            &format!(
                "no error injected, but the syndrome of {:#b} modulo {:#b} is {:#b}",
                codeword, generator, baseline
            ),
            error_codes::CODEWORD_NOT_DIVISIBLE,
        ));
    }

    let parallel = config.parallel && cfg!(feature = "parallel");
    log::info!(
        "Enumerating {} error vectors for n = {} ({})",
        (1u64 << length) - 1,
        length,
        if parallel { "parallel" } else { "sequential" }
    );
    let detected = sweep(codeword, generator, length, parallel);

    let mut classes = Vec::with_capacity(length + 1);
    for (multiplicity, &detected) in detected.iter().enumerate() {
        let combinations = binomial(multiplicity, length)?;
        let capability = detected as f64 / combinations as f64 * 100.0;
        log::debug!(
            "i = {}: C(i,n) = {}, No = {}, Co = {:.2}",
            multiplicity,
            combinations,
            detected,
            capability
        );
        classes.push(WeightClass {
            multiplicity,
            combinations,
            detected,
            capability,
        });
    }

    Ok(DetectionTable { length, classes })
}

// Per-multiplicity detection counts over every error vector in `vectors`
fn tally(
    counts: &mut [u64],
    codeword: u64,
    generator: u64,
    vectors: impl Iterator<Item = u64>,
) {
    for error_vector in vectors {
        let (_, syndrome) = long_division(codeword ^ error_vector, generator);
        if syndrome != 0 {
            counts[popcount(error_vector) as usize] += 1;
        }
    }
}

fn sweep_sequential(codeword: u64, generator: u64, length: usize) -> Vec<u64> {
    let mut counts = vec![0u64; length + 1];
    tally(&mut counts, codeword, generator, 1..(1u64 << length));
    counts
}

#[cfg(feature = "parallel")]
fn sweep_parallel(codeword: u64, generator: u64, length: usize) -> Vec<u64> {
    use rayon::prelude::*;

    (1..(1u64 << length))
        .into_par_iter()
        .fold(
            || vec![0u64; length + 1],
            |mut counts, error_vector| {
                tally(&mut counts, codeword, generator, std::iter::once(error_vector));
                counts
            },
        )
        .reduce(
            || vec![0u64; length + 1],
            |mut merged, partial| {
                for (total, count) in merged.iter_mut().zip(partial) {
                    *total += count;
                }
                merged
            },
        )
}

#[cfg(feature = "parallel")]
fn sweep(codeword: u64, generator: u64, length: usize, parallel: bool) -> Vec<u64> {
    if parallel {
        sweep_parallel(codeword, generator, length)
    } else {
        sweep_sequential(codeword, generator, length)
    }
}

#[cfg(not(feature = "parallel"))]
fn sweep(codeword: u64, generator: u64, length: usize, _parallel: bool) -> Vec<u64> {
    sweep_sequential(codeword, generator, length)
}
