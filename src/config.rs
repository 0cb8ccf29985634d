/*!
 * Analysis Configuration
 *
 * Controls how the exhaustive error-detection analysis runs. Configurations
 * can be built in code or loaded from JSON.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{error_codes, CodingError, CodingResult};

/// Hard ceiling on the codeword length accepted by the analyzer.
///
/// The sweep visits 2^n - 1 error vectors, so every extra digit doubles
/// the running time.
pub const ANALYSIS_LENGTH_LIMIT: usize = 32;

/// Default codeword length limit
pub const DEFAULT_MAX_LENGTH: usize = 24;

/// Settings for the error-detection analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Split the sweep across worker threads (needs the `parallel` feature;
    /// ignored otherwise)
    pub parallel: bool,

    /// Longest codeword the analyzer will enumerate
    pub max_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl AnalysisConfig {
    /// Default settings on a single thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Replace the codeword length limit
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Check that the settings are usable
    pub fn validate(&self) -> CodingResult<()> {
        if self.max_length == 0 || self.max_length > ANALYSIS_LENGTH_LIMIT {
            return Err(CodingError::invalid_parameter(
                "max_length",
                &format!("1..={}", ANALYSIS_LENGTH_LIMIT),
                &self.max_length.to_string(),
                error_codes::INVALID_CONFIGURATION,
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> CodingResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json(&self) -> CodingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> CodingResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CodingResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);
        assert_eq!(config.parallel, cfg!(feature = "parallel"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sequential_config() {
        let config = AnalysisConfig::sequential().with_max_length(10);
        assert!(!config.parallel);
        assert_eq!(config.max_length, 10);
    }

    #[test]
    fn test_validate_limits() {
        assert!(AnalysisConfig::default().with_max_length(0).validate().is_err());
        assert!(AnalysisConfig::default()
            .with_max_length(ANALYSIS_LENGTH_LIMIT)
            .validate()
            .is_ok());

        let error = AnalysisConfig::default()
            .with_max_length(ANALYSIS_LENGTH_LIMIT + 1)
            .validate()
            .unwrap_err();
        assert_eq!(error.error_code(), error_codes::INVALID_CONFIGURATION);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = AnalysisConfig::from_json(r#"{ "parallel": false }"#).unwrap();
        assert!(!config.parallel);
        assert_eq!(config.max_length, DEFAULT_MAX_LENGTH);

        assert!(AnalysisConfig::from_json(r#"{ "max_length": 40 }"#).is_err());
        assert!(matches!(
            AnalysisConfig::from_json("not json"),
            Err(CodingError::SerializationError(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("analysis.json");

        let config = AnalysisConfig::sequential().with_max_length(16);
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = AnalysisConfig::load(temp_dir.path().join("missing.json"));
        assert!(matches!(result, Err(CodingError::IoError(_))));
    }
}
