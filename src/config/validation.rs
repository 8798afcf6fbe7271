//! Configuration validation for text-tools.

use super::types::{AppConfig, BehaviorConfig, CodecConfig, MatchingConfig, OutputConfig};
use crate::matching::SimilarityConfig;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.matching.validate());
        errors.extend(self.codec.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if SimilarityConfig::from_preset(&self.preset).is_none() {
            errors.push(ConfigError::new(
                "matching.preset",
                format!(
                    "Invalid preset '{}'. Valid options: {}",
                    self.preset,
                    SimilarityConfig::preset_names().join(", ")
                ),
            ));
        }

        if let Some(threshold) = self.threshold
            && !(0.0..=1.0).contains(&threshold)
        {
            errors.push(ConfigError::new(
                "matching.threshold",
                format!("Threshold must be between 0.0 and 1.0, got {threshold}"),
            ));
        }

        if self.max_results == Some(0) {
            errors.push(ConfigError::new(
                "matching.max_results",
                "Max results must be at least 1",
            ));
        }

        errors
    }
}

impl Validatable for SimilarityConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.threshold) {
            errors.push(ConfigError::new(
                "similarity.threshold",
                format!("Threshold must be between 0.0 and 1.0, got {}", self.threshold),
            ));
        }

        let weights = [self.levenshtein_weight, self.jaro_winkler_weight];
        if weights.iter().any(|w| *w < 0.0) {
            errors.push(ConfigError::new(
                "similarity.weights",
                "Weights must not be negative",
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            errors.push(ConfigError::new(
                "similarity.weights",
                format!("Weights must sum to 1.0, got {sum}"),
            ));
        }

        if self.max_results == 0 {
            errors.push(ConfigError::new(
                "similarity.max_results",
                "Max results must be at least 1",
            ));
        }

        errors
    }
}

impl Validatable for CodecConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.max_decoded_len == 0 {
            vec![ConfigError::new(
                "codec.max_decoded_len",
                "Max decoded length must be at least 1",
            )]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError::new(
                "output.file",
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Boolean flags only
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_presets_are_valid() {
        for name in SimilarityConfig::preset_names() {
            let config = SimilarityConfig::from_preset(name).unwrap();
            assert!(config.is_valid(), "{name}: {:?}", config.validate());
        }
    }

    #[test]
    fn test_invalid_matching() {
        let config = MatchingConfig {
            preset: "nope".to_string(),
            threshold: Some(1.5),
            fold_case: None,
            max_results: Some(0),
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["matching.preset", "matching.threshold", "matching.max_results"]
        );
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let mut config = SimilarityConfig::balanced();
        config.levenshtein_weight = 0.9;
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "similarity.weights");
    }

    #[test]
    fn test_zero_decode_limit() {
        let config = CodecConfig { max_decoded_len: 0 };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_parent_missing() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent-dir-for-test/out.json")),
            ..OutputConfig::default()
        };
        assert_eq!(config.validate().len(), 1);

        let config = OutputConfig {
            file: Some(PathBuf::from("out.json")),
            ..OutputConfig::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("codec.max_decoded_len", "too small");
        assert_eq!(err.to_string(), "codec.max_decoded_len: too small");
    }
}
