//! Configuration types for text-tools.

use super::defaults::{default_matching_preset, default_max_decoded_len};
use crate::error::{Result, TextToolsError};
use crate::matching::SimilarityConfig;
use crate::pipeline::OutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a YAML file and/or built from CLI
/// arguments (CLI wins, see [`AppConfig::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Similarity and fuzzy matching
    pub matching: MatchingConfig,
    /// Run-length codec limits
    pub codec: CodecConfig,
    /// Output format and destination
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the similarity preset.
    pub fn preset(mut self, preset: impl Into<String>) -> Self {
        self.config.matching.preset = preset.into();
        self
    }

    /// Override the preset's threshold.
    pub const fn threshold(mut self, threshold: Option<f64>) -> Self {
        self.config.matching.threshold = threshold;
        self
    }

    /// Override the preset's case folding.
    pub const fn fold_case(mut self, fold_case: Option<bool>) -> Self {
        self.config.matching.fold_case = fold_case;
        self
    }

    /// Override the preset's result limit.
    pub const fn max_results(mut self, max_results: Option<usize>) -> Self {
        self.config.matching.max_results = max_results;
        self
    }

    /// Set the run-length decode cap.
    pub const fn max_decoded_len(mut self, max: usize) -> Self {
        self.config.codec.max_decoded_len = max;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// Values given on the command line, layered over the file config by
/// [`AppConfig::merge`]. `None` keeps whatever the file (or the default)
/// says, so an explicit value wins even when it equals the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub preset: Option<String>,
    pub threshold: Option<f64>,
    pub fold_case: Option<bool>,
    pub max_results: Option<usize>,
    pub max_decoded_len: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub fail_on_change: Option<bool>,
    pub quiet: Option<bool>,
}

// ============================================================================
// Section types
// ============================================================================

/// Similarity matching configuration.
///
/// `preset` picks a [`SimilarityConfig`]; the optional fields override
/// individual preset values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Preset: strict, balanced, permissive
    pub preset: String,
    /// Custom threshold (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Lowercase inputs before comparing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fold_case: Option<bool>,
    /// Maximum ranked results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<usize>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            preset: default_matching_preset(),
            threshold: None,
            fold_case: None,
            max_results: None,
        }
    }
}

impl MatchingConfig {
    /// Resolve the preset and apply overrides.
    pub fn similarity_config(&self) -> Result<SimilarityConfig> {
        let mut config = SimilarityConfig::from_preset(&self.preset).ok_or_else(|| {
            TextToolsError::invalid_argument(format!(
                "unknown preset '{}'. Valid options: {}",
                self.preset,
                SimilarityConfig::preset_names().join(", ")
            ))
        })?;
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if let Some(fold_case) = self.fold_case {
            config = config.with_fold_case(fold_case);
        }
        if let Some(max_results) = self.max_results {
            config = config.with_max_results(max_results);
        }
        Ok(config)
    }
}

/// Run-length codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CodecConfig {
    /// Largest decoded output accepted, in chars
    pub max_decoded_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_decoded_len: default_max_decoded_len(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Output file path (stdout if not specified)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when `diff` finds changes
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
