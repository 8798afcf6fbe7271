//! Similarity scoring configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for similarity scoring and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SimilarityConfig {
    /// Minimum score (0.0 - 1.0) a candidate needs to be reported
    pub threshold: f64,
    /// Weight for normalized Levenshtein similarity
    pub levenshtein_weight: f64,
    /// Weight for Jaro-Winkler similarity
    pub jaro_winkler_weight: f64,
    /// Lowercase both sides before comparing
    pub fold_case: bool,
    /// Maximum number of ranked results
    pub max_results: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self::balanced()
    }
}

impl SimilarityConfig {
    /// Near-exact matches only
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            threshold: 0.95,
            levenshtein_weight: 0.5,
            jaro_winkler_weight: 0.5,
            fold_case: false,
            max_results: 10,
        }
    }

    /// General-purpose matching
    #[must_use]
    pub const fn balanced() -> Self {
        Self {
            threshold: 0.85,
            levenshtein_weight: 0.4,
            jaro_winkler_weight: 0.6,
            fold_case: true,
            max_results: 10,
        }
    }

    /// Loose matching for exploration and typo hunting
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            threshold: 0.70,
            levenshtein_weight: 0.3,
            jaro_winkler_weight: 0.7,
            fold_case: true,
            max_results: 25,
        }
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strict" | "exact" => Some(Self::strict()),
            "balanced" | "default" => Some(Self::balanced()),
            "permissive" | "loose" => Some(Self::permissive()),
            _ => None,
        }
    }

    /// Names accepted by [`Self::from_preset`].
    #[must_use]
    pub const fn preset_names() -> &'static [&'static str] {
        &["strict", "balanced", "permissive"]
    }

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
