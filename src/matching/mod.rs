//! Approximate string matching.
//!
//! - [`fuzzy_score`] / [`fuzzy_search`]: case-insensitive in-order
//!   subsequence search, scored 0-100.
//! - [`similarity`] / [`rank_candidates`]: weighted Levenshtein and
//!   Jaro-Winkler similarity with threshold presets.
//!
//! # Example
//!
//! ```
//! use text_tools::matching::{SimilarityConfig, rank_candidates};
//!
//! let candidates = ["color", "collar", "cooler"];
//! let ranked = rank_candidates("colour", &candidates, &SimilarityConfig::permissive());
//! assert_eq!(ranked[0].candidate, "color");
//! ```

mod config;
mod fuzzy;
mod similarity;

pub use config::SimilarityConfig;
pub use fuzzy::{FuzzyHit, fuzzy_score, fuzzy_search};
pub use similarity::{SimilarityMatch, normalized_levenshtein, rank_candidates, similarity};
