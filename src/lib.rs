//! **String distance, alignment and run-length utilities.**
//!
//! `text-tools` bundles a small set of independent, pure text algorithms
//! behind one library and one command-line tool:
//!
//! - **[`distance`]**: Levenshtein edit distance and longest common
//!   substring, both built on a per-call [`DistanceTable`].
//! - **[`codec`]**: a run-length codec with a strict decoder that reports a
//!   [`FormatError`] instead of passing malformed fragments through.
//! - **[`diff`]**: a coarse, membership-based word diff.
//! - **[`matching`]**: fuzzy subsequence scoring and weighted similarity
//!   ranking.
//!
//! Every function allocates its own working state, so calls can run from any
//! number of threads without coordination.
//!
//! ## Getting Started
//!
//! ```
//! use text_tools::{diff_words, levenshtein, longest_common_substring};
//! use text_tools::{run_length_decode, run_length_encode};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(longest_common_substring("JavaScript", "TypeScript"), "Script");
//!
//! let encoded = run_length_encode("AAABBBCCCCDDEEEE").unwrap();
//! assert_eq!(encoded, "3A3B4C2D4E");
//! assert_eq!(run_length_decode(&encoded).unwrap(), "AAABBBCCCCDDEEEE");
//!
//! let diff = diff_words("the lazy dog", "the active dog");
//! assert_eq!(diff.added, ["active"]);
//! assert_eq!(diff.removed, ["lazy"]);
//! ```
//!
//! ## Command-Line Interface
//!
//! The `text-tools` binary exposes each operation as a subcommand
//! (`distance`, `lcs`, `encode`, `decode`, `diff`, `fuzzy`, `rank`) with text
//! or JSON output. See `text-tools --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize -> f64 for normalized scores; lengths stay far below 2^52
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `a`/`b` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod codec;
pub mod config;
pub mod diff;
pub mod distance;
pub mod error;
pub mod matching;
pub mod pipeline;

// Re-export main types for convenience
pub use codec::{Run, run_length_decode, run_length_encode};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use diff::{WordDiff, diff_words};
pub use distance::{DistanceTable, edit_distance, levenshtein, longest_common_substring};
pub use error::{ErrorContext, FormatError, OptionContext, Result, TextToolsError};
pub use matching::{SimilarityConfig, SimilarityMatch, fuzzy_score, rank_candidates, similarity};
