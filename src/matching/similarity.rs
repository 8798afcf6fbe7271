//! Normalized similarity and candidate ranking.
//!
//! Character-level Levenshtein similarity and Jaro-Winkler are blended with
//! the weights of a [`SimilarityConfig`]. Levenshtein punishes every edit
//! equally; Jaro-Winkler rewards a shared prefix, which suits identifiers
//! and names.

use super::config::SimilarityConfig;
use crate::distance::levenshtein;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strsim::jaro_winkler;

/// A candidate that cleared the similarity threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub candidate: String,
    /// Weighted similarity, 0.0 - 1.0
    pub score: f64,
    /// Character edit distance to the query
    pub distance: usize,
}

fn fold<'a>(s: &'a str, config: &SimilarityConfig) -> Cow<'a, str> {
    if config.fold_case {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// `1 - distance / longer_len`, or 1.0 when both strings are empty.
#[must_use]
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - (levenshtein(a, b) as f64 / max_len as f64)
}

fn score_pair(a: &str, b: &str, config: &SimilarityConfig) -> (f64, usize) {
    let a = fold(a, config);
    let b = fold(b, config);

    let distance = levenshtein(&a, &b);
    let max_len = a.chars().count().max(b.chars().count());
    let lev_score = if max_len > 0 {
        1.0 - (distance as f64 / max_len as f64)
    } else {
        1.0
    };
    let jw_score = jaro_winkler(&a, &b);

    let score = jw_score
        .mul_add(config.jaro_winkler_weight, lev_score * config.levenshtein_weight)
        .clamp(0.0, 1.0);
    (score, distance)
}

/// Weighted similarity of two strings in `[0.0, 1.0]`.
#[must_use]
pub fn similarity(a: &str, b: &str, config: &SimilarityConfig) -> f64 {
    score_pair(a, b, config).0
}

/// Rank `candidates` by similarity to `query`.
///
/// Candidates below `config.threshold` are dropped. The rest are ordered by
/// descending score, then ascending edit distance, then text, and truncated
/// to `config.max_results`.
pub fn rank_candidates<S>(
    query: &str,
    candidates: &[S],
    config: &SimilarityConfig,
) -> Vec<SimilarityMatch>
where
    S: AsRef<str> + Sync,
{
    let mut matches: Vec<SimilarityMatch> = candidates
        .par_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let (score, distance) = score_pair(query, candidate, config);
            (score >= config.threshold).then(|| SimilarityMatch {
                candidate: candidate.to_string(),
                score,
                distance,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(a.distance.cmp(&b.distance))
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    matches.truncate(config.max_results);

    tracing::debug!(
        candidates = candidates.len(),
        kept = matches.len(),
        threshold = config.threshold,
        "ranked candidates"
    );
    matches
}
