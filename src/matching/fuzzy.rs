//! In-order subsequence search with a bonus for consecutive hits.

use serde::{Deserialize, Serialize};

/// Score how well `query` appears as an in-order subsequence of `text`.
///
/// Matching ignores case. Each matched char adds `2 × streak`, where the
/// streak is the number of matches since the last miss, so contiguous
/// matches outrank scattered ones. Returns 0 when some query char is never
/// matched (or the query is empty) and caps at 100.
#[must_use]
pub fn fuzzy_score(query: &str, text: &str) -> u8 {
    let query: Vec<char> = query.to_lowercase().chars().collect();
    if query.is_empty() {
        return 0;
    }

    let mut matched = 0;
    let mut streak: u64 = 0;
    let mut score: u64 = 0;

    for c in text.to_lowercase().chars() {
        if matched == query.len() {
            break;
        }
        if c == query[matched] {
            matched += 1;
            streak += 1;
            score = score.saturating_add(streak * 2);
        } else {
            streak = 0;
        }
    }

    if matched == query.len() {
        u8::try_from(score.min(100)).unwrap_or(100)
    } else {
        0
    }
}

/// A text that matched a fuzzy query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyHit {
    pub text: String,
    pub score: u8,
}

/// Score every text against `query`, keeping matches best-first.
///
/// Equal scores keep their input order.
pub fn fuzzy_search<S: AsRef<str>>(query: &str, texts: &[S]) -> Vec<FuzzyHit> {
    let mut hits: Vec<FuzzyHit> = texts
        .iter()
        .filter_map(|text| {
            let text = text.as_ref();
            let score = fuzzy_score(query, text);
            (score > 0).then(|| FuzzyHit {
                text: text.to_string(),
                score,
            })
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsequence_matches() {
        assert!(fuzzy_score("jvscrt", "JavaScript") > 0);
    }

    #[test]
    fn test_missing_char_scores_zero() {
        assert_eq!(fuzzy_score("pthon", "JavaScript"), 0);
    }

    #[test]
    fn test_exact_score() {
        // j(2) a(4) v(6) a(8), then stop
        assert_eq!(fuzzy_score("java", "JavaScript"), 20);
        // j(2) miss miss miss s(2) c(4) r(6) i(8) p(10) t(12)
        assert_eq!(fuzzy_score("jscript", "JavaScript"), 44);
    }

    #[test]
    fn test_capped_at_100() {
        let text = "a".repeat(50);
        assert_eq!(fuzzy_score(&text, &text), 100);
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(fuzzy_score("", "anything"), 0);
        assert_eq!(fuzzy_score("a", ""), 0);
    }

    #[test]
    fn test_contiguous_beats_scattered() {
        assert!(fuzzy_score("type", "TypeScript") > fuzzy_score("type", "tiny yellow pet"));
    }

    #[test]
    fn test_search_orders_and_filters() {
        let hits = fuzzy_search("scr", &["Rust", "describe", "Script"]);
        let texts: Vec<&str> = hits.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["describe", "Script"]);
        assert!(hits[0].score >= hits[1].score);
    }
}
