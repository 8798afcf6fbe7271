//! Levenshtein edit distance.

use super::table::DistanceTable;

/// Minimum number of single-symbol insertions, deletions or substitutions
/// turning `a` into `b`.
///
/// Classic `(m+1) × (n+1)` table: `D[i][0] = i`, `D[0][j] = j`, and every
/// inner cell takes the cheapest of delete, insert or substitute. Symbols are
/// compared exactly.
#[must_use]
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (m, n) = (a.len(), b.len());
    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut table = DistanceTable::for_lengths(m, n);
    for i in 0..=m {
        table.set(i, 0, i);
    }
    for j in 0..=n {
        table.set(0, j, j);
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = table.get(i - 1, j) + 1;
            let insertion = table.get(i, j - 1) + 1;
            let substitution = table.get(i - 1, j - 1) + cost;
            table.set(i, j, deletion.min(insertion).min(substitution));
        }
    }

    tracing::trace!(rows = table.rows(), cols = table.cols(), "filled edit distance table");
    table.get(m, n)
}

/// Character-level edit distance between two strings.
///
/// Counts Unicode scalar values, so `"café"` and `"cafe"` are one edit apart
/// regardless of UTF-8 width.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

/// [`levenshtein`] with optional Unicode lowercase folding of both inputs.
#[must_use]
pub fn levenshtein_with(a: &str, b: &str, fold_case: bool) -> usize {
    if fold_case {
        levenshtein(&a.to_lowercase(), &b.to_lowercase())
    } else {
        levenshtein(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_identical() {
        assert_eq!(levenshtein("JavaScript", "JavaScript"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn test_empty_side_is_other_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", ""), 4);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        assert_eq!(levenshtein("Rust", "rust"), 1);
        assert_eq!(levenshtein_with("Rust", "rust", true), 0);
        assert_eq!(levenshtein_with("Rust", "rust", false), 1);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("🚀", ""), 1);
    }

    #[test]
    fn test_generic_over_tokens() {
        let old = ["the", "quick", "fox"];
        let new = ["the", "slow", "fox", "runs"];
        assert_eq!(edit_distance(&old, &new), 2);
    }

    #[test]
    fn test_symmetric_on_sample() {
        assert_eq!(levenshtein("flaw", "lawn"), levenshtein("lawn", "flaw"));
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }
}
