//! Added/removed word sets between two texts.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Result of [`diff_words`].
///
/// Both lists keep the order of first appearance and hold each distinct
/// word once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct WordDiff {
    /// Words of the new text absent from the old text
    pub added: Vec<String>,
    /// Words of the old text absent from the new text
    pub removed: Vec<String>,
}

impl WordDiff {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

impl fmt::Display for WordDiff {
    /// One `+word` line per addition, then one `-word` line per removal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .added
            .iter()
            .map(|w| ('+', w))
            .chain(self.removed.iter().map(|w| ('-', w)));
        for (i, (sign, word)) in lines.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{sign}{word}")?;
        }
        Ok(())
    }
}

/// Split text on runs of Unicode whitespace.
///
/// Blank text yields no tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Words present in one text but nowhere in the other.
///
/// ```
/// use text_tools::diff::diff_words;
///
/// let diff = diff_words(
///     "The quick brown fox jumps over the lazy dog",
///     "The quick brown cat jumps over the active dog",
/// );
/// assert_eq!(diff.added, ["cat", "active"]);
/// assert_eq!(diff.removed, ["fox", "lazy"]);
/// ```
pub fn diff_words(old: &str, new: &str) -> WordDiff {
    let old_words: HashSet<&str> = tokenize(old).collect();
    let new_words: HashSet<&str> = tokenize(new).collect();

    let added = missing_from(tokenize(new), &old_words);
    let removed = missing_from(tokenize(old), &new_words);

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        "computed word diff"
    );
    WordDiff { added, removed }
}

fn missing_from<'a>(
    tokens: impl Iterator<Item = &'a str>,
    other: &HashSet<&str>,
) -> Vec<String> {
    tokens
        .filter(|t| !other.contains(t))
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
