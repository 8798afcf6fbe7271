//! Word-level diffing.
//!
//! This is a membership diff, not an alignment: a word counts as added when
//! it never occurs in the old text and as removed when it never occurs in the
//! new one. Repeats, moves and reorderings are invisible to it. Use
//! [`crate::distance::edit_distance`] over token slices when an edit count is
//! needed instead.

mod words;

pub use words::{WordDiff, diff_words, tokenize};
