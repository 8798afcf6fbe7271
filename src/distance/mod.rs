//! Dynamic-programming distance and alignment between sequences.
//!
//! Both algorithms fill a fresh [`DistanceTable`] per call; nothing is
//! cached between calls.

mod edit;
mod lcs;
mod table;

pub use edit::{edit_distance, levenshtein, levenshtein_with};
pub use lcs::{longest_common_substring, longest_common_substring_slice};
pub use table::DistanceTable;
