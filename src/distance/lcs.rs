//! Longest common substring.

use super::table::DistanceTable;

/// Longest contiguous run of `a` that also occurs in `b`.
///
/// `L[i][j]` holds the length of the common run ending at `a[i-1]` and
/// `b[j-1]`. The best run only moves on a strictly longer match, so among
/// equally long runs the one found first in the row-major scan wins.
#[must_use]
pub fn longest_common_substring_slice<'a, T: PartialEq>(a: &'a [T], b: &[T]) -> &'a [T] {
    let (m, n) = (a.len(), b.len());
    if m == 0 || n == 0 {
        return &a[..0];
    }

    let mut table = DistanceTable::for_lengths(m, n);
    let mut best_len = 0;
    let mut best_end = 0;

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                let run = table.get(i - 1, j - 1) + 1;
                table.set(i, j, run);
                if run > best_len {
                    best_len = run;
                    best_end = i;
                }
            }
        }
    }

    &a[best_end - best_len..best_end]
}

/// Character-level longest common substring, taken from `a`.
///
/// Returns an empty string when the inputs share no character.
#[must_use]
pub fn longest_common_substring(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    longest_common_substring_slice(&a, &b).iter().collect()
}
