//! Row-major grid backing the distance algorithms.

/// A `(rows × cols)` grid of non-negative integers.
///
/// Stored as one contiguous row-major buffer so the DP loops stay cache
/// friendly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceTable {
    /// Create a zero-filled table.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Create the `(m+1) × (n+1)` table for sequences of length `m` and `n`.
    #[must_use]
    pub fn for_lengths(m: usize, n: usize) -> Self {
        Self::new(m + 1, n + 1)
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Read cell `(i, j)`.
    ///
    /// Panics if the index is outside the table.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[self.index(i, j)]
    }

    /// Write cell `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: usize) {
        let idx = self.index(i, j);
        self.cells[idx] = value;
    }

    /// The bottom-right cell, or 0 for an empty table.
    #[must_use]
    pub fn last(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}
