//! CLI command handlers.
//!
//! Handlers take already-resolved inputs and configuration, and return the
//! rendered output plus an exit code so they can be tested without a
//! process. `main.rs` does argument parsing, config loading and writing.

mod codec;
mod diff;
mod distance;
mod search;

pub use codec::{run_decode, run_encode};
pub use diff::{DiffCommand, run_diff};
pub use distance::{run_distance, run_lcs};
pub use search::{run_fuzzy, run_rank};

use crate::pipeline::exit_codes;

/// What a handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct CommandOutput {
    /// Rendered result, written to stdout or the output file
    pub content: String,
    /// Process exit code
    pub exit_code: i32,
}

impl CommandOutput {
    pub const fn success(content: String) -> Self {
        Self {
            content,
            exit_code: exit_codes::SUCCESS,
        }
    }

    pub const fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}
