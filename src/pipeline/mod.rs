//! Shared plumbing for the CLI handlers: reading inputs, writing results.

mod input;
mod output;

pub use input::{InputSource, read_input};
pub use output::{OutputFormat, OutputTarget, render, write_output};

/// Exit codes for scripting
pub mod exit_codes {
    /// Success - nothing to report
    pub const SUCCESS: i32 = 0;
    /// `diff` found changes (with --fail-on-change), or a search found nothing
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
