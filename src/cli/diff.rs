//! Diff command handler.
//!
//! Implements the `diff` subcommand comparing the words of two texts.

use super::CommandOutput;
use crate::diff::diff_words;
use crate::pipeline::{InputSource, OutputFormat, exit_codes, read_input, render};
use anyhow::Result;
use serde_json::json;

/// Diff command configuration
#[derive(Debug, Clone)]
pub struct DiffCommand {
    pub old: InputSource,
    pub new: InputSource,
    pub fail_on_change: bool,
    pub format: OutputFormat,
}

/// Run the diff command.
///
/// The exit code is [`exit_codes::CHANGES_DETECTED`] when words differ and
/// `fail_on_change` is set.
pub fn run_diff(command: &DiffCommand) -> Result<CommandOutput> {
    let old = read_input(&command.old)?;
    let new = read_input(&command.new)?;

    let diff = diff_words(&old, &new);
    tracing::info!(
        "{} word(s) added, {} word(s) removed",
        diff.added.len(),
        diff.removed.len()
    );

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "added": diff.added,
        "removed": diff.removed,
        "total_changes": diff.total(),
    });
    let content = render(command.format, &value, || diff.to_string())?;

    let exit_code = if command.fail_on_change && !diff.is_empty() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    };
    Ok(CommandOutput::success(content).with_exit_code(exit_code))
}
