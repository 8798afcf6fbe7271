//! `distance` and `lcs` handlers.

use super::CommandOutput;
use crate::distance::{levenshtein_with, longest_common_substring};
use crate::pipeline::{OutputFormat, render};
use anyhow::Result;
use serde_json::json;

/// Edit distance between two strings.
pub fn run_distance(
    a: &str,
    b: &str,
    fold_case: bool,
    format: OutputFormat,
) -> Result<CommandOutput> {
    let distance = levenshtein_with(a, b, fold_case);
    tracing::debug!(distance, fold_case, "computed edit distance");

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "a": a,
        "b": b,
        "ignore_case": fold_case,
        "distance": distance,
    });
    let content = render(format, &value, || distance.to_string())?;
    Ok(CommandOutput::success(content))
}

/// Longest common substring of two strings.
pub fn run_lcs(a: &str, b: &str, format: OutputFormat) -> Result<CommandOutput> {
    let common = longest_common_substring(a, b);

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "a": a,
        "b": b,
        "substring": common,
        "length": common.chars().count(),
    });
    let content = render(format, &value, || common.clone())?;
    Ok(CommandOutput::success(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_text() {
        let out = run_distance("kitten", "sitting", false, OutputFormat::Text).unwrap();
        assert_eq!(out.content, "3");
        assert_eq!(out.exit_code, 0);
    }

    #[test]
    fn test_distance_ignore_case_json() {
        let out = run_distance("ABC", "abc", true, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out.content).unwrap();
        assert_eq!(parsed["distance"], 0);
        assert_eq!(parsed["ignore_case"], true);
    }

    #[test]
    fn test_lcs() {
        let out = run_lcs("JavaScript", "TypeScript", OutputFormat::Text).unwrap();
        assert_eq!(out.content, "Script");

        let out = run_lcs("JavaScript", "TypeScript", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out.content).unwrap();
        assert_eq!(parsed["length"], 6);
    }
}
