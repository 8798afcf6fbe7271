//! `fuzzy` and `rank` handlers.

use super::CommandOutput;
use crate::matching::{SimilarityConfig, fuzzy_search, rank_candidates};
use crate::pipeline::{OutputFormat, exit_codes, render};
use anyhow::Result;
use serde_json::json;
use std::fmt::Write as _;

/// Score each text against a fuzzy query.
///
/// Exits with [`exit_codes::CHANGES_DETECTED`] when nothing matches.
pub fn run_fuzzy(query: &str, texts: &[String], format: OutputFormat) -> Result<CommandOutput> {
    let hits = fuzzy_search(query, texts);

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "query": query,
        "matches": hits,
    });
    let content = render(format, &value, || {
        let mut out = String::new();
        for hit in &hits {
            let _ = writeln!(out, "{:>3}  {}", hit.score, hit.text);
        }
        out.trim_end().to_string()
    })?;

    let exit_code = if hits.is_empty() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    };
    Ok(CommandOutput::success(content).with_exit_code(exit_code))
}

/// Rank candidates by similarity to `query`.
///
/// Exits with [`exit_codes::CHANGES_DETECTED`] when no candidate clears the
/// threshold.
pub fn run_rank(
    query: &str,
    candidates: &[String],
    config: &SimilarityConfig,
    format: OutputFormat,
) -> Result<CommandOutput> {
    let ranked = rank_candidates(query, candidates, config);

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "query": query,
        "threshold": config.threshold,
        "matches": ranked,
    });
    let content = render(format, &value, || {
        let mut out = String::new();
        for m in &ranked {
            let _ = writeln!(out, "{:.3}  {:>3}  {}", m.score, m.distance, m.candidate);
        }
        out.trim_end().to_string()
    })?;

    let exit_code = if ranked.is_empty() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    };
    Ok(CommandOutput::success(content).with_exit_code(exit_code))
}
