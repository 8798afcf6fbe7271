//! `encode` and `decode` handlers.

use super::CommandOutput;
use crate::codec::{encode_runs, run_length_decode_with_limit, run_length_encode};
use crate::error::ErrorContext;
use crate::pipeline::{OutputFormat, render};
use anyhow::Result;
use serde_json::json;

/// Run-length encode `text`.
pub fn run_encode(text: &str, format: OutputFormat) -> Result<CommandOutput> {
    let encoded = run_length_encode(text).context("encoding argument")?;

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "encoded": encoded,
        "runs": encode_runs(text),
        "input_chars": text.chars().count(),
        "encoded_chars": encoded.chars().count(),
    });
    let content = render(format, &value, || encoded.clone())?;
    Ok(CommandOutput::success(content))
}

/// Decode run-length `encoded`, refusing output longer than `max_len`.
pub fn run_decode(encoded: &str, max_len: usize, format: OutputFormat) -> Result<CommandOutput> {
    let decoded = run_length_decode_with_limit(encoded, max_len).context("decoding argument")?;

    let value = json!({
        "tool": "text-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "decoded": decoded,
        "decoded_chars": decoded.chars().count(),
    });
    let content = render(format, &value, || decoded.clone())?;
    Ok(CommandOutput::success(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FormatError, TextToolsError};

    #[test]
    fn test_encode_decode_text() {
        let out = run_encode("AAABBBCCCCDDEEEE", OutputFormat::Text).unwrap();
        assert_eq!(out.content, "3A3B4C2D4E");

        let out = run_decode("3A3B4C2D4E", 1024, OutputFormat::Text).unwrap();
        assert_eq!(out.content, "AAABBBCCCCDDEEEE");
    }

    #[test]
    fn test_encode_json_lists_runs() {
        let out = run_encode("aab", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out.content).unwrap();
        assert_eq!(parsed["encoded"], "2ab");
        assert_eq!(parsed["runs"][0]["count"], 2);
        assert_eq!(parsed["runs"][1]["symbol"], "b");
    }

    #[test]
    fn test_decode_error_has_context() {
        let err = run_decode("4", 1024, OutputFormat::Text).unwrap_err();
        let inner = err.downcast_ref::<TextToolsError>().unwrap();
        assert_eq!(
            inner.format_kind(),
            Some(&FormatError::MissingSymbol { position: 0 })
        );
        assert!(err.to_string().contains("decoding argument"));
    }

    #[test]
    fn test_decode_respects_limit() {
        assert!(run_decode("5x", 4, OutputFormat::Text).is_err());
    }
}
