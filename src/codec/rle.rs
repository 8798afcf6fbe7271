use crate::error::{FormatError, Result, TextToolsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default cap on decoded output, in chars.
pub const DEFAULT_MAX_DECODED_LEN: usize = 16 * 1024 * 1024;

/// A symbol repeated `count` times.
///
/// Runs produced by [`encode_runs`] and [`parse_runs`] always have
/// `count >= 1`. A hand-built zero-count run is empty and writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub count: usize,
    pub symbol: char,
}

impl Run {
    #[must_use]
    pub const fn new(count: usize, symbol: char) -> Self {
        Self { count, symbol }
    }
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            0 => Ok(()),
            1 => write!(f, "{}", self.symbol),
            count => write!(f, "{count}{}", self.symbol),
        }
    }
}

/// Group consecutive equal chars of `input` into runs.
#[must_use]
pub fn encode_runs(input: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for symbol in input.chars() {
        match runs.last_mut() {
            Some(run) if run.symbol == symbol => run.count += 1,
            _ => runs.push(Run::new(1, symbol)),
        }
    }
    runs
}

/// Render runs in the textual encoded form.
#[must_use]
pub fn runs_to_string(runs: &[Run]) -> String {
    runs.iter().map(ToString::to_string).collect()
}

/// Run-length encode `input`.
///
/// `"AAABBBCCCCDDEEEE"` encodes to `"3A3B4C2D4E"`; single symbols carry no
/// count. Fails with [`FormatError::DigitSymbol`] if `input` contains an
/// ASCII digit.
pub fn run_length_encode(input: &str) -> Result<String> {
    if let Some((position, symbol)) = input.chars().enumerate().find(|(_, c)| c.is_ascii_digit())
    {
        return Err(TextToolsError::format(
            "encoding",
            FormatError::DigitSymbol { position, symbol },
        ));
    }

    let runs = encode_runs(input);
    tracing::debug!(runs = runs.len(), "encoded input");
    Ok(runs_to_string(&runs))
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Between groups
    Start,
    /// Inside a count that began at `start`
    Count { value: usize, start: usize },
}

/// Parse the encoded form into runs.
///
/// Grammar: `(digit* symbol)*` where `symbol` is any non-ASCII-digit char.
pub fn parse_runs(encoded: &str) -> Result<Vec<Run>> {
    let mut runs = Vec::new();
    let mut state = ScanState::Start;

    for (position, c) in encoded.chars().enumerate() {
        state = match (state, c.to_digit(10)) {
            (ScanState::Start, Some(digit)) => ScanState::Count {
                value: digit as usize,
                start: position,
            },
            (ScanState::Count { value, start }, Some(digit)) => {
                let value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit as usize))
                    .ok_or_else(|| {
                        TextToolsError::format(
                            "decoding",
                            FormatError::CountOverflow { position: start },
                        )
                    })?;
                ScanState::Count { value, start }
            }
            (ScanState::Start, None) => {
                runs.push(Run::new(1, c));
                ScanState::Start
            }
            (ScanState::Count { value, start }, None) => {
                if value == 0 {
                    return Err(TextToolsError::format(
                        "decoding",
                        FormatError::ZeroCount { position: start },
                    ));
                }
                runs.push(Run::new(value, c));
                ScanState::Start
            }
        };
    }

    if let ScanState::Count { start, .. } = state {
        return Err(TextToolsError::format(
            "decoding",
            FormatError::MissingSymbol { position: start },
        ));
    }

    Ok(runs)
}

/// Decode the run-length form back into text, capped at
/// [`DEFAULT_MAX_DECODED_LEN`] chars.
pub fn run_length_decode(encoded: &str) -> Result<String> {
    run_length_decode_with_limit(encoded, DEFAULT_MAX_DECODED_LEN)
}

/// Decode with an explicit cap on the expanded length.
///
/// The whole input is validated and the total size checked before anything
/// is expanded.
pub fn run_length_decode_with_limit(encoded: &str, max_len: usize) -> Result<String> {
    let runs = parse_runs(encoded)?;

    let total = runs
        .iter()
        .try_fold(0usize, |acc, run| acc.checked_add(run.count))
        .filter(|total| *total <= max_len)
        .ok_or_else(|| {
            TextToolsError::format(
                "decoding",
                FormatError::OutputTooLarge { limit: max_len },
            )
        })?;

    let mut decoded = String::with_capacity(total);
    for run in &runs {
        decoded.extend(std::iter::repeat_n(run.symbol, run.count));
    }
    tracing::debug!(runs = runs.len(), chars = total, "decoded input");
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_err(encoded: &str) -> FormatError {
        run_length_decode(encoded)
            .unwrap_err()
            .format_kind()
            .cloned()
            .expect("format error")
    }

    #[test]
    fn test_encode_reference() {
        assert_eq!(run_length_encode("AAABBBCCCCDDEEEE").unwrap(), "3A3B4C2D4E");
    }

    #[test]
    fn test_decode_reference() {
        assert_eq!(run_length_decode("3A3B4C2D4E").unwrap(), "AAABBBCCCCDDEEEE");
    }

    #[test]
    fn test_singletons_have_no_count() {
        assert_eq!(run_length_encode("ABCCD").unwrap(), "AB2CD");
        assert_eq!(run_length_decode("AB2CD").unwrap(), "ABCCD");
    }

    #[test]
    fn test_empty() {
        assert_eq!(run_length_encode("").unwrap(), "");
        assert_eq!(run_length_decode("").unwrap(), "");
        assert!(encode_runs("").is_empty());
    }

    #[test]
    fn test_multi_digit_count() {
        let input = "x".repeat(12);
        assert_eq!(run_length_encode(&input).unwrap(), "12x");
        assert_eq!(run_length_decode("12x").unwrap(), input);
    }

    #[test]
    fn test_encode_runs_structure() {
        assert_eq!(
            encode_runs("aab🚀🚀"),
            vec![Run::new(2, 'a'), Run::new(1, 'b'), Run::new(2, '🚀')]
        );
    }

    #[test]
    fn test_whitespace_symbols_roundtrip() {
        let input = "a  b\n\n\nc";
        let encoded = run_length_encode(input).unwrap();
        assert_eq!(encoded, "a2 b3\nc");
        assert_eq!(run_length_decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_encode_rejects_digits() {
        let err = run_length_encode("AB3C").unwrap_err();
        assert_eq!(
            err.format_kind(),
            Some(&FormatError::DigitSymbol {
                position: 2,
                symbol: '3'
            })
        );
    }

    #[test]
    fn test_decode_trailing_count() {
        assert_eq!(decode_err("3"), FormatError::MissingSymbol { position: 0 });
        assert_eq!(decode_err("A12"), FormatError::MissingSymbol { position: 1 });
    }

    #[test]
    fn test_decode_zero_count() {
        assert_eq!(decode_err("2A0B"), FormatError::ZeroCount { position: 2 });
    }

    #[test]
    fn test_decode_count_overflow() {
        let encoded = format!("{}A", "9".repeat(40));
        assert_eq!(decode_err(&encoded), FormatError::CountOverflow { position: 0 });
    }

    #[test]
    fn test_decode_limit() {
        assert_eq!(run_length_decode_with_limit("3A", 3).unwrap(), "AAA");
        let err = run_length_decode_with_limit("3A2B", 4).unwrap_err();
        assert_eq!(
            err.format_kind(),
            Some(&FormatError::OutputTooLarge { limit: 4 })
        );
    }

    #[test]
    fn test_non_ascii_digit_is_a_symbol() {
        // Arabic-Indic three is not an ASCII digit, so it is a plain symbol.
        assert_eq!(run_length_encode("٣٣").unwrap(), "2٣");
        assert_eq!(run_length_decode("2٣").unwrap(), "٣٣");
    }

    #[test]
    fn test_run_display() {
        assert_eq!(Run::new(1, 'z').to_string(), "z");
        assert_eq!(Run::new(5, 'z').to_string(), "5z");
    }

    #[test]
    fn test_zero_count_run_writes_nothing() {
        assert_eq!(Run::new(0, 'a').to_string(), "");

        let runs = [Run::new(2, 'x'), Run::new(0, 'a'), Run::new(1, 'y')];
        let encoded = runs_to_string(&runs);
        assert_eq!(encoded, "2xy");
        assert_eq!(run_length_decode(&encoded).unwrap(), "xxy");
    }
}
