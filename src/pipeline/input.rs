//! Text inputs given inline, as a file path, or on stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a text argument comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The argument itself is the text
    Literal(String),
    /// Read the file at this path
    File(PathBuf),
    /// Read all of stdin
    Stdin,
}

impl InputSource {
    /// Interpret a CLI argument. With `as_path`, `-` means stdin and
    /// anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &str, as_path: bool) -> Self {
        match (as_path, arg) {
            (false, _) => Self::Literal(arg.to_string()),
            (true, "-") => Self::Stdin,
            (true, path) => Self::File(PathBuf::from(path)),
        }
    }
}

/// Resolve an input to its text.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Literal(text) => Ok(text.clone()),
        InputSource::File(path) => read_file(path),
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    tracing::debug!("Reading input: {}", path.display());
    std::fs::read_to_string(path)
        .map_err(|e| crate::error::TextToolsError::io(path, e))
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(
            InputSource::from_arg("-", false),
            InputSource::Literal("-".to_string())
        );
        assert_eq!(InputSource::from_arg("-", true), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("a.txt", true),
            InputSource::File(PathBuf::from("a.txt"))
        );
    }

    #[test]
    fn test_read_literal_and_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("old.txt");
        std::fs::write(&path, "one two").unwrap();

        assert_eq!(
            read_input(&InputSource::Literal("x".to_string())).unwrap(),
            "x"
        );
        assert_eq!(read_input(&InputSource::File(path)).unwrap(), "one two");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(&InputSource::File(PathBuf::from("/nonexistent/in.txt")))
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/in.txt"));
    }
}
