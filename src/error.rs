//! Unified error types for text-tools.
//!
//! The algorithms themselves are total; the only fallible paths are the
//! run-length codec (restricted alphabet, malformed encoded input) and the
//! configuration/CLI layer around it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for text-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TextToolsError {
    /// Encoded or to-be-encoded text violated the run-length format
    #[error("Format error: {context}")]
    Format {
        context: String,
        #[source]
        source: FormatError,
    },

    /// A caller-supplied argument was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific run-length format violations.
///
/// Positions are char offsets into the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    #[error("digit symbol '{symbol}' at position {position} cannot be run-length encoded")]
    DigitSymbol { position: usize, symbol: char },

    #[error("count at position {position} is not followed by a symbol")]
    MissingSymbol { position: usize },

    #[error("zero run count at position {position}")]
    ZeroCount { position: usize },

    #[error("run count at position {position} overflows")]
    CountOverflow { position: usize },

    #[error("decoded output would exceed {limit} symbols")]
    OutputTooLarge { limit: usize },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for text-tools operations
pub type Result<T> = std::result::Result<T, TextToolsError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl TextToolsError {
    /// Create a format error with context
    pub fn format(context: impl Into<String>, source: FormatError) -> Self {
        Self::Format {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The underlying format violation, if this is a format error.
    #[must_use]
    pub const fn format_kind(&self) -> Option<&FormatError> {
        match self {
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TextToolsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<FormatError> for TextToolsError {
    fn from(err: FormatError) -> Self {
        Self::format(String::new(), err)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, e.g.
/// `"decoding argument: run 3: count at position 4 ..."`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<TextToolsError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: TextToolsError, new_ctx: &str) -> TextToolsError {
    match err {
        TextToolsError::Format {
            context: existing,
            source,
        } => TextToolsError::Format {
            context: chain_context(new_ctx, &existing),
            source,
        },
        TextToolsError::Io {
            path,
            message,
            source,
        } => TextToolsError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        TextToolsError::InvalidArgument(msg) => {
            TextToolsError::InvalidArgument(chain_context(new_ctx, &msg))
        }
        TextToolsError::Config(msg) => TextToolsError::Config(chain_context(new_ctx, &msg)),
        TextToolsError::Validation(msg) => {
            TextToolsError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Returns `"new: existing"`, or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| TextToolsError::Validation(context.into()))
    }
}
