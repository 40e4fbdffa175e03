//! Error types for the lexigraph library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`LexigraphError`]. Every variant is fatal for the construction run that
//! produced it; missing time data is not an error and never surfaces here.
//!
//! # Examples
//!
//! ```
//! use lexigraph::error::{LexigraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexigraphError::format("expected 4 pointer fields"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// A lexicon or time-table line does not match its declared layout.
    #[error("Format error: {0}")]
    Format(String),

    /// A part-of-speech code or label has no entry in the key scheme.
    #[error("Unknown part of speech: {0}")]
    UnknownPartOfSpeech(String),

    /// A source file is missing or unreadable.
    #[error("Input error: {0}")]
    Input(String),

    /// Graph construction or lookup failures (dangling pointers, missing edges).
    #[error("Graph error: {0}")]
    Graph(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Format(msg.into())
    }

    /// Create a new unknown part-of-speech error.
    pub fn unknown_part_of_speech<S: Into<String>>(code: S) -> Self {
        LexigraphError::UnknownPartOfSpeech(code.into())
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Input(msg.into())
    }

    /// Create a new graph error.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Graph(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        LexigraphError::Other(format!("Not found: {}", what.into()))
    }

    /// Wrap a format error with the file and line it came from.
    pub fn at_line(self, file: &str, line_number: usize) -> Self {
        match self {
            LexigraphError::Format(msg) => {
                LexigraphError::Format(format!("{file}:{line_number}: {msg}"))
            }
            LexigraphError::UnknownPartOfSpeech(code) => LexigraphError::UnknownPartOfSpeech(
                format!("{code} (at {file}:{line_number})"),
            ),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexigraphError::format("truncated line");
        assert_eq!(error.to_string(), "Format error: truncated line");

        let error = LexigraphError::unknown_part_of_speech("x");
        assert_eq!(error.to_string(), "Unknown part of speech: x");

        let error = LexigraphError::graph("no edge");
        assert_eq!(error.to_string(), "Graph error: no edge");
    }

    #[test]
    fn test_at_line_decorates_format_errors() {
        let error = LexigraphError::format("bad hex").at_line("data.noun", 30);
        assert_eq!(error.to_string(), "Format error: data.noun:30: bad hex");

        let error = LexigraphError::input("missing").at_line("data.noun", 30);
        assert_eq!(error.to_string(), "Input error: missing");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: LexigraphError = json_error.into();
        assert!(matches!(error, LexigraphError::Json(_)));
    }
}
