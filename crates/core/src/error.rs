//! Error types for defaults-file loading and saving.
//!
//! Every failure here is fatal to the operation that produced it; the
//! engine reports it and the host decides how to surface it (the CLI
//! exits non-zero). There is no retry path.

use std::path::PathBuf;

/// Errors from registry construction, file I/O, and parsing.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two schema rows declare the same option name (authoring bug).
    #[error("duplicate option name in schema: {0}")]
    DuplicateOption(&'static str),

    /// A schema row's storage slot and declared default disagree on
    /// kind (authoring bug).
    #[error("option {0} declares mismatched storage and default kinds")]
    KindMismatch(&'static str),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input names an option absent from the registry.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The value token does not parse as the option's declared kind.
    #[error("invalid value {value:?} for option {name}")]
    InvalidValue { name: String, value: String },

    /// A legacy entry ended before its value token.
    #[error("missing value for option {name}")]
    MissingValue { name: String },

    /// A modern-dialect line is not a `name = value` assignment.
    #[error("malformed assignment at line {line}")]
    Malformed { line: usize },
}
