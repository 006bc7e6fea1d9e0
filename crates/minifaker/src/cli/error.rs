//! Error types for the minifaker CLI.

use thiserror::Error;

use crate::error::{GenerationError, LocaleError};

/// Errors surfaced by CLI parsing and value generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No field name was supplied.
    #[error("missing field name; run with --help to list fields")]
    MissingField,
    /// The field name is not one the CLI can generate.
    #[error("unknown field: {value}")]
    UnknownField {
        /// Field name that was not recognised.
        value: String,
    },
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// A locale file path has no file name component.
    #[error("locale file path '{path}' does not name a file")]
    InvalidLocalePath {
        /// Path that was supplied.
        path: String,
    },
    /// Locale registration or loading failed.
    #[error("locale error: {source}")]
    LocaleError {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },
    /// A value could not be generated.
    #[error("generation error: {source}")]
    GenerationError {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
}
