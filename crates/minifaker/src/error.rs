//! Error types for the minifaker crate.
//!
//! Locale lookups, random sampling and field generation each get their own
//! semantic error enum, built with `thiserror`. Every error is returned to the
//! caller at the point of detection; none leave the registry modified.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while registering, loading or resolving locale data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// No locale has been registered, so there is no default to fall back on.
    #[error("no default locale defined; register at least one locale")]
    NoDefaultLocale,

    /// The requested locale is not registered.
    #[error("locale '{locale}' is not registered")]
    UnknownLocale {
        /// The locale name that was requested.
        locale: String,
    },

    /// The locale bundle has no field with the requested key.
    #[error("locale '{locale}' has no data for field '{key}'")]
    MissingField {
        /// Locale that was searched.
        locale: String,
        /// Field key that was not found.
        key: String,
    },

    /// A locale file could not be read.
    #[error("failed to read locale file at '{path}': {message}")]
    IoError {
        /// Path to the locale file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A locale file is malformed or missing required fields.
    #[error("invalid locale JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The locale file version is not supported.
    #[error("unsupported locale file version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the file.
        actual: u32,
    },

    /// A locale file declared an empty locale name.
    #[error("locale name must not be empty")]
    EmptyLocaleName,
}

/// Errors raised by the random sampling primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// There was nothing to pick from.
    #[error("cannot pick an element from an empty input")]
    EmptyInput,

    /// `object_element` was handed something other than a key/value object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind of JSON value that was supplied instead.
        found: &'static str,
    },
}

/// Errors returned by field generators.
///
/// A generator fails either because its locale data could not be resolved or
/// because the resolved data could not be sampled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Locale data could not be resolved.
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Resolved data could not be sampled.
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}
