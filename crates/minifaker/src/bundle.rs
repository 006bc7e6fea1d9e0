//! Locale bundles and the locale file format.
//!
//! A bundle maps field keys to ordered lists of strings. Bundles are built in
//! code with [`LocaleBundle::with_field`] or loaded from a versioned JSON
//! locale file:
//!
//! ```json
//! {"version": 1, "locale": "fr", "fields": {"firstNames": ["Camille"]}}
//! ```

use std::collections::BTreeMap;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::error::LocaleError;

/// Current supported locale file version.
const SUPPORTED_VERSION: u32 = 1;

/// The data tables of a single locale.
///
/// # Example
///
/// ```
/// use minifaker::LocaleBundle;
///
/// let bundle = LocaleBundle::new().with_field("firstNames", ["Ada", "Grace"]);
/// assert_eq!(bundle.field("firstNames").map(<[String]>::len), Some(2));
/// assert!(bundle.field("lastNames").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleBundle {
    fields: BTreeMap<String, Vec<String>>,
}

impl LocaleBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundle with `key` set to `values`, replacing any previous
    /// list under that key.
    #[must_use]
    pub fn with_field<K, I>(mut self, key: K, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert_field(key, values);
        self
    }

    /// Sets `key` to `values`, replacing any previous list under that key.
    pub fn insert_field<K, I>(&mut self, key: K, values: I)
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields
            .insert(key.into(), values.into_iter().map(Into::into).collect());
    }

    /// Returns the values stored under `key`, if present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    /// Iterates over the field keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of fields in the bundle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the bundle has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A locale bundle together with the locale name it was published under.
///
/// # Example
///
/// ```
/// use minifaker::LocaleFile;
///
/// let json = r#"{
///     "version": 1,
///     "locale": "fr",
///     "fields": {"firstNames": ["Camille", "Louise"]}
/// }"#;
///
/// let file = LocaleFile::from_json(json).expect("valid locale file");
/// assert_eq!(file.name(), "fr");
/// assert_eq!(file.bundle().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    name: String,
    bundle: LocaleBundle,
}

impl LocaleFile {
    /// Parses a locale file from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The locale name is empty
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        let raw: RawLocaleFile =
            serde_json::from_str(json).map_err(|e| LocaleError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a locale file relative to a capability directory.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, LocaleError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| LocaleError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawLocaleFile) -> Result<Self, LocaleError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(LocaleError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let name = raw.locale.trim();
        if name.is_empty() {
            return Err(LocaleError::EmptyLocaleName);
        }

        Ok(Self {
            name: name.to_owned(),
            bundle: LocaleBundle { fields: raw.fields },
        })
    }

    /// Returns the locale name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the locale bundle.
    #[must_use]
    pub const fn bundle(&self) -> &LocaleBundle {
        &self.bundle
    }

    /// Splits the file into its locale name and bundle.
    #[must_use]
    pub fn into_parts(self) -> (String, LocaleBundle) {
        (self.name, self.bundle)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLocaleFile {
    version: u32,
    locale: String,
    fields: BTreeMap<String, Vec<String>>,
}
