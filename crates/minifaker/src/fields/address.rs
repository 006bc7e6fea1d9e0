//! City name generators.

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::fields::LocaleOptions;
use crate::keys;

impl MiniFaker {
    /// Picks a city name from `cityNames`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the list cannot be resolved or is empty.
    pub fn city_name(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::CITY_NAMES)
    }

    /// Picks a city prefix from `cityPrefixes`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the list cannot be resolved or is empty.
    pub fn city_prefix(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::CITY_PREFIXES)
    }

    /// Picks a city suffix from `citySuffixes`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the list cannot be resolved or is empty.
    pub fn city_suffix(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::CITY_SUFFIXES)
    }

    /// Builds a city as `"{prefix} {name}{suffix}"`, e.g. "North Ashfordton".
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if any of the three lists cannot be
    /// resolved or is empty.
    pub fn city(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        let prefix = self.city_prefix(options)?;
        let name = self.city_name(options)?;
        let suffix = self.city_suffix(options)?;
        Ok(format!("{prefix} {name}{suffix}"))
    }
}
