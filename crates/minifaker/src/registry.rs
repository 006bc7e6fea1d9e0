//! Locale registry and field resolution.
//!
//! The registry maps locale names to their bundles and remembers a default
//! locale. The first locale added to an empty registry becomes the default,
//! so the order in which locales are installed decides which one generators
//! fall back on. Install locales in a fixed order when output must be
//! reproducible.

use std::collections::BTreeMap;

use camino::Utf8Path;
use cap_std::fs::Dir;
use tracing::debug;

use crate::bundle::{LocaleBundle, LocaleFile};
use crate::error::LocaleError;

/// A request for one field of one locale.
///
/// When `locale` is `None` the registry's default locale is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRequest<'a> {
    /// Explicit locale, or `None` for the default.
    pub locale: Option<&'a str>,
    /// Field key to read.
    pub key: &'a str,
}

impl<'a> FieldRequest<'a> {
    /// Requests `key` from the default locale.
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self { locale: None, key }
    }

    /// Overrides the locale the field is read from.
    #[must_use]
    pub const fn in_locale(mut self, locale: Option<&'a str>) -> Self {
        self.locale = locale;
        self
    }
}

/// Named locale bundles plus the default locale pointer.
///
/// # Example
///
/// ```
/// use minifaker::{FieldRequest, LocaleBundle, LocaleRegistry};
///
/// let mut registry = LocaleRegistry::new();
/// registry.add_locale("fr", LocaleBundle::new().with_field("firstNames", ["Camille"]));
/// registry.add_locale("en", LocaleBundle::new().with_field("firstNames", ["Ada"]));
///
/// // The first registration became the default.
/// assert_eq!(registry.default_locale(), Some("fr"));
///
/// let names = registry
///     .get_locale_data(FieldRequest::new("firstNames"))
///     .expect("field resolves");
/// assert_eq!(names, ["Camille"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: BTreeMap<String, LocaleBundle>,
    default_locale: Option<String>,
}

impl LocaleRegistry {
    /// Creates an empty registry with no default locale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `bundle` under `name`, which is also the
    /// default locale.
    #[must_use]
    pub fn with_locale(name: impl Into<String>, bundle: LocaleBundle) -> Self {
        let mut registry = Self::new();
        registry.add_locale(name, bundle);
        registry
    }

    /// Registers `bundle` under `name`, replacing any bundle already stored
    /// under that name.
    ///
    /// If the registry was empty before the call, `name` also becomes the
    /// default locale. Later calls never move the default.
    pub fn add_locale(&mut self, name: impl Into<String>, bundle: LocaleBundle) {
        let locale = name.into();
        let becomes_default = self.locales.is_empty();
        debug!(
            locale = %locale,
            fields = bundle.len(),
            becomes_default,
            "locale registered"
        );
        if becomes_default {
            self.default_locale = Some(locale.clone());
        }
        self.locales.insert(locale, bundle);
    }

    /// Points the default locale at `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownLocale`] if `name` is not registered. The
    /// previous default is kept.
    pub fn set_default_locale(&mut self, name: &str) -> Result<(), LocaleError> {
        if !self.locales.contains_key(name) {
            return Err(LocaleError::UnknownLocale {
                locale: name.to_owned(),
            });
        }
        debug!(locale = name, "default locale changed");
        self.default_locale = Some(name.to_owned());
        Ok(())
    }

    /// Parses a locale file and registers its bundle.
    ///
    /// Returns the name the bundle was registered under.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the file cannot be read or parsed. The
    /// registry is unchanged on failure.
    pub fn load_locale_file(&mut self, dir: &Dir, path: &Utf8Path) -> Result<String, LocaleError> {
        let (name, bundle) = LocaleFile::from_file(dir, path)?.into_parts();
        self.add_locale(name.clone(), bundle);
        Ok(name)
    }

    /// Resolves one field of the requested or default locale.
    ///
    /// A default locale must exist even when the request names its locale
    /// explicitly. Fields that are present but empty resolve to an empty
    /// slice.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`LocaleError::NoDefaultLocale`] if no locale was ever registered
    /// - [`LocaleError::UnknownLocale`] if the effective locale is not
    ///   registered
    /// - [`LocaleError::MissingField`] if the bundle has no such key
    pub fn get_locale_data(&self, request: FieldRequest<'_>) -> Result<&[String], LocaleError> {
        let Some(default_locale) = self.default_locale.as_deref() else {
            return Err(LocaleError::NoDefaultLocale);
        };

        let locale = request.locale.unwrap_or(default_locale);
        let bundle = self
            .locales
            .get(locale)
            .ok_or_else(|| LocaleError::UnknownLocale {
                locale: locale.to_owned(),
            })?;

        bundle.field(request.key).ok_or_else(|| {
            debug!(locale, key = request.key, "locale field missing");
            LocaleError::MissingField {
                locale: locale.to_owned(),
                key: request.key.to_owned(),
            }
        })
    }

    /// Returns the default locale name, if any locale was registered.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Returns the bundle registered under `name`.
    #[must_use]
    pub fn locale(&self, name: &str) -> Option<&LocaleBundle> {
        self.locales.get(name)
    }

    /// Returns `true` if a bundle is registered under `name`.
    #[must_use]
    pub fn contains_locale(&self, name: &str) -> bool {
        self.locales.contains_key(name)
    }

    /// Iterates over the registered locale names in sorted order.
    pub fn locale_names(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Returns the number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Returns `true` if no locale has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn french() -> LocaleBundle {
        LocaleBundle::new()
            .with_field("firstNames", ["Camille", "Louise"])
            .with_field("cityPrefixes", Vec::<String>::new())
    }

    fn english() -> LocaleBundle {
        LocaleBundle::new()
            .with_field("firstNames", ["Ada"])
            .with_field("jobTypes", ["Engineer"])
    }

    #[fixture]
    fn registry() -> LocaleRegistry {
        let mut registry = LocaleRegistry::new();
        registry.add_locale("fr", french());
        registry.add_locale("en", english());
        registry
    }

    #[test]
    fn empty_registry_has_no_default() {
        let registry = LocaleRegistry::new();

        assert!(registry.is_empty());
        assert_eq!(registry.default_locale(), None);
    }

    #[rstest]
    fn first_registration_becomes_default(registry: LocaleRegistry) {
        assert_eq!(registry.default_locale(), Some("fr"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn with_locale_sets_default() {
        let registry = LocaleRegistry::with_locale("en", english());

        assert_eq!(registry.default_locale(), Some("en"));
    }

    #[rstest]
    fn re_adding_a_locale_replaces_bundle_but_keeps_default(mut registry: LocaleRegistry) {
        registry.add_locale("en", LocaleBundle::new().with_field("firstNames", ["Grace"]));

        assert_eq!(registry.default_locale(), Some("fr"));
        let names = registry
            .get_locale_data(FieldRequest::new("firstNames").in_locale(Some("en")))
            .expect("field resolves");
        assert_eq!(names, ["Grace"]);
    }

    #[rstest]
    fn set_default_locale_repoints_default(mut registry: LocaleRegistry) {
        registry.set_default_locale("en").expect("known locale");

        assert_eq!(registry.default_locale(), Some("en"));
    }

    #[rstest]
    fn set_default_locale_rejects_unknown_locale(mut registry: LocaleRegistry) {
        let result = registry.set_default_locale("de");

        assert_eq!(
            result,
            Err(LocaleError::UnknownLocale {
                locale: "de".to_owned()
            })
        );
        assert_eq!(registry.default_locale(), Some("fr"));
    }

    #[rstest]
    fn resolves_from_default_locale(registry: LocaleRegistry) {
        let names = registry
            .get_locale_data(FieldRequest::new("firstNames"))
            .expect("field resolves");

        assert_eq!(names, ["Camille", "Louise"]);
    }

    #[rstest]
    fn resolves_from_explicit_locale(registry: LocaleRegistry) {
        let jobs = registry
            .get_locale_data(FieldRequest::new("jobTypes").in_locale(Some("en")))
            .expect("field resolves");

        assert_eq!(jobs, ["Engineer"]);
    }

    #[test]
    fn explicit_locale_still_requires_a_default() {
        let registry = LocaleRegistry::new();
        let result = registry.get_locale_data(FieldRequest::new("firstNames").in_locale(Some("fr")));

        assert_eq!(result, Err(LocaleError::NoDefaultLocale));
    }

    #[rstest]
    #[case::unknown_locale(
        Some("de"),
        "firstNames",
        LocaleError::UnknownLocale { locale: "de".to_owned() }
    )]
    #[case::missing_field_in_default(
        None,
        "jobTypes",
        LocaleError::MissingField { locale: "fr".to_owned(), key: "jobTypes".to_owned() }
    )]
    #[case::missing_field_in_explicit(
        Some("en"),
        "cityPrefixes",
        LocaleError::MissingField { locale: "en".to_owned(), key: "cityPrefixes".to_owned() }
    )]
    fn rejects_unresolvable_requests(
        registry: LocaleRegistry,
        #[case] locale: Option<&str>,
        #[case] key: &str,
        #[case] expected: LocaleError,
    ) {
        let result = registry.get_locale_data(FieldRequest::new(key).in_locale(locale));

        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn empty_fields_resolve_to_empty_slice(registry: LocaleRegistry) {
        let prefixes = registry
            .get_locale_data(FieldRequest::new("cityPrefixes"))
            .expect("present field resolves");

        assert!(prefixes.is_empty());
    }

    #[rstest]
    fn lists_locale_names_in_order(registry: LocaleRegistry) {
        assert_eq!(registry.locale_names().collect::<Vec<_>>(), ["en", "fr"]);
        assert!(registry.contains_locale("fr"));
        assert!(registry.locale("de").is_none());
    }
}
