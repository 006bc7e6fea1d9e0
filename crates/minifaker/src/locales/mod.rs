//! Built-in locale bundles.
//!
//! The bundles are embedded locale files. Installing one registers it under
//! its stable name; installing it again leaves the registry untouched, so a
//! bundle that callers have since overridden is not clobbered.

use tracing::debug;

use crate::bundle::LocaleFile;
use crate::error::LocaleError;
use crate::registry::LocaleRegistry;

/// Name of the English locale.
pub const EN: &str = "en";

/// Name of the French locale.
pub const FR: &str = "fr";

const EN_JSON: &str = include_str!("../../locales/en.json");
const FR_JSON: &str = include_str!("../../locales/fr.json");

/// Parses the embedded English locale.
///
/// # Errors
///
/// Returns [`LocaleError`] if the embedded file is malformed.
pub fn en() -> Result<LocaleFile, LocaleError> {
    LocaleFile::from_json(EN_JSON)
}

/// Parses the embedded French locale.
///
/// The French bundle only carries names, phone formats and city names.
///
/// # Errors
///
/// Returns [`LocaleError`] if the embedded file is malformed.
pub fn fr() -> Result<LocaleFile, LocaleError> {
    LocaleFile::from_json(FR_JSON)
}

/// Registers the English locale unless a locale named `en` already exists.
///
/// Returns `true` when the bundle was added.
///
/// # Errors
///
/// Returns [`LocaleError`] if the embedded file is malformed.
pub fn install_en(registry: &mut LocaleRegistry) -> Result<bool, LocaleError> {
    install(registry, EN, en)
}

/// Registers the French locale unless a locale named `fr` already exists.
///
/// Returns `true` when the bundle was added.
///
/// # Errors
///
/// Returns [`LocaleError`] if the embedded file is malformed.
pub fn install_fr(registry: &mut LocaleRegistry) -> Result<bool, LocaleError> {
    install(registry, FR, fr)
}

/// Registers every built-in locale, English first.
///
/// On an empty registry this makes `en` the default.
///
/// # Errors
///
/// Returns [`LocaleError`] if an embedded file is malformed.
pub fn install_all(registry: &mut LocaleRegistry) -> Result<(), LocaleError> {
    install_en(registry)?;
    install_fr(registry)?;
    Ok(())
}

fn install(
    registry: &mut LocaleRegistry,
    name: &str,
    load: fn() -> Result<LocaleFile, LocaleError>,
) -> Result<bool, LocaleError> {
    if registry.contains_locale(name) {
        debug!(locale = name, "built-in locale already registered");
        return Ok(false);
    }
    let (_, bundle) = load()?.into_parts();
    registry.add_locale(name, bundle);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::LocaleBundle;
    use crate::keys;
    use crate::registry::FieldRequest;

    #[rstest]
    #[case(EN, en as fn() -> Result<LocaleFile, LocaleError>)]
    #[case(FR, fr as fn() -> Result<LocaleFile, LocaleError>)]
    fn embedded_files_carry_their_name(
        #[case] name: &str,
        #[case] load: fn() -> Result<LocaleFile, LocaleError>,
    ) {
        let file = load().expect("embedded locale parses");

        assert_eq!(file.name(), name);
        assert!(!file.bundle().is_empty());
    }

    #[test]
    fn english_carries_every_well_known_key() {
        let file = en().expect("embedded locale parses");
        let expected = [
            keys::FIRST_NAMES,
            keys::MALE_FIRST_NAMES,
            keys::FEMALE_FIRST_NAMES,
            keys::LAST_NAMES,
            keys::PHONE_FORMATS,
            keys::CITY_NAMES,
            keys::CITY_PREFIXES,
            keys::CITY_SUFFIXES,
            keys::JOB_TYPES,
            keys::JOB_LEVELS,
            keys::JOB_DESCRIPTORS,
            keys::FREE_EMAILS,
            keys::DOMAIN_SUFFIXES,
        ];

        for key in expected {
            let values = file.bundle().field(key).unwrap_or_default();
            assert!(!values.is_empty(), "en is missing {key}");
        }
    }

    #[test]
    fn install_all_makes_english_the_default() {
        let mut registry = LocaleRegistry::new();

        install_all(&mut registry).expect("embedded locales parse");

        assert_eq!(registry.default_locale(), Some(EN));
        assert!(registry.contains_locale(FR));
    }

    #[test]
    fn installing_twice_keeps_the_existing_bundle() {
        let custom = LocaleBundle::new().with_field(keys::FIRST_NAMES, ["Zed"]);
        let mut registry = LocaleRegistry::with_locale(FR, custom);

        let added = install_fr(&mut registry).expect("embedded locale parses");

        assert!(!added);
        let names = registry
            .get_locale_data(FieldRequest::new(keys::FIRST_NAMES).in_locale(Some(FR)))
            .expect("custom bundle kept");
        assert_eq!(names, ["Zed".to_owned()].as_slice());
    }

    #[test]
    fn installing_french_alone_makes_it_the_default() {
        let mut registry = LocaleRegistry::new();

        assert!(install_fr(&mut registry).expect("embedded locale parses"));
        assert_eq!(registry.default_locale(), Some(FR));
    }
}
