//! Person name generators.

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::fields::LocaleOptions;
use crate::keys;

/// Selects a gendered first-name list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Reads `maleFirstNames`.
    Male,
    /// Reads `femaleFirstNames`.
    Female,
}

/// Options for [`MiniFaker::first_name`] and [`MiniFaker::name`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameOptions {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<String>,
    /// Gendered list to draw from; `None` reads `firstNames`.
    pub gender: Option<Gender>,
}

impl MiniFaker {
    /// Picks a first name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the name list cannot be resolved or is
    /// empty.
    pub fn first_name(&mut self, options: &NameOptions) -> Result<String, GenerationError> {
        let key = match options.gender {
            Some(Gender::Male) => keys::MALE_FIRST_NAMES,
            Some(Gender::Female) => keys::FEMALE_FIRST_NAMES,
            None => keys::FIRST_NAMES,
        };
        self.pick_field(options.locale.as_deref(), key)
    }

    /// Picks a last name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if `lastNames` cannot be resolved or is
    /// empty.
    pub fn last_name(&mut self, options: &LocaleOptions) -> Result<String, GenerationError> {
        self.pick_field(options.locale.as_deref(), keys::LAST_NAMES)
    }

    /// Builds `"{first} {last}"`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if either name cannot be generated.
    pub fn name(&mut self, options: &NameOptions) -> Result<String, GenerationError> {
        let first = self.first_name(options)?;
        let last = self.last_name(&LocaleOptions {
            locale: options.locale.clone(),
        })?;
        Ok(format!("{first} {last}"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::LocaleError;
    use crate::fields::fixtures::faker;
    use crate::{FieldRequest, LocaleRegistry};

    fn list(faker: &MiniFaker, locale: &str, key: &str) -> Vec<String> {
        faker
            .get_locale_data(FieldRequest::new(key).in_locale(Some(locale)))
            .expect("built-in field")
            .to_vec()
    }

    #[rstest]
    #[case(None, keys::FIRST_NAMES)]
    #[case(Some(Gender::Male), keys::MALE_FIRST_NAMES)]
    #[case(Some(Gender::Female), keys::FEMALE_FIRST_NAMES)]
    fn first_name_reads_gendered_list(
        mut faker: MiniFaker,
        #[case] gender: Option<Gender>,
        #[case] key: &str,
    ) {
        let expected = list(&faker, "fr", key);
        let options = NameOptions {
            locale: Some("fr".to_owned()),
            gender,
        };

        for _ in 0..20 {
            let name = faker.first_name(&options).expect("fr has first names");
            assert!(expected.contains(&name), "{name} not in {key}");
        }
    }

    #[rstest]
    fn name_joins_first_and_last(mut faker: MiniFaker) {
        let last_names = list(&faker, "en", keys::LAST_NAMES);

        let name = faker.name(&NameOptions::default()).expect("en has names");
        let (_, last) = name.rsplit_once(' ').expect("two parts");
        assert!(last_names.iter().any(|candidate| candidate == last));
    }

    #[test]
    fn first_name_requires_a_registered_locale() {
        let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 1);

        assert_eq!(
            faker.first_name(&NameOptions::default()),
            Err(GenerationError::Locale(LocaleError::NoDefaultLocale))
        );
    }
}
