//! Phone number generator.

use rand::Rng;

use crate::MiniFaker;
use crate::error::GenerationError;
use crate::keys;
use crate::random;

/// Placeholder replaced by a random digit.
const DIGIT_PLACEHOLDER: char = '#';

/// Options for [`MiniFaker::phone_number`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneOptions {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<String>,
    /// Templates to pick from instead of the locale's `phoneFormats`.
    pub formats: Option<Vec<String>>,
}

impl MiniFaker {
    /// Fills a phone number template, replacing each `#` with a digit.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if no template list is supplied and
    /// `phoneFormats` cannot be resolved, or if the template list is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::{LocaleRegistry, MiniFaker, PhoneOptions};
    ///
    /// let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 9);
    /// let options = PhoneOptions {
    ///     formats: Some(vec!["###-###".to_owned()]),
    ///     ..PhoneOptions::default()
    /// };
    ///
    /// let number = faker.phone_number(&options).expect("template supplied");
    /// assert_eq!(number.len(), 7);
    /// ```
    pub fn phone_number(&mut self, options: &PhoneOptions) -> Result<String, GenerationError> {
        let template = match &options.formats {
            Some(formats) => random::array_element(self.rng(), formats)?.clone(),
            None => self.pick_field(options.locale.as_deref(), keys::PHONE_FORMATS)?,
        };

        Ok(template
            .chars()
            .map(|c| {
                if c == DIGIT_PLACEHOLDER {
                    self.digit()
                } else {
                    c
                }
            })
            .collect())
    }

    fn digit(&mut self) -> char {
        char::from(b'0' + self.rng().random_range(0..10_u8))
    }
}
