//! The seeded faker that ties a locale registry to a random source.
//!
//! [`MiniFaker`] owns its [`LocaleRegistry`] and a `ChaCha8Rng`. Every
//! generator method draws from that one RNG in call order, so two fakers with
//! the same registry and seed produce identical values.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use crate::bundle::LocaleBundle;
use crate::error::{GenerationError, LocaleError, SamplingError};
use crate::random::{self, NumberOptions, ObjectEntry};
use crate::registry::{FieldRequest, LocaleRegistry};

/// Fake data generator over an explicit locale registry.
///
/// # Example
///
/// ```
/// use minifaker::{LocaleBundle, LocaleRegistry, MiniFaker, NameOptions};
///
/// let registry = LocaleRegistry::with_locale(
///     "fr",
///     LocaleBundle::new().with_field("firstNames", ["Camille", "Louise"]),
/// );
/// let mut faker = MiniFaker::with_seed(registry, 2026);
///
/// let name = faker.first_name(&NameOptions::default()).expect("fr has first names");
/// assert!(name == "Camille" || name == "Louise");
/// ```
#[derive(Debug, Clone)]
pub struct MiniFaker {
    registry: LocaleRegistry,
    rng: ChaCha8Rng,
    seed: u64,
}

impl MiniFaker {
    /// Creates a faker seeded from the thread-local generator.
    #[must_use]
    pub fn new(registry: LocaleRegistry) -> Self {
        Self::with_seed(registry, rand::rng().random())
    }

    /// Creates a faker whose output is fully determined by `seed`.
    #[must_use]
    pub fn with_seed(registry: LocaleRegistry, seed: u64) -> Self {
        Self {
            registry,
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed the faker was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the locale registry.
    #[must_use]
    pub const fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Registers a locale bundle. See [`LocaleRegistry::add_locale`].
    pub fn add_locale(&mut self, name: impl Into<String>, bundle: LocaleBundle) {
        self.registry.add_locale(name, bundle);
    }

    /// Repoints the default locale. See [`LocaleRegistry::set_default_locale`].
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::UnknownLocale`] if `name` is not registered.
    pub fn set_default_locale(&mut self, name: &str) -> Result<(), LocaleError> {
        self.registry.set_default_locale(name)
    }

    /// Resolves a locale field. See [`LocaleRegistry::get_locale_data`].
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the field cannot be resolved.
    pub fn get_locale_data(&self, request: FieldRequest<'_>) -> Result<&[String], LocaleError> {
        self.registry.get_locale_data(request)
    }

    /// Draws a number. See [`random::number`].
    pub fn number(&mut self, options: NumberOptions) -> f64 {
        random::number(&mut self.rng, options)
    }

    /// Draws a boolean with equal odds.
    pub fn boolean(&mut self) -> bool {
        random::boolean(&mut self.rng)
    }

    /// Picks one element of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::EmptyInput`] if `items` is empty.
    pub fn array_element<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, SamplingError> {
        random::array_element(&mut self.rng, items)
    }

    /// Builds `count` values, passing the faker and the index to `f` so each
    /// element can keep drawing from the shared random source.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::{LocaleRegistry, MiniFaker};
    ///
    /// let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 1);
    /// let ports = faker.array(3, |faker, _| faker.port());
    ///
    /// assert_eq!(ports.len(), 3);
    /// ```
    pub fn array<T, F>(&mut self, count: usize, mut f: F) -> Vec<T>
    where
        F: FnMut(&mut Self, usize) -> T,
    {
        (0..count).map(|index| f(self, index)).collect()
    }

    /// Picks one entry of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NotAnObject`] for non-object values and
    /// [`SamplingError::EmptyInput`] for empty objects.
    pub fn object_element<'a>(
        &mut self,
        value: &'a Value,
    ) -> Result<ObjectEntry<'a>, SamplingError> {
        random::object_element(&mut self.rng, value)
    }

    /// Resolves `key` and picks one of its values.
    pub(crate) fn pick_field(
        &mut self,
        locale: Option<&str>,
        key: &str,
    ) -> Result<String, GenerationError> {
        let values = self
            .registry
            .get_locale_data(FieldRequest::new(key).in_locale(locale))?;
        let picked = random::array_element(&mut self.rng, values)?;
        Ok(picked.clone())
    }

    /// Resolves `key` and picks one of the values accepted by `filter`.
    pub(crate) fn pick_field_where(
        &mut self,
        locale: Option<&str>,
        key: &str,
        filter: &dyn Fn(&str) -> bool,
    ) -> Result<String, GenerationError> {
        let values = self
            .registry
            .get_locale_data(FieldRequest::new(key).in_locale(locale))?;
        let candidates: Vec<&String> = values
            .iter()
            .filter(|value| filter(value.as_str()))
            .collect();
        let picked = random::array_element(&mut self.rng, &candidates)?;
        Ok((*picked).clone())
    }

    pub(crate) const fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}
