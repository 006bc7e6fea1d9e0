//! Locale-aware fake data generation with reproducible seeds.
//!
//! This crate generates believable placeholder values (names, phone numbers,
//! cities, job titles, network identifiers, colours, words and image URLs)
//! from per-locale data bundles.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A [`LocaleRegistry`] mapping locale names to [`LocaleBundle`]s, with a
//!   default locale set by the first registration
//! - Random primitives in [`random`] that work over any `rand::Rng`
//! - A seeded [`MiniFaker`] exposing every generator as a method
//! - Built-in `en` and `fr` bundles in [`locales`], plus JSON locale files
//! - A small command-line front end in [`cli`]
//!
//! # Example
//!
//! ```
//! use minifaker::{LocaleOptions, LocaleRegistry, MiniFaker, NameOptions, locales};
//!
//! let mut registry = LocaleRegistry::new();
//! locales::install_all(&mut registry).expect("built-in locales parse");
//! let mut faker = MiniFaker::with_seed(registry, 2026);
//!
//! let name = faker.name(&NameOptions::default()).expect("en has names");
//! let city = faker
//!     .city_name(&LocaleOptions::in_locale("fr"))
//!     .expect("fr has city names");
//!
//! assert!(name.contains(' '));
//! assert!(!city.is_empty());
//! ```

mod bundle;
pub mod cli;
mod error;
mod faker;
mod fields;
pub mod keys;
pub mod locales;
pub mod random;
mod registry;

pub use bundle::{LocaleBundle, LocaleFile};
pub use error::{GenerationError, LocaleError, SamplingError};
pub use faker::MiniFaker;
pub use fields::{
    ColorOptions, EmailOptions, Gender, LocaleOptions, MacAddressOptions, MacAdministration,
    MacSeparator, MacTransmission, NameOptions, PhoneOptions, PlaceImgCategory, PlaceImgFilter,
    PlaceImgOptions, PlaceholderOptions, UsernameOptions, UsernameStyle, WordOptions, WordType,
    image_url_from_placeholder, image_url_from_placeimg,
};
pub use random::{NumberOptions, ObjectEntry};
pub use registry::{FieldRequest, LocaleRegistry};
