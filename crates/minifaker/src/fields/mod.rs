//! Field generators built on the locale registry and random primitives.
//!
//! Each submodule adds methods to [`crate::MiniFaker`] together with the
//! options struct they accept. Options default to "use the default locale and
//! draw everything at random".

mod address;
mod color;
mod image;
mod internet;
mod job;
mod name;
mod phone;
mod word;

pub use color::ColorOptions;
pub use image::{
    PlaceImgCategory, PlaceImgFilter, PlaceImgOptions, PlaceholderOptions,
    image_url_from_placeholder, image_url_from_placeimg,
};
pub use internet::{
    EmailOptions, MacAddressOptions, MacAdministration, MacSeparator, MacTransmission,
    UsernameOptions, UsernameStyle,
};
pub use name::{Gender, NameOptions};
pub use phone::PhoneOptions;
pub use word::{WordOptions, WordType};

/// Options for generators that only need a locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleOptions {
    /// Explicit locale, or `None` for the registry default.
    pub locale: Option<String>,
}

impl LocaleOptions {
    /// Reads from the named locale instead of the default.
    #[must_use]
    pub fn in_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }
}
