//! Hex colour generator.

use rand::Rng;

use crate::MiniFaker;

/// Options for [`MiniFaker::color`].
///
/// A channel left as `None` is drawn at random. `Some(0)` pins the channel to
/// zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOptions {
    /// Fixed red channel.
    pub r: Option<u8>,
    /// Fixed green channel.
    pub g: Option<u8>,
    /// Fixed blue channel.
    pub b: Option<u8>,
}

impl MiniFaker {
    /// Builds a `#rrggbb` colour.
    ///
    /// # Example
    ///
    /// ```
    /// use minifaker::{ColorOptions, LocaleRegistry, MiniFaker};
    ///
    /// let mut faker = MiniFaker::with_seed(LocaleRegistry::new(), 3);
    /// let color = faker.color(&ColorOptions {
    ///     r: Some(255),
    ///     ..ColorOptions::default()
    /// });
    ///
    /// assert!(color.starts_with("#ff"));
    /// assert_eq!(color.len(), 7);
    /// ```
    pub fn color(&mut self, options: &ColorOptions) -> String {
        let red = self.channel(options.r);
        let green = self.channel(options.g);
        let blue = self.channel(options.b);
        format!("#{red:02x}{green:02x}{blue:02x}")
    }

    fn channel(&mut self, fixed: Option<u8>) -> u8 {
        fixed.unwrap_or_else(|| self.rng().random())
    }
}
