//! Placeholder image URL builders.
//!
//! These only assemble strings; nothing here touches the network or the
//! faker's RNG.

use std::fmt;

/// Image category served by placeimg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlaceImgCategory {
    /// Any category.
    #[default]
    Any,
    /// Animals.
    Animals,
    /// Architecture.
    Architecture,
    /// Nature.
    Nature,
    /// People.
    People,
    /// Technology.
    Tech,
}

impl PlaceImgCategory {
    /// Returns the URL path segment for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Animals => "animals",
            Self::Architecture => "architecture",
            Self::Nature => "nature",
            Self::People => "people",
            Self::Tech => "tech",
        }
    }
}

impl fmt::Display for PlaceImgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour filter applied by placeimg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceImgFilter {
    /// Black and white.
    Grayscale,
    /// Sepia toned.
    Sepia,
}

impl PlaceImgFilter {
    /// Returns the URL path segment for the filter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Sepia => "sepia",
        }
    }
}

impl fmt::Display for PlaceImgFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`image_url_from_placeimg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceImgOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Image category.
    pub category: PlaceImgCategory,
    /// Optional colour filter.
    pub filter: Option<PlaceImgFilter>,
}

impl PlaceImgOptions {
    /// Any-category image of the given size with no filter.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            category: PlaceImgCategory::Any,
            filter: None,
        }
    }
}

/// Options for [`image_url_from_placeholder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderOptions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels; square when `None`.
    pub height: Option<u32>,
    /// Background colour, e.g. `black` or `000000`.
    pub back_color: Option<String>,
    /// Text colour.
    pub text_color: Option<String>,
    /// Text drawn on the image.
    pub text_value: Option<String>,
}

impl PlaceholderOptions {
    /// Square placeholder of the given width with service defaults.
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self {
            width,
            height: None,
            back_color: None,
            text_color: None,
            text_value: None,
        }
    }
}

/// Builds `https://placeimg.com/{width}/{height}/{category}[/{filter}]`.
///
/// # Example
///
/// ```
/// use minifaker::{PlaceImgCategory, PlaceImgFilter, PlaceImgOptions, image_url_from_placeimg};
///
/// let url = image_url_from_placeimg(&PlaceImgOptions {
///     category: PlaceImgCategory::Animals,
///     filter: Some(PlaceImgFilter::Sepia),
///     ..PlaceImgOptions::new(500, 500)
/// });
///
/// assert_eq!(url, "https://placeimg.com/500/500/animals/sepia");
/// ```
#[must_use]
pub fn image_url_from_placeimg(options: &PlaceImgOptions) -> String {
    let mut url = format!(
        "https://placeimg.com/{}/{}/{}",
        options.width, options.height, options.category
    );
    if let Some(filter) = options.filter {
        url.push('/');
        url.push_str(filter.as_str());
    }
    url
}

/// Builds `https://via.placeholder.com/{width}[x{height}][/{back}][/{text}][?text={value}]`.
#[must_use]
pub fn image_url_from_placeholder(options: &PlaceholderOptions) -> String {
    let mut url = format!("https://via.placeholder.com/{}", options.width);
    if let Some(height) = options.height {
        url.push('x');
        url.push_str(&height.to_string());
    }
    for color in [&options.back_color, &options.text_color].into_iter().flatten() {
        url.push('/');
        url.push_str(color);
    }
    if let Some(text) = &options.text_value {
        url.push_str("?text=");
        url.push_str(text);
    }
    url
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PlaceImgOptions::new(500, 500), "https://placeimg.com/500/500/any")]
    #[case(
        PlaceImgOptions { category: PlaceImgCategory::Tech, ..PlaceImgOptions::new(640, 480) },
        "https://placeimg.com/640/480/tech"
    )]
    #[case(
        PlaceImgOptions { filter: Some(PlaceImgFilter::Grayscale), ..PlaceImgOptions::new(10, 20) },
        "https://placeimg.com/10/20/any/grayscale"
    )]
    fn placeimg_urls(#[case] options: PlaceImgOptions, #[case] expected: &str) {
        assert_eq!(image_url_from_placeimg(&options), expected);
    }

    #[test]
    fn placeholder_with_width_only() {
        assert_eq!(
            image_url_from_placeholder(&PlaceholderOptions::new(250)),
            "https://via.placeholder.com/250"
        );
    }

    #[test]
    fn placeholder_appends_every_part() {
        let options = PlaceholderOptions {
            height: Some(200),
            back_color: Some("black".to_owned()),
            text_color: Some("white".to_owned()),
            text_value: Some("minifaker".to_owned()),
            ..PlaceholderOptions::new(250)
        };

        assert_eq!(
            image_url_from_placeholder(&options),
            "https://via.placeholder.com/250x200/black/white?text=minifaker"
        );
    }

    #[test]
    fn placeholder_skips_missing_back_color() {
        let options = PlaceholderOptions {
            text_color: Some("white".to_owned()),
            ..PlaceholderOptions::new(90)
        };

        assert_eq!(
            image_url_from_placeholder(&options),
            "https://via.placeholder.com/90/white"
        );
    }
}
