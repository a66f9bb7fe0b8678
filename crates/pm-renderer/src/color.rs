//! Validated hex colors.
//!
//! Every color that reaches the renderer has already been parsed into a
//! [`Color`], so the contrast computation never sees malformed input.

use std::fmt;
use std::str::FromStr;

/// Error returned when a color string is not a six-digit hex value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Input is not `rrggbb` or `#rrggbb`.
    #[error("Invalid color format: {0:?} (expected #rrggbb)")]
    InvalidFormat(String),
}

/// An sRGB color written as `#rrggbb`.
///
/// Parsing accepts six hex digits with or without a leading `#`, in any
/// case. Display always produces lowercase `#rrggbb`.
///
/// # Example
///
/// ```
/// use pm_renderer::Color;
///
/// let color: Color = "4F46E5".parse().unwrap();
/// assert_eq!(color.to_string(), "#4f46e5");
/// assert_eq!(color.rgb(), (0x4f, 0x46, 0xe5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// `#ffffff`
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    /// `#333333`, the dark foreground used on light backgrounds.
    pub const DARK_GRAY: Self = Self::new(0x33, 0x33, 0x33);
    /// `#4f46e5`, the default call-to-action fill.
    pub const INDIGO: Self = Self::new(0x4f, 0x46, 0xe5);

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red, green and blue channels.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parse a color, treating an empty (or whitespace-only) string as absent.
    ///
    /// Form inputs submit empty strings for untouched color pickers.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, ColorError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            trimmed.parse().map(Some)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(s.to_owned()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidFormat(s.to_owned()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
