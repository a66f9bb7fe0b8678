//! Input model for a single render.
//!
//! An [`EmailModel`] is a one-shot snapshot of the form state. It is built
//! fresh for every submission and discarded once the document is produced.

use crate::color::Color;

/// Maximum number of offer blocks in one email.
pub const MAX_OFFERS: usize = 5;

/// Maximum number of footer links in one email.
pub const MAX_FOOTER_LINKS: usize = 3;

/// Font stack used when the model leaves `font_family` empty.
pub const DEFAULT_FONT_FAMILY: &str = "'Arial', sans-serif";

/// Visual variant shared by every button in the email.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", from = "String"))]
pub enum ButtonStyle {
    /// 8px corners on a filled surface.
    #[default]
    Rounded,
    /// Fully rounded ends.
    Pill,
    /// Square corners.
    Square,
    /// Transparent surface with a 1px border in the button color.
    Outlined,
}

impl ButtonStyle {
    /// Parse a style name; unknown names fall back to [`ButtonStyle::Rounded`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "pill" => Self::Pill,
            "square" => Self::Square,
            "outlined" => Self::Outlined,
            _ => Self::Rounded,
        }
    }

    /// Style name as used in form values and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rounded => "rounded",
            Self::Pill => "pill",
            Self::Square => "square",
            Self::Outlined => "outlined",
        }
    }
}

impl From<String> for ButtonStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

/// Overall layout of the email body.
///
/// Only the body container border and the vertical spacing differ between
/// layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", from = "String"))]
pub enum LayoutStyle {
    #[default]
    Centered,
    /// Bordered body container.
    CardStyle,
    /// Wider vertical spacing between sections.
    Minimal,
}

impl LayoutStyle {
    /// Parse a layout name; unknown names fall back to [`LayoutStyle::Centered`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "card-style" => Self::CardStyle,
            "minimal" => Self::Minimal,
            _ => Self::Centered,
        }
    }

    /// Layout name as used in form values and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::CardStyle => "card-style",
            Self::Minimal => "minimal",
        }
    }
}

impl From<String> for LayoutStyle {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

/// Placement of an offer image relative to its text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", from = "String"))]
pub enum ImagePosition {
    /// Fixed-width image column before the text.
    #[default]
    Left,
    /// Fixed-width image column after the text.
    Right,
    /// Full-width image above the text.
    Top,
}

impl ImagePosition {
    /// Parse a position name; unknown names fall back to [`ImagePosition::Left`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "right" => Self::Right,
            "top" => Self::Top,
            _ => Self::Left,
        }
    }
}

impl From<String> for ImagePosition {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

/// One promotional block.
///
/// Every field is optional. Text fields that are `Some("")` are treated the
/// same as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OfferItem {
    /// Secondary heading, shown above the title.
    pub vehicle: Option<String>,
    /// Primary heading.
    pub title: Option<String>,
    /// Body copy; newlines become line breaks.
    pub details: Option<String>,
    pub image_position: ImagePosition,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    /// Button fill, defaults to [`Color::INDIGO`].
    pub cta_color: Option<Color>,
    /// Button text color override.
    pub cta_text_color: Option<Color>,
    /// Fine print below the offer.
    pub disclaimer: Option<String>,
    /// Embeddable image reference (data URL or remote URL).
    pub image_data_url: Option<String>,
}

impl OfferItem {
    /// Whether the offer carries nothing worth rendering.
    ///
    /// Only the heading, copy, image and button text count. An offer with
    /// just a link or a disclaimer is still empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.title,
            &self.vehicle,
            &self.details,
            &self.image_data_url,
            &self.cta_text,
        ]
        .into_iter()
        .all(|field| non_empty(field.as_deref()).is_none())
    }
}

/// A secondary call-to-action shown in the footer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterLink {
    pub text: String,
    pub link: String,
}

impl FooterLink {
    /// Create a footer link.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Complete content and design input for one email.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EmailModel {
    /// Main body text; newlines become line breaks.
    pub body_content: String,
    /// Body container background, defaults to white.
    pub body_background_color: Option<Color>,

    pub hero_message: Option<String>,
    /// Hero message text color, defaults to `#1d1d1f`.
    pub hero_message_color: Option<Color>,
    /// Hero message font size in pixels, defaults to 24.
    pub hero_message_font_size: Option<u16>,
    /// Hero message background, transparent when absent.
    pub hero_message_bg_color: Option<Color>,
    pub hero_image: Option<String>,

    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub cta_color: Option<Color>,
    pub cta_text_color: Option<Color>,

    pub offers: Vec<OfferItem>,

    pub footer_ctas: Vec<FooterLink>,
    /// Footer card background, defaults to white.
    pub footer_background_color: Option<Color>,
    /// Footer button fill, defaults to [`Color::INDIGO`].
    pub footer_cta_color: Option<Color>,
    pub footer_cta_text_color: Option<Color>,

    pub disclaimer: Option<String>,

    /// CSS font stack, e.g. `'Helvetica', Arial, sans-serif`.
    pub font_family: String,
    pub button_style: ButtonStyle,
    pub layout_style: LayoutStyle,
}

impl EmailModel {
    /// Create a model with the given body text and every other field defaulted.
    #[must_use]
    pub fn new(body_content: impl Into<String>) -> Self {
        Self {
            body_content: body_content.into(),
            ..Self::default()
        }
    }

    /// Font stack with the default applied.
    #[must_use]
    pub fn font_stack(&self) -> &str {
        if self.font_family.trim().is_empty() {
            DEFAULT_FONT_FAMILY
        } else {
            &self.font_family
        }
    }
}

/// Treat empty strings as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
