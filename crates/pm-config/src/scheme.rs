//! Color scheme presets.

use pm_renderer::Color;
use serde::Deserialize;

/// Name of the scheme used when none is configured.
pub const DEFAULT_SCHEME: &str = "modern";

/// Palette applied to every color field of a form at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ColorScheme {
    /// Button color.
    pub primary: Color,
    /// Section background color.
    pub bg: Color,
    /// Body text color.
    pub text: Color,
}

impl ColorScheme {
    const fn new(primary: Color, bg: Color, text: Color) -> Self {
        Self { primary, bg, text }
    }
}

/// Built-in presets, in display order.
pub const BUILTIN_SCHEMES: &[(&str, ColorScheme)] = &[
    (
        "modern",
        ColorScheme::new(
            Color::new(0x00, 0x7a, 0xff),
            Color::new(0xff, 0xff, 0xff),
            Color::new(0x1d, 0x1d, 0x1f),
        ),
    ),
    (
        "warm",
        ColorScheme::new(
            Color::new(0xff, 0x6b, 0x35),
            Color::new(0xff, 0xf8, 0xf5),
            Color::new(0x2d, 0x18, 0x10),
        ),
    ),
    (
        "elegant",
        ColorScheme::new(
            Color::new(0x63, 0x66, 0xf1),
            Color::new(0xfa, 0xfa, 0xfa),
            Color::new(0x1e, 0x29, 0x3b),
        ),
    ),
    (
        "nature",
        ColorScheme::new(
            Color::new(0x10, 0xb9, 0x81),
            Color::new(0xf0, 0xfd, 0xf4),
            Color::new(0x14, 0x53, 0x2d),
        ),
    ),
    (
        "corporate",
        ColorScheme::new(
            Color::new(0x37, 0x41, 0x51),
            Color::new(0xff, 0xff, 0xff),
            Color::new(0x11, 0x18, 0x27),
        ),
    ),
    (
        "vibrant",
        ColorScheme::new(
            Color::new(0xec, 0x48, 0x99),
            Color::new(0xfd, 0xf2, 0xf8),
            Color::new(0x83, 0x18, 0x43),
        ),
    ),
];

/// Look up a built-in preset.
pub(crate) fn builtin(name: &str) -> Option<ColorScheme> {
    BUILTIN_SCHEMES
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, scheme)| *scheme)
}
