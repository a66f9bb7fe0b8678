//! Design settings shared by every fragment renderer.

use crate::layout::LayoutMetrics;
use crate::model::{ButtonStyle, EmailModel, LayoutStyle};

/// Immutable design settings resolved once per render.
#[derive(Clone, Debug)]
pub struct RenderContext {
    /// Full CSS font stack for standards-based markup.
    pub font_family: String,
    /// Single family name for the legacy desktop client.
    pub legacy_font: String,
    pub button_style: ButtonStyle,
    pub layout: LayoutMetrics,
}

impl RenderContext {
    /// Create a context from a font stack and style choices.
    #[must_use]
    pub fn new(font_family: &str, button_style: ButtonStyle, layout_style: LayoutStyle) -> Self {
        Self {
            font_family: font_family.to_owned(),
            legacy_font: legacy_font_name(font_family),
            button_style,
            layout: LayoutMetrics::for_style(layout_style),
        }
    }

    /// Derive the context from a model, applying the default font stack.
    #[must_use]
    pub fn from_model(model: &EmailModel) -> Self {
        Self::new(model.font_stack(), model.button_style, model.layout_style)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(
            crate::model::DEFAULT_FONT_FAMILY,
            ButtonStyle::default(),
            LayoutStyle::default(),
        )
    }
}

/// First family of a font stack with quotes stripped.
///
/// ```
/// use pm_renderer::legacy_font_name;
///
/// assert_eq!(legacy_font_name("'Open Sans', Arial, sans-serif"), "Open Sans");
/// ```
#[must_use]
pub fn legacy_font_name(font_family: &str) -> String {
    font_family
        .split(',')
        .next()
        .unwrap_or_default()
        .replace(['\'', '"'], "")
        .trim()
        .to_owned()
}
