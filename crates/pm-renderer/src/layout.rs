//! Layout-style-driven structural metrics.

use crate::model::LayoutStyle;

/// Spacing and border values derived from a [`LayoutStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Extra inline style for the body text container.
    pub body_container_style: &'static str,
    /// Height of the spacer row between sections, in pixels.
    pub spacer_height: u16,
}

impl LayoutMetrics {
    /// Metrics for the given layout style.
    #[must_use]
    pub fn for_style(style: LayoutStyle) -> Self {
        match style {
            LayoutStyle::Centered => Self {
                body_container_style: "",
                spacer_height: 20,
            },
            LayoutStyle::CardStyle => Self {
                body_container_style: "border: 1px solid #e2e8f0;",
                spacer_height: 20,
            },
            LayoutStyle::Minimal => Self {
                body_container_style: "",
                spacer_height: 30,
            },
        }
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::for_style(LayoutStyle::default())
    }
}
