//! Readable foreground selection for a given background.

use crate::color::{Color, ColorError};

/// Brightness at or below which text switches to white.
const BRIGHTNESS_THRESHOLD: u32 = 125;

/// Pick a readable text color for `background`.
///
/// Uses the perceived brightness `Y = (299 R + 587 G + 114 B) / 1000`.
/// Backgrounds with `Y <= 125` get `#ffffff`, everything else `#333333`.
/// An absent background also yields `#333333`.
///
/// # Example
///
/// ```
/// use pm_renderer::{Color, contrast_color};
///
/// assert_eq!(contrast_color(Some(&Color::new(0, 0, 0))), Color::WHITE);
/// assert_eq!(contrast_color(Some(&Color::WHITE)), Color::DARK_GRAY);
/// assert_eq!(contrast_color(None), Color::DARK_GRAY);
/// ```
#[must_use]
pub fn contrast_color(background: Option<&Color>) -> Color {
    let Some(background) = background else {
        return Color::DARK_GRAY;
    };
    if brightness(*background) > BRIGHTNESS_THRESHOLD {
        Color::DARK_GRAY
    } else {
        Color::WHITE
    }
}

/// Pick a readable text color for an unvalidated hex string.
///
/// Malformed input is rejected instead of producing an arbitrary result.
pub fn contrast_for_hex(background: &str) -> Result<Color, ColorError> {
    let color: Color = background.parse()?;
    Ok(contrast_color(Some(&color)))
}

/// Integer perceived brightness in `0..=255`.
fn brightness(color: Color) -> u32 {
    let (r, g, b) = color.rgb();
    (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000
}
