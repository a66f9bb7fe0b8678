//! Footer links card.

use std::fmt::Write;

use crate::button::{ButtonSize, ButtonSpec, render_button};
use crate::color::Color;
use crate::context::RenderContext;
use crate::html::{CARD_CELL_STYLE, PRESENTATION_TABLE_START, spacer_row};
use crate::model::{EmailModel, FooterLink};

/// Gap between stacked footer buttons, in pixels.
const BUTTON_GAP: u16 = 15;

/// Colors of the footer card and its buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColors {
    /// Card background, also the surface of outlined buttons.
    pub background: Color,
    /// Button color.
    pub button: Color,
    /// Button text override.
    pub text: Option<Color>,
}

impl FooterColors {
    /// Resolve footer colors from a model, applying defaults.
    #[must_use]
    pub fn from_model(model: &EmailModel) -> Self {
        Self {
            background: model.footer_background_color.unwrap_or(Color::WHITE),
            button: model.footer_cta_color.unwrap_or(Color::INDIGO),
            text: model.footer_cta_text_color,
        }
    }
}

impl Default for FooterColors {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            button: Color::INDIGO,
            text: None,
        }
    }
}

/// Render all footer links as one card of stacked buttons.
///
/// Returns an empty string when `links` is empty.
#[must_use]
pub fn render_footer_links(links: &[FooterLink], ctx: &RenderContext, colors: &FooterColors) -> String {
    if links.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(1024 * links.len());
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<tr><td style="{CARD_CELL_STYLE} background-color: {};">"#,
        colors.background
    );
    out.push_str(PRESENTATION_TABLE_START);
    out.push_str("\n<tbody>\n");

    let last = links.len() - 1;
    for (index, link) in links.iter().enumerate() {
        let gap = if index < last {
            format!("{BUTTON_GAP}px")
        } else {
            "0".to_owned()
        };
        let spec = ButtonSpec {
            text: &link.text,
            link: &link.link,
            color: colors.button,
            style: ctx.button_style,
            surrounding_bg: colors.background,
            size: ButtonSize::FOOTER,
            text_color: colors.text,
        };
        let _ = writeln!(
            out,
            r#"<tr><td align="center" style="padding-bottom: {gap};">{}</td></tr>"#,
            render_button(&spec, ctx)
        );
    }

    out.push_str("</tbody>\n</table>\n</td></tr>\n");
    out
}
