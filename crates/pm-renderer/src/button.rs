//! Call-to-action buttons.
//!
//! Every button is emitted twice: a VML `v:roundrect` inside an
//! `<!--[if mso]>` conditional comment for desktop Outlook, followed by a
//! styled `<a>` that every other client renders. Outlook hides the anchor via
//! `mso-hide:all`; everyone else ignores the conditional comment.

use std::fmt::Write;

use crate::color::Color;
use crate::context::RenderContext;
use crate::contrast::contrast_color;
use crate::html::escape_html;
use crate::model::ButtonStyle;

/// Button dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSize {
    pub width: u16,
    pub height: u16,
    pub font_size: u16,
}

impl ButtonSize {
    /// Primary call-to-action below the body text.
    pub const PRIMARY: Self = Self {
        width: 200,
        height: 50,
        font_size: 16,
    };
    /// Button inside an offer card.
    pub const OFFER: Self = Self {
        width: 150,
        height: 40,
        font_size: 14,
    };
    /// Button in the footer links card.
    pub const FOOTER: Self = Self {
        width: 250,
        height: 40,
        font_size: 14,
    };
}

/// Everything needed to render one button.
#[derive(Clone, Debug)]
pub struct ButtonSpec<'a> {
    pub text: &'a str,
    pub link: &'a str,
    /// Button color: the fill, or the outline for [`ButtonStyle::Outlined`].
    pub color: Color,
    pub style: ButtonStyle,
    /// Background the button sits on; used as the fill of outlined buttons.
    pub surrounding_bg: Color,
    pub size: ButtonSize,
    /// Text color that wins over the style's computed default.
    pub text_color: Option<Color>,
}

/// Resolved visual parameters of a button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonAppearance {
    /// CSS `border-radius`.
    pub border_radius: &'static str,
    /// VML `arcsize`, the legacy analogue of the radius.
    pub arc_size: &'static str,
    /// CSS `border`.
    pub border: String,
    /// Surface color of the standard anchor.
    pub background: Color,
    /// VML fill color.
    pub legacy_fill: Color,
    pub text: Color,
}

impl ButtonAppearance {
    /// Resolve the appearance of `spec` according to its style variant.
    #[must_use]
    pub fn resolve(spec: &ButtonSpec<'_>) -> Self {
        let color = spec.color;
        let filled_text = spec
            .text_color
            .unwrap_or_else(|| contrast_color(Some(&color)));
        match spec.style {
            ButtonStyle::Rounded => Self {
                border_radius: "8px",
                arc_size: "13%",
                border: "none".to_owned(),
                background: color,
                legacy_fill: color,
                text: filled_text,
            },
            ButtonStyle::Pill => Self {
                border_radius: "9999px",
                arc_size: "50%",
                border: "none".to_owned(),
                background: color,
                legacy_fill: color,
                text: filled_text,
            },
            ButtonStyle::Square => Self {
                border_radius: "0px",
                arc_size: "0%",
                border: "none".to_owned(),
                background: color,
                legacy_fill: color,
                text: filled_text,
            },
            // VML keeps the button color as fill
            ButtonStyle::Outlined => Self {
                border_radius: "8px",
                arc_size: "13%",
                border: format!("1px solid {color}"),
                background: spec.surrounding_bg,
                legacy_fill: color,
                text: spec.text_color.unwrap_or(color),
            },
        }
    }
}

/// Render a button as legacy VML plus a standard anchor.
#[must_use]
pub fn render_button(spec: &ButtonSpec<'_>, ctx: &RenderContext) -> String {
    let look = ButtonAppearance::resolve(spec);
    let text = escape_html(spec.text);
    let link = escape_html(spec.link);
    let legacy_font = escape_html(&ctx.legacy_font);
    let font = escape_html(&ctx.font_family);
    let ButtonSize {
        width,
        height,
        font_size,
    } = spec.size;

    let mut out = String::with_capacity(1024);
    out.push_str("<div><!--[if mso]>\n");
    let _ = writeln!(
        out,
        r#"<v:roundrect xmlns:v="urn:schemas-microsoft-com:vml" xmlns:w="urn:schemas-microsoft-com:office:word" href="{link}" style="height:{height}px;v-text-anchor:middle;width:{width}px;" arcsize="{arc}" strokecolor="{stroke}" fillcolor="{fill}">"#,
        arc = look.arc_size,
        stroke = spec.color,
        fill = look.legacy_fill,
    );
    out.push_str("<w:anchorlock/>\n");
    let _ = writeln!(
        out,
        r#"<center style="color:{color};font-family:{legacy_font}, sans-serif;font-size:{font_size}px;font-weight:bold;">{text}</center>"#,
        color = look.text,
    );
    out.push_str("</v:roundrect>\n<![endif]-->");
    let _ = write!(
        out,
        r#"<a href="{link}" style="background-color:{bg};border:{border};border-radius:{radius};color:{color};display:inline-block;font-family:{font};font-size:{font_size}px;font-weight:bold;line-height:{height}px;text-align:center;text-decoration:none;width:{width}px;-webkit-text-size-adjust:none;mso-hide:all;">{text}</a></div>"#,
        bg = look.background,
        border = look.border,
        radius = look.border_radius,
        color = look.text,
    );
    out
}
