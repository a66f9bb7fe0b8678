//! Document composition.
//!
//! [`render_email`] resolves color defaults, derives the [`RenderContext`]
//! and stitches the section fragments into one table-based HTML document.
//! Each section is a standalone function so it can be tested on its own.

use std::fmt::{self, Write};

use crate::button::{ButtonSize, ButtonSpec, render_button};
use crate::color::Color;
use crate::context::RenderContext;
use crate::contrast::contrast_color;
use crate::footer::{FooterColors, render_footer_links};
use crate::html::{escape_html, spacer_row, text_with_breaks};
use crate::model::{EmailModel, non_empty};
use crate::offer::render_offers;

/// Hero message text color when none is chosen.
const DEFAULT_HERO_MESSAGE_COLOR: &str = "#1d1d1f";

/// Hero message font size when none is chosen, in pixels.
const DEFAULT_HERO_MESSAGE_FONT_SIZE: u16 = 24;

/// A finished email document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlDocument(String);

impl HtmlDocument {
    /// MIME type for downloads.
    pub const MIME_TYPE: &'static str = "text/html";
    /// File name offered for downloads.
    pub const DEFAULT_FILE_NAME: &'static str = "email-template.html";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HtmlDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HtmlDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render a complete email document from `model`.
///
/// The output depends only on `model`: identical input always produces
/// byte-identical output.
///
/// # Example
///
/// ```
/// use pm_renderer::{EmailModel, render_email};
///
/// let doc = render_email(&EmailModel::new("Hello"));
/// assert!(doc.as_str().starts_with("<!DOCTYPE html>"));
/// assert!(doc.as_str().contains("Hello"));
/// ```
#[must_use]
pub fn render_email(model: &EmailModel) -> HtmlDocument {
    let ctx = RenderContext::from_model(model);

    let mut sections = String::with_capacity(8192);
    if let Some(src) = non_empty(model.hero_image.as_deref()) {
        sections.push_str(&render_hero_image(src, &ctx));
    }
    sections.push_str(&render_hero_message(model, &ctx));
    sections.push_str(&render_body(model, &ctx));
    sections.push_str(&render_primary_cta(model, &ctx));

    sections.push_str(&render_offers(&model.offers, &ctx));
    let suppressed = model.offers.iter().filter(|offer| offer.is_empty()).count();

    sections.push_str(&render_footer_links(
        &model.footer_ctas,
        &ctx,
        &FooterColors::from_model(model),
    ));
    if let Some(disclaimer) = non_empty(model.disclaimer.as_deref()) {
        sections.push_str(&render_disclaimer(disclaimer, &ctx));
    }

    let html = wrap_document(&sections, &ctx);
    tracing::debug!(
        offers = model.offers.len() - suppressed,
        suppressed_offers = suppressed,
        footer_links = model.footer_ctas.len(),
        button_style = model.button_style.as_str(),
        layout_style = model.layout_style.as_str(),
        bytes = html.len(),
        "Rendered email template"
    );
    HtmlDocument(html)
}

/// Full-width hero image row followed by a spacer.
#[must_use]
pub fn render_hero_image(src: &str, ctx: &RenderContext) -> String {
    let mut out = format!(
        r#"<tr><td><img src="{}" alt="Hero Image" width="600" style="width: 100%; max-width: 600px; height: auto; margin: auto; display: block; border-radius: 8px;"></td></tr>"#,
        escape_html(src)
    );
    out.push('\n');
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    out
}

/// Hero message row followed by a spacer, or nothing without a message.
#[must_use]
pub fn render_hero_message(model: &EmailModel, ctx: &RenderContext) -> String {
    let Some(message) = non_empty(model.hero_message.as_deref()) else {
        return String::new();
    };
    let background = model
        .hero_message_bg_color
        .map_or_else(|| "transparent".to_owned(), |c| c.to_string());
    let color = model
        .hero_message_color
        .map_or_else(|| DEFAULT_HERO_MESSAGE_COLOR.to_owned(), |c| c.to_string());
    let font_size = model
        .hero_message_font_size
        .unwrap_or(DEFAULT_HERO_MESSAGE_FONT_SIZE);

    let mut out = String::with_capacity(512);
    let _ = writeln!(
        out,
        r#"<tr><td align="center" bgcolor="{background}" style="padding: 20px; background-color: {background}; font-family: {font}; font-size: {font_size}px; line-height: 1.3; color: {color}; font-weight: bold; border-radius: 8px;">{message}</td></tr>"#,
        font = escape_html(&ctx.font_family),
        message = text_with_breaks(message),
    );
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    out
}

/// Body text row with a contrast-resolved text color, followed by a spacer.
#[must_use]
pub fn render_body(model: &EmailModel, ctx: &RenderContext) -> String {
    let background = model.body_background_color.unwrap_or(Color::WHITE);
    let text_color = contrast_color(Some(&background));

    let mut out = String::with_capacity(512 + model.body_content.len());
    let _ = writeln!(
        out,
        r#"<tr><td style="padding: 10px 20px; background-color: {background}; border-radius: 8px; {extra}"><p style="margin: 0; color: {text_color};">{body}</p></td></tr>"#,
        extra = ctx.layout.body_container_style,
        body = text_with_breaks(&model.body_content),
    );
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    out
}

/// Primary call-to-action row followed by a spacer.
///
/// Returns nothing unless both the text and the link are set.
#[must_use]
pub fn render_primary_cta(model: &EmailModel, ctx: &RenderContext) -> String {
    let (Some(text), Some(link)) = (
        non_empty(model.cta_text.as_deref()),
        non_empty(model.cta_link.as_deref()),
    ) else {
        return String::new();
    };
    let spec = ButtonSpec {
        text,
        link,
        color: model.cta_color.unwrap_or(Color::INDIGO),
        style: ctx.button_style,
        surrounding_bg: model.body_background_color.unwrap_or(Color::WHITE),
        size: ButtonSize::PRIMARY,
        text_color: model.cta_text_color,
    };

    let mut out = String::with_capacity(1536);
    let _ = writeln!(
        out,
        r#"<tr><td align="center"><table role="presentation" border="0" cellpadding="0" cellspacing="0"><tr><td align="center">{}</td></tr></table></td></tr>"#,
        render_button(&spec, ctx)
    );
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    out
}

/// Centered fine-print row closing the email.
#[must_use]
pub fn render_disclaimer(disclaimer: &str, ctx: &RenderContext) -> String {
    format!(
        "<tr><td style=\"text-align: center; padding: 20px; font-family: {}; font-size: 8px; line-height: 1.5; color: #718096;\">{}</td></tr>\n",
        escape_html(&ctx.font_family),
        text_with_breaks(disclaimer)
    )
}

/// Wrap section rows in the document shell with client-compatibility headers.
fn wrap_document(sections: &str, ctx: &RenderContext) -> String {
    let font = escape_html(&ctx.font_family);
    let legacy_font = escape_html(&ctx.legacy_font);

    let mut out = String::with_capacity(sections.len() + 4096);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="en" xmlns="http://www.w3.org/1999/xhtml" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:o="urn:schemas-microsoft-com:office:office">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width">
<meta http-equiv="X-UA-Compatible" content="IE=edge">
<meta name="x-apple-disable-message-reformatting">
<title>Promotional Email</title>
<!--[if mso]>
<style>
* {{ font-family: {legacy_font}, sans-serif !important; }}
</style>
<![endif]-->
<style>
html, body {{ margin: 0 auto !important; padding: 0 !important; height: 100% !important; width: 100% !important; background: #f1f3f5; }}
* {{ -ms-text-size-adjust: 100%; -webkit-text-size-adjust: 100%; }}
table, td {{ mso-table-lspace: 0pt !important; mso-table-rspace: 0pt !important; }}
img {{ -ms-interpolation-mode:bicubic; }}
a {{ text-decoration: none; }}
@media screen and (max-width: 600px) {{
.email-container {{ width: 100% !important; margin: auto !important; }}
}}
</style>
</head>
<body width="100%" style="margin: 0; padding: 0 !important; mso-line-height-rule: exactly; background-color: #f1f3f5;">
<center style="width: 100%; background-color: #f1f3f5;">
<div style="max-width: 600px; margin: 0 auto;" class="email-container">
<!--[if mso]>
<table align="center" role="presentation" cellspacing="0" cellpadding="0" border="0" width="600">
<tr>
<td>
<![endif]-->
<table align="center" role="presentation" cellspacing="0" cellpadding="0" border="0" width="100%" style="margin: auto;">
<tr>
<td style="padding: 20px; font-family: {font}; font-size: 15px; line-height: 1.5; color: #333333;">
<table role="presentation" border="0" cellpadding="0" cellspacing="0" width="100%">
<tbody>
"#
    );
    out.push_str(sections);
    out.push_str(
        r"</tbody>
</table>
</td>
</tr>
</table>
<!--[if mso]>
</td>
</tr>
</table>
<![endif]-->
</div>
</center>
</body>
</html>
",
    );
    out
}

#[cfg(test)]
mod tests {
    // Rendering shares models across threads without locking
    static_assertions::assert_impl_all!(crate::EmailModel: Send, Sync);
    static_assertions::assert_impl_all!(crate::OfferItem: Send, Sync);
    static_assertions::assert_impl_all!(crate::FooterLink: Send, Sync);
    static_assertions::assert_impl_all!(super::HtmlDocument: Send, Sync);
    static_assertions::assert_impl_all!(crate::RenderContext: Send, Sync);

    use super::*;
    use crate::model::{ButtonStyle, FooterLink, ImagePosition, LayoutStyle, OfferItem};

    fn full_model() -> EmailModel {
        EmailModel {
            body_content: "Spring sale\nthis weekend only".to_owned(),
            body_background_color: Some(Color::new(0x11, 0x11, 0x11)),
            hero_message: Some("Big savings".to_owned()),
            hero_message_color: Some(Color::WHITE),
            hero_message_font_size: Some(32),
            hero_message_bg_color: Some(Color::new(0x63, 0x66, 0xf1)),
            hero_image: Some("https://cdn.example.com/hero.jpg".to_owned()),
            cta_text: Some("Shop now".to_owned()),
            cta_link: Some("https://example.com/shop".to_owned()),
            offers: vec![
                OfferItem {
                    title: Some("Offer A".to_owned()),
                    image_data_url: Some("https://cdn.example.com/a.jpg".to_owned()),
                    image_position: ImagePosition::Top,
                    ..OfferItem::default()
                },
                OfferItem::default(),
                OfferItem {
                    title: Some("Offer B".to_owned()),
                    ..OfferItem::default()
                },
            ],
            footer_ctas: vec![
                FooterLink::new("Visit us", "https://example.com/visit"),
                FooterLink::new("Call us", "tel:5551234"),
            ],
            disclaimer: Some("Prices exclude tax.".to_owned()),
            font_family: "'Helvetica', Arial, sans-serif".to_owned(),
            button_style: ButtonStyle::Pill,
            layout_style: LayoutStyle::CardStyle,
            ..EmailModel::default()
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let model = full_model();
        let first = render_email(&model);
        let second = render_email(&model);
        pretty_assertions::assert_eq!(first, second);
    }

    #[test]
    fn test_render_does_not_mutate_model() {
        let model = full_model();
        let before = model.clone();
        let _ = render_email(&model);
        assert_eq!(model, before);
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let html = render_email(&full_model()).into_string();
        let positions: Vec<usize> = [
            "<!--[if mso]>\n<style>",
            "alt=\"Hero Image\"",
            "Big savings",
            "Spring sale",
            ">Shop now</a>",
            "Offer A",
            "Offer B",
            "Visit us",
            "Call us",
            "Prices exclude tax.",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_legacy_font_header() {
        let html = render_email(&full_model()).into_string();
        assert!(html.contains("* { font-family: Helvetica, sans-serif !important; }"));
        assert!(html.contains("font-family: 'Helvetica', Arial, sans-serif;"));
    }

    #[test]
    fn test_default_font_when_empty() {
        let html = render_email(&EmailModel::new("Hi")).into_string();
        assert!(html.contains("* { font-family: Arial, sans-serif !important; }"));
    }

    #[test]
    fn test_body_text_contrast_on_dark_background() {
        let html = render_body(&full_model(), &RenderContext::from_model(&full_model()));
        assert!(html.contains("background-color: #111111;"));
        assert!(html.contains(r#"<p style="margin: 0; color: #ffffff;">Spring sale<br />this weekend only</p>"#));
    }

    #[test]
    fn test_body_defaults_to_white_background() {
        let model = EmailModel::new("Hi");
        let html = render_body(&model, &RenderContext::from_model(&model));
        assert!(html.contains("background-color: #ffffff;"));
        assert!(html.contains("color: #333333;"));
    }

    #[test]
    fn test_card_style_adds_body_border() {
        let model = full_model();
        let html = render_body(&model, &RenderContext::from_model(&model));
        assert!(html.contains("border-radius: 8px; border: 1px solid #e2e8f0;"));

        let centered = EmailModel {
            layout_style: LayoutStyle::Centered,
            ..full_model()
        };
        let html = render_body(&centered, &RenderContext::from_model(&centered));
        assert!(!html.contains("#e2e8f0"));
    }

    #[test]
    fn test_minimal_layout_widens_spacers() {
        let model = EmailModel {
            layout_style: LayoutStyle::Minimal,
            ..full_model()
        };
        let html = render_email(&model).into_string();
        assert!(html.contains("font-size: 30px; line-height: 30px;"));
        assert!(!html.contains("font-size: 20px; line-height: 20px;"));
    }

    #[test]
    fn test_hero_message_defaults() {
        let model = EmailModel {
            hero_message: Some("Hello\nthere".to_owned()),
            ..EmailModel::new("Body")
        };
        let html = render_hero_message(&model, &RenderContext::from_model(&model));
        assert!(html.contains(r#"bgcolor="transparent""#));
        assert!(html.contains("font-size: 24px;"));
        assert!(html.contains("color: #1d1d1f;"));
        assert!(html.contains("Hello<br />there</td>"));
    }

    #[test]
    fn test_hero_message_custom_values() {
        let model = full_model();
        let html = render_hero_message(&model, &RenderContext::from_model(&model));
        assert!(html.contains(r##"bgcolor="#6366f1""##));
        assert!(html.contains("font-size: 32px;"));
        assert!(html.contains("color: #ffffff;"));
    }

    #[test]
    fn test_empty_hero_message_omitted() {
        let model = EmailModel {
            hero_message: Some(String::new()),
            ..EmailModel::new("Body")
        };
        assert_eq!(render_hero_message(&model, &RenderContext::default()), "");
    }

    #[test]
    fn test_primary_cta_requires_both_fields() {
        let model = EmailModel {
            cta_text: Some("Shop".to_owned()),
            ..EmailModel::new("Body")
        };
        assert_eq!(render_primary_cta(&model, &RenderContext::default()), "");

        let model = EmailModel {
            cta_link: Some("https://example.com".to_owned()),
            ..EmailModel::new("Body")
        };
        assert_eq!(render_primary_cta(&model, &RenderContext::default()), "");
    }

    #[test]
    fn test_primary_cta_defaults_to_indigo() {
        let model = EmailModel {
            cta_text: Some("Shop".to_owned()),
            cta_link: Some("https://example.com".to_owned()),
            ..EmailModel::new("Body")
        };
        let html = render_primary_cta(&model, &RenderContext::from_model(&model));
        assert!(html.contains("background-color:#4f46e5;"));
        assert!(html.contains("width:200px;"));
        assert!(html.contains("line-height:50px;"));
    }

    #[test]
    fn test_outlined_primary_cta_sits_on_body_background() {
        let model = EmailModel {
            button_style: ButtonStyle::Outlined,
            ..full_model()
        };
        let html = render_primary_cta(&model, &RenderContext::from_model(&model));
        assert!(html.contains("background-color:#111111;"));
    }

    #[test]
    fn test_disclaimer_fragment() {
        let html = render_disclaimer("Line 1\nLine 2", &RenderContext::default());
        assert!(html.contains("font-size: 8px;"));
        assert!(html.contains("Line 1<br />Line 2</td></tr>"));
    }

    #[test]
    fn test_hero_image_fragment() {
        let html = render_hero_image("data:image/png;base64,AAAA", &RenderContext::default());
        assert!(html.contains(r#"<img src="data:image/png;base64,AAAA" alt="Hero Image" width="600""#));
        assert!(html.contains("&nbsp;"));
    }

    #[test]
    fn test_end_to_end_minimal_scenario() {
        let model = EmailModel {
            body_content: "Hello".to_owned(),
            offers: vec![OfferItem {
                title: Some("Save $5000".to_owned()),
                ..OfferItem::default()
            }],
            button_style: ButtonStyle::Pill,
            layout_style: LayoutStyle::Centered,
            ..EmailModel::default()
        };
        let html = render_email(&model).into_string();

        assert_eq!(html.matches("Hello").count(), 1);
        assert_eq!(html.matches(">Save $5000</h2>").count(), 1);
        assert!(!html.contains("<img"));
        assert!(!html.contains(r#"width="240""#));
        assert!(!html.contains("<v:roundrect"));
        assert!(!html.contains("padding-bottom: 0;"));
        assert!(!html.contains("Hero Image"));
    }

    #[test]
    fn test_empty_offers_leave_no_trace_in_document() {
        let titled = OfferItem {
            title: Some("Only Deal".to_owned()),
            ..OfferItem::default()
        };
        let with_empties = EmailModel {
            offers: vec![OfferItem::default(), titled.clone(), OfferItem::default()],
            ..EmailModel::new("Hello")
        };
        let without = EmailModel {
            offers: vec![titled],
            ..EmailModel::new("Hello")
        };

        assert_eq!(
            render_email(&with_empties).into_string(),
            render_email(&without).into_string()
        );
    }

    #[test]
    fn test_document_shell() {
        let doc = render_email(&EmailModel::new("Hi"));
        let html = doc.as_str();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\""));
        assert!(html.contains(r#"<meta name="x-apple-disable-message-reformatting">"#));
        assert!(html.contains(r#"xmlns:v="urn:schemas-microsoft-com:vml""#));
        assert!(html.contains(r#"<table align="center" role="presentation" cellspacing="0" cellpadding="0" border="0" width="600">"#));
        assert!(html.ends_with("</html>\n"));
        assert_eq!(doc.len(), html.len());
        assert_eq!(doc.to_string(), html);
    }

    #[test]
    fn test_html_document_constants() {
        assert_eq!(HtmlDocument::MIME_TYPE, "text/html");
        assert_eq!(HtmlDocument::DEFAULT_FILE_NAME, "email-template.html");
    }
}
