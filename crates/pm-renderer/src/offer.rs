//! Offer blocks.
//!
//! Each non-empty [`OfferItem`] becomes one bordered card row followed by a
//! spacer row. Empty offers produce nothing at all.

use std::fmt::Write;

use crate::button::{ButtonSize, ButtonSpec, render_button};
use crate::color::Color;
use crate::context::RenderContext;
use crate::html::{CARD_CELL_STYLE, PRESENTATION_TABLE_START, escape_html, spacer_row, text_with_breaks};
use crate::model::{ImagePosition, OfferItem, non_empty};

/// Width of the side image column, in pixels.
const SIDE_IMAGE_WIDTH: u16 = 240;

/// Max width of a full-width image inside the card, in pixels.
const TOP_IMAGE_MAX_WIDTH: u16 = 560;

/// Render one offer card, or an empty string for an empty offer.
#[must_use]
pub fn render_offer(offer: &OfferItem, ctx: &RenderContext) -> String {
    if offer.is_empty() {
        return String::new();
    }

    let text = render_offer_text(offer, ctx);
    let font = escape_html(&ctx.font_family);

    let mut out = String::with_capacity(2048);
    let _ = writeln!(
        out,
        r#"<tr><td style="{CARD_CELL_STYLE} background-color: #ffffff;">"#
    );

    match non_empty(offer.image_data_url.as_deref()) {
        None => {
            let _ = writeln!(
                out,
                r#"<div style="font-family: {font}; color: #333333;">{text}</div>"#
            );
        }
        Some(src) => {
            let image = OfferImage {
                src,
                alt: offer.title.as_deref().unwrap_or_default(),
            };
            out.push_str(PRESENTATION_TABLE_START);
            out.push('\n');
            match offer.image_position {
                ImagePosition::Top => {
                    let _ = writeln!(
                        out,
                        r#"<tr><td align="center" style="padding-bottom: 20px;">{}</td></tr>"#,
                        image.full_width()
                    );
                    let _ = writeln!(
                        out,
                        r#"<tr><td style="font-family: {font}; color: #333333;">{text}</td></tr>"#
                    );
                }
                ImagePosition::Right => {
                    let _ = writeln!(
                        out,
                        r#"<tr><td valign="top" style="font-family: {font}; color: #333333; padding-right: 20px;">{text}</td>"#
                    );
                    let _ = writeln!(
                        out,
                        r#"<td width="{SIDE_IMAGE_WIDTH}" valign="top">{}</td></tr>"#,
                        image.column()
                    );
                }
                ImagePosition::Left => {
                    let _ = writeln!(
                        out,
                        r#"<tr><td width="{SIDE_IMAGE_WIDTH}" valign="top" style="padding-right: 20px;">{}</td>"#,
                        image.column()
                    );
                    let _ = writeln!(
                        out,
                        r#"<td valign="top" style="font-family: {font}; color: #333333;">{text}</td></tr>"#
                    );
                }
            }
            out.push_str("</table>\n");
        }
    }

    out.push_str("</td></tr>\n");
    spacer_row(ctx.layout.spacer_height, &mut out);
    out.push('\n');
    out
}

/// Render every offer in order and concatenate the non-empty ones.
#[must_use]
pub fn render_offers(offers: &[OfferItem], ctx: &RenderContext) -> String {
    offers.iter().map(|offer| render_offer(offer, ctx)).collect()
}

/// Headings, copy, button and fine print of an offer.
fn render_offer_text(offer: &OfferItem, ctx: &RenderContext) -> String {
    let mut out = String::with_capacity(1024);
    let _ = writeln!(
        out,
        r#"<h3 style="margin: 0 0 5px 0; font-size: 16px; font-weight: bold; color: #4a5568;">{}</h3>"#,
        escape_html(offer.vehicle.as_deref().unwrap_or_default())
    );
    let _ = writeln!(
        out,
        r#"<h2 style="margin: 0 0 10px 0; font-size: 20px; font-weight: bold; color: #1a202c;">{}</h2>"#,
        escape_html(offer.title.as_deref().unwrap_or_default())
    );
    let _ = writeln!(
        out,
        r#"<p style="margin: 0 0 15px 0; font-size: 14px; line-height: 1.6;">{}</p>"#,
        text_with_breaks(offer.details.as_deref().unwrap_or_default())
    );

    if let (Some(text), Some(link)) = (
        non_empty(offer.cta_text.as_deref()),
        non_empty(offer.cta_link.as_deref()),
    ) {
        let spec = ButtonSpec {
            text,
            link,
            color: offer.cta_color.unwrap_or(Color::INDIGO),
            style: ctx.button_style,
            surrounding_bg: Color::WHITE,
            size: ButtonSize::OFFER,
            text_color: offer.cta_text_color,
        };
        out.push_str(&render_button(&spec, ctx));
        out.push('\n');
    }

    if let Some(disclaimer) = non_empty(offer.disclaimer.as_deref()) {
        let _ = writeln!(
            out,
            r#"<p style="margin: 15px 0 0 0; font-size: 8px; color: #718096; line-height: 1.5;">{}</p>"#,
            text_with_breaks(disclaimer)
        );
    }
    out
}

struct OfferImage<'a> {
    src: &'a str,
    alt: &'a str,
}

impl OfferImage<'_> {
    /// Image spanning the card, placed above the text.
    fn full_width(&self) -> String {
        format!(
            r#"<img src="{}" width="100%" alt="{}" style="display: block; max-width: {TOP_IMAGE_MAX_WIDTH}px; height: auto; border: 0; border-radius: 8px;">"#,
            escape_html(self.src),
            escape_html(self.alt)
        )
    }

    /// Fixed-width image for a side column.
    fn column(&self) -> String {
        format!(
            r#"<img src="{}" width="{SIDE_IMAGE_WIDTH}" alt="{}" style="display: block; width: 100%; max-width: {SIDE_IMAGE_WIDTH}px; border: 0; border-radius: 8px;">"#,
            escape_html(self.src),
            escape_html(self.alt)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ButtonStyle, LayoutStyle};

    const IMAGE: &str = "data:image/png;base64,iVBORw0KGgo=";

    fn offer_with_image(position: ImagePosition) -> OfferItem {
        OfferItem {
            vehicle: Some("2024 Roadster".to_owned()),
            title: Some("Save $5000".to_owned()),
            details: Some("Limited time\nWhile supplies last".to_owned()),
            image_position: position,
            image_data_url: Some(IMAGE.to_owned()),
            ..OfferItem::default()
        }
    }

    #[test]
    fn test_empty_offer_renders_nothing() {
        assert_eq!(render_offer(&OfferItem::default(), &RenderContext::default()), "");
    }

    #[test]
    fn test_offer_with_only_disclaimer_renders_nothing() {
        let offer = OfferItem {
            disclaimer: Some("Terms apply".to_owned()),
            cta_link: Some("https://example.com".to_owned()),
            ..OfferItem::default()
        };
        assert_eq!(render_offer(&offer, &RenderContext::default()), "");
    }

    #[test]
    fn test_text_only_offer() {
        let offer = OfferItem {
            title: Some("Save $5000".to_owned()),
            ..OfferItem::default()
        };
        let html = render_offer(&offer, &RenderContext::default());
        assert!(html.contains(">Save $5000</h2>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<table"));
        assert!(html.contains(r#"<div style="font-family: 'Arial', sans-serif; color: #333333;">"#));
    }

    #[test]
    fn test_details_newlines_become_breaks() {
        let html = render_offer(&offer_with_image(ImagePosition::Left), &RenderContext::default());
        assert!(html.contains("Limited time<br />While supplies last</p>"));
    }

    #[test]
    fn test_top_places_image_before_text() {
        let html = render_offer(&offer_with_image(ImagePosition::Top), &RenderContext::default());
        let image = html.find("<img").unwrap();
        let heading = html.find("<h3").unwrap();
        assert!(image < heading);
        assert!(html.contains(r#"width="100%" alt="Save $5000""#));
        assert!(html.contains("max-width: 560px;"));
        // image and text live in separate rows of one table
        assert_eq!(html.matches("<table").count(), 1);
        assert_eq!(html.matches("<tr><td").count(), 4);
    }

    #[test]
    fn test_right_places_text_before_image_column() {
        let html = render_offer(&offer_with_image(ImagePosition::Right), &RenderContext::default());
        let heading = html.find("<h3").unwrap();
        let column = html.find(r#"<td width="240" valign="top">"#).unwrap();
        assert!(heading < column);
        assert!(html.contains(
            r#"<tr><td valign="top" style="font-family: 'Arial', sans-serif; color: #333333; padding-right: 20px;"><h3"#
        ));
    }

    #[test]
    fn test_left_places_image_column_before_text() {
        let html = render_offer(&offer_with_image(ImagePosition::Left), &RenderContext::default());
        let column = html
            .find(r#"<td width="240" valign="top" style="padding-right: 20px;">"#)
            .unwrap();
        let heading = html.find("<h3").unwrap();
        assert!(column < heading);
    }

    #[test]
    fn test_unrecognized_position_defaults_to_left() {
        let offer = OfferItem {
            image_position: ImagePosition::from_name("diagonal"),
            ..offer_with_image(ImagePosition::Right)
        };
        let html = render_offer(&offer, &RenderContext::default());
        assert_eq!(html, render_offer(&offer_with_image(ImagePosition::Left), &RenderContext::default()));
    }

    #[test]
    fn test_cta_requires_text_and_link() {
        let mut offer = OfferItem {
            title: Some("Deal".to_owned()),
            cta_text: Some("Claim".to_owned()),
            ..OfferItem::default()
        };
        let ctx = RenderContext::default();
        assert!(!render_offer(&offer, &ctx).contains("<v:roundrect"));

        offer.cta_link = Some("https://example.com/claim".to_owned());
        let html = render_offer(&offer, &ctx);
        assert!(html.contains("<v:roundrect"));
        assert!(html.contains("width:150px;"));
        assert!(html.contains("background-color:#4f46e5;"));
    }

    #[test]
    fn test_cta_uses_global_button_style() {
        let offer = OfferItem {
            title: Some("Deal".to_owned()),
            cta_text: Some("Claim".to_owned()),
            cta_link: Some("https://example.com".to_owned()),
            cta_color: Some(Color::new(0x10, 0xb9, 0x81)),
            ..OfferItem::default()
        };
        let ctx = RenderContext::new("Arial", ButtonStyle::Outlined, LayoutStyle::Centered);
        let html = render_offer(&offer, &ctx);
        assert!(html.contains("border:1px solid #10b981;"));
        assert!(html.contains("background-color:#ffffff;"));
    }

    #[test]
    fn test_disclaimer_rendered_as_fine_print() {
        let offer = OfferItem {
            title: Some("Deal".to_owned()),
            disclaimer: Some("Terms apply.\nSee dealer.".to_owned()),
            ..OfferItem::default()
        };
        let html = render_offer(&offer, &RenderContext::default());
        assert!(html.contains("font-size: 8px;"));
        assert!(html.contains("Terms apply.<br />See dealer.</p>"));
    }

    #[test]
    fn test_trailing_spacer_uses_layout_height() {
        let offer = OfferItem {
            title: Some("Deal".to_owned()),
            ..OfferItem::default()
        };
        let ctx = RenderContext::new("Arial", ButtonStyle::Rounded, LayoutStyle::Minimal);
        let html = render_offer(&offer, &ctx);
        assert!(html.trim_end().ends_with(
            r#"<tr><td style="font-size: 30px; line-height: 30px;">&nbsp;</td></tr>"#
        ));
    }

    #[test]
    fn test_render_offers_skips_empty_and_keeps_order() {
        let offers = vec![
            OfferItem {
                title: Some("First".to_owned()),
                ..OfferItem::default()
            },
            OfferItem::default(),
            OfferItem {
                title: Some("Second".to_owned()),
                ..OfferItem::default()
            },
        ];
        let html = render_offers(&offers, &RenderContext::default());
        assert_eq!(html.matches("&nbsp;").count(), 2);
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }
}
