//! HTML generation engine for promotional emails.
//!
//! This crate maps an [`EmailModel`] to a single self-contained
//! [`HtmlDocument`] that survives legacy email clients: table-based layout,
//! inline styles only, and VML fallbacks for desktop Outlook.
//!
//! # Architecture
//!
//! Rendering is a pure function. Each section has its own renderer that
//! returns a string fragment:
//! - [`render_button`]: one call-to-action as VML plus a standard anchor
//! - [`render_offer`]: one offer card in one of three image arrangements
//! - [`render_footer_links`]: stacked secondary buttons
//! - [`render_email`]: assembles everything into the document shell
//!
//! [`contrast_color`] picks readable text for any background.
//!
//! # Example
//!
//! ```
//! use pm_renderer::{ButtonStyle, EmailModel, OfferItem, render_email};
//!
//! let model = EmailModel {
//!     offers: vec![OfferItem {
//!         title: Some("Save $5000".to_owned()),
//!         ..OfferItem::default()
//!     }],
//!     button_style: ButtonStyle::Pill,
//!     ..EmailModel::new("Hello")
//! };
//! let doc = render_email(&model);
//! assert!(doc.as_str().contains("Save $5000"));
//! ```

mod button;
mod color;
mod context;
mod contrast;
mod document;
mod footer;
mod html;
mod layout;
mod model;
mod offer;

pub use button::{ButtonAppearance, ButtonSize, ButtonSpec, render_button};
pub use color::{Color, ColorError};
pub use context::{RenderContext, legacy_font_name};
pub use contrast::{contrast_color, contrast_for_hex};
pub use document::{
    HtmlDocument, render_body, render_disclaimer, render_email, render_hero_image,
    render_hero_message, render_primary_cta,
};
pub use footer::{FooterColors, render_footer_links};
pub use html::{escape_html, text_with_breaks};
pub use layout::LayoutMetrics;
pub use model::{
    ButtonStyle, DEFAULT_FONT_FAMILY, EmailModel, FooterLink, ImagePosition, LayoutStyle,
    MAX_FOOTER_LINKS, MAX_OFFERS, OfferItem,
};
pub use offer::{render_offer, render_offers};
