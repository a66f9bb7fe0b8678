//! Form state owned by the adapter.
//!
//! [`EmailForm`] mirrors the editing form as plain strings, exactly as a
//! browser would submit them. It owns the ordered offer and footer-link
//! entries, enforces their maxima, and converts the whole thing into a
//! validated [`EmailModel`] for rendering.

use pm_config::{ColorScheme, DesignSettings};
use pm_renderer::{
    Color, EmailModel, FooterLink, ImagePosition, MAX_FOOTER_LINKS, MAX_OFFERS, OfferItem,
    contrast_color,
};
use serde::Deserialize;

use crate::error::FormError;
use crate::image::ImageUpload;

/// Raw input of one offer entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfferForm {
    pub vehicle: String,
    pub title: String,
    pub details: String,
    /// `left`, `right` or `top`.
    pub image_position: String,
    pub cta_text: String,
    pub cta_link: String,
    pub cta_color: String,
    pub cta_text_color: String,
    pub disclaimer: String,
    /// Data URL of the uploaded image, empty when none was chosen.
    pub image_data_url: String,
}

impl OfferForm {
    /// Empty entry with button colors taken from `scheme`.
    fn with_scheme(scheme: &ColorScheme) -> Self {
        Self {
            image_position: "left".to_owned(),
            cta_color: scheme.primary.to_string(),
            cta_text_color: contrast_color(Some(&scheme.primary)).to_string(),
            ..Self::default()
        }
    }

    /// Attach an uploaded image.
    pub fn set_image(&mut self, upload: &ImageUpload) {
        self.image_data_url = upload.to_data_url();
    }

    /// Whether the operator filled in anything that makes this offer worth
    /// submitting.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        [
            &self.vehicle,
            &self.title,
            &self.details,
            &self.cta_text,
            &self.image_data_url,
        ]
        .into_iter()
        .any(|field| !field.is_empty())
    }

    fn to_item(&self, index: usize) -> Result<OfferItem, FormError> {
        let field = |name: &str| format!("offers[{index}].{name}");
        Ok(OfferItem {
            vehicle: text(&self.vehicle),
            title: text(&self.title),
            details: text(&self.details),
            image_position: ImagePosition::from_name(&self.image_position),
            cta_text: text(&self.cta_text),
            cta_link: text(&self.cta_link),
            cta_color: color(&field("cta_color"), &self.cta_color)?,
            cta_text_color: color(&field("cta_text_color"), &self.cta_text_color)?,
            disclaimer: text(&self.disclaimer),
            image_data_url: text(&self.image_data_url),
        })
    }
}

/// Raw input of one footer link entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterLinkForm {
    pub text: String,
    pub link: String,
}

impl FooterLinkForm {
    /// A link is only included when both text and URL are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.link.is_empty()
    }
}

/// The complete editing form.
///
/// A new form holds one empty offer and one empty footer link. The first
/// entry of each list is always present.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailForm {
    pub body_content: String,
    pub body_background_color: String,
    pub hero_message: String,
    pub hero_message_color: String,
    /// Pixels, as typed.
    pub hero_message_font_size: String,
    pub hero_message_bg_color: String,
    /// Data URL of the hero image, empty when none was chosen.
    pub hero_image: String,
    pub cta_text: String,
    pub cta_link: String,
    pub cta_color: String,
    pub cta_text_color: String,
    pub disclaimer: String,
    pub footer_background_color: String,
    pub footer_cta_color: String,
    pub footer_cta_text_color: String,
    pub design: DesignSettings,
    offers: Vec<OfferForm>,
    footer_links: Vec<FooterLinkForm>,
    #[serde(skip)]
    scheme: Option<ColorScheme>,
}

impl Default for EmailForm {
    fn default() -> Self {
        Self::new(DesignSettings::default())
    }
}

impl EmailForm {
    /// Create a form with the given design settings.
    #[must_use]
    pub fn new(design: DesignSettings) -> Self {
        Self {
            body_content: String::new(),
            body_background_color: String::new(),
            hero_message: String::new(),
            hero_message_color: String::new(),
            hero_message_font_size: String::new(),
            hero_message_bg_color: String::new(),
            hero_image: String::new(),
            cta_text: String::new(),
            cta_link: String::new(),
            cta_color: String::new(),
            cta_text_color: String::new(),
            disclaimer: String::new(),
            footer_background_color: String::new(),
            footer_cta_color: String::new(),
            footer_cta_text_color: String::new(),
            design,
            offers: vec![OfferForm::default()],
            footer_links: vec![FooterLinkForm::default()],
            scheme: None,
        }
    }

    /// Attach an uploaded hero image.
    pub fn set_hero_image(&mut self, upload: &ImageUpload) {
        self.hero_image = upload.to_data_url();
    }

    #[must_use]
    pub fn offers(&self) -> &[OfferForm] {
        &self.offers
    }

    /// Mutable access to one offer entry.
    ///
    /// # Errors
    ///
    /// Returns `FormError::IndexOutOfRange` if there is no entry at `index`.
    pub fn offer_mut(&mut self, index: usize) -> Result<&mut OfferForm, FormError> {
        let len = self.offers.len();
        self.offers
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })
    }

    /// Append an empty offer entry.
    ///
    /// When a color scheme has been applied, the new entry's button colors
    /// follow it.
    ///
    /// # Errors
    ///
    /// Returns `FormError::TooManyOffers` once [`MAX_OFFERS`] entries exist.
    pub fn add_offer(&mut self) -> Result<&mut OfferForm, FormError> {
        if self.offers.len() >= MAX_OFFERS {
            return Err(FormError::TooManyOffers { max: MAX_OFFERS });
        }
        let offer = self
            .scheme
            .as_ref()
            .map_or_else(OfferForm::default, OfferForm::with_scheme);
        self.offers.push(offer);
        tracing::debug!(count = self.offers.len(), "Added offer");
        let last = self.offers.len() - 1;
        Ok(&mut self.offers[last])
    }

    /// Remove the offer entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::FirstEntryFixed` for index 0 and
    /// `FormError::IndexOutOfRange` for a missing entry.
    pub fn remove_offer(&mut self, index: usize) -> Result<OfferForm, FormError> {
        let removed = remove_entry(&mut self.offers, index)?;
        tracing::debug!(index, count = self.offers.len(), "Removed offer");
        Ok(removed)
    }

    /// Whether another offer can be added.
    #[must_use]
    pub fn can_add_offer(&self) -> bool {
        self.offers.len() < MAX_OFFERS
    }

    #[must_use]
    pub fn footer_links(&self) -> &[FooterLinkForm] {
        &self.footer_links
    }

    /// Mutable access to one footer link entry.
    ///
    /// # Errors
    ///
    /// Returns `FormError::IndexOutOfRange` if there is no entry at `index`.
    pub fn footer_link_mut(&mut self, index: usize) -> Result<&mut FooterLinkForm, FormError> {
        let len = self.footer_links.len();
        self.footer_links
            .get_mut(index)
            .ok_or(FormError::IndexOutOfRange { index, len })
    }

    /// Append an empty footer link entry.
    ///
    /// # Errors
    ///
    /// Returns `FormError::TooManyFooterLinks` once [`MAX_FOOTER_LINKS`]
    /// entries exist.
    pub fn add_footer_link(&mut self) -> Result<&mut FooterLinkForm, FormError> {
        if self.footer_links.len() >= MAX_FOOTER_LINKS {
            return Err(FormError::TooManyFooterLinks {
                max: MAX_FOOTER_LINKS,
            });
        }
        self.footer_links.push(FooterLinkForm::default());
        tracing::debug!(count = self.footer_links.len(), "Added footer link");
        let last = self.footer_links.len() - 1;
        Ok(&mut self.footer_links[last])
    }

    /// Remove the footer link entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::FirstEntryFixed` for index 0 and
    /// `FormError::IndexOutOfRange` for a missing entry.
    pub fn remove_footer_link(&mut self, index: usize) -> Result<FooterLinkForm, FormError> {
        let removed = remove_entry(&mut self.footer_links, index)?;
        tracing::debug!(index, count = self.footer_links.len(), "Removed footer link");
        Ok(removed)
    }

    /// Whether another footer link can be added.
    #[must_use]
    pub fn can_add_footer_link(&self) -> bool {
        self.footer_links.len() < MAX_FOOTER_LINKS
    }

    /// Replace the design settings.
    pub fn apply_design(&mut self, design: DesignSettings) {
        self.design = design;
    }

    /// Fill every color field from a scheme.
    ///
    /// Backgrounds take the scheme background; every button takes the
    /// primary color with a contrasting text color. Offers added later
    /// follow the same scheme.
    pub fn apply_color_scheme(&mut self, name: &str, scheme: ColorScheme) {
        let bg = scheme.bg.to_string();
        let primary = scheme.primary.to_string();
        let on_primary = contrast_color(Some(&scheme.primary)).to_string();

        self.hero_message_bg_color.clone_from(&bg);
        self.body_background_color.clone_from(&bg);
        self.cta_color.clone_from(&primary);
        self.cta_text_color.clone_from(&on_primary);
        for offer in &mut self.offers {
            offer.cta_color.clone_from(&primary);
            offer.cta_text_color.clone_from(&on_primary);
        }
        self.footer_background_color = bg;
        self.footer_cta_color = primary;
        self.footer_cta_text_color = on_primary;

        name.clone_into(&mut self.design.color_scheme);
        self.scheme = Some(scheme);
        tracing::debug!(scheme = name, "Applied color scheme");
    }

    /// Validate the form and build the render model.
    ///
    /// Offers nobody filled in and footer links missing text or URL are
    /// dropped; the rest keep their order.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingBody` for empty body text,
    /// `FormError::InvalidColor` for a malformed color field and
    /// `FormError::InvalidFontSize` for a malformed hero font size.
    pub fn to_model(&self) -> Result<EmailModel, FormError> {
        if self.body_content.trim().is_empty() {
            return Err(FormError::MissingBody);
        }
        // Deserialized forms bypass add_offer/add_footer_link.
        if self.offers.len() > MAX_OFFERS {
            return Err(FormError::TooManyOffers { max: MAX_OFFERS });
        }
        if self.footer_links.len() > MAX_FOOTER_LINKS {
            return Err(FormError::TooManyFooterLinks {
                max: MAX_FOOTER_LINKS,
            });
        }

        let offers = self
            .offers
            .iter()
            .enumerate()
            .filter(|(_, offer)| offer.is_submitted())
            .map(|(index, offer)| offer.to_item(index))
            .collect::<Result<Vec<_>, _>>()?;

        let footer_ctas: Vec<FooterLink> = self
            .footer_links
            .iter()
            .filter(|link| link.is_complete())
            .map(|link| FooterLink::new(link.text.clone(), link.link.clone()))
            .collect();

        tracing::debug!(
            offers = offers.len(),
            dropped_offers = self.offers.len() - offers.len(),
            footer_links = footer_ctas.len(),
            "Built email model"
        );

        Ok(EmailModel {
            body_content: self.body_content.clone(),
            body_background_color: color("body_background_color", &self.body_background_color)?,
            hero_message: text(&self.hero_message),
            hero_message_color: color("hero_message_color", &self.hero_message_color)?,
            hero_message_font_size: font_size(&self.hero_message_font_size)?,
            hero_message_bg_color: color("hero_message_bg_color", &self.hero_message_bg_color)?,
            hero_image: text(&self.hero_image),
            cta_text: text(&self.cta_text),
            cta_link: text(&self.cta_link),
            cta_color: color("cta_color", &self.cta_color)?,
            cta_text_color: color("cta_text_color", &self.cta_text_color)?,
            offers,
            footer_ctas,
            footer_background_color: color(
                "footer_background_color",
                &self.footer_background_color,
            )?,
            footer_cta_color: color("footer_cta_color", &self.footer_cta_color)?,
            footer_cta_text_color: color("footer_cta_text_color", &self.footer_cta_text_color)?,
            disclaimer: text(&self.disclaimer),
            font_family: self.design.font_family.clone(),
            button_style: self.design.button_style,
            layout_style: self.design.layout_style,
        })
    }
}

fn remove_entry<T>(entries: &mut Vec<T>, index: usize) -> Result<T, FormError> {
    if index >= entries.len() {
        return Err(FormError::IndexOutOfRange {
            index,
            len: entries.len(),
        });
    }
    if index == 0 {
        return Err(FormError::FirstEntryFixed);
    }
    Ok(entries.remove(index))
}

/// Empty text fields are absent.
fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn color(field: &str, value: &str) -> Result<Option<Color>, FormError> {
    Color::parse_optional(value).map_err(|source| FormError::InvalidColor {
        field: field.to_owned(),
        source,
    })
}

fn font_size(value: &str) -> Result<Option<u16>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u16>() {
        Ok(size) if size > 0 => Ok(Some(size)),
        _ => Err(FormError::InvalidFontSize(value.to_owned())),
    }
}
