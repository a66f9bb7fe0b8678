//! Form adapter for the promotional email renderer.
//!
//! Turns what an operator types and uploads into a validated
//! [`EmailModel`](pm_renderer::EmailModel), renders it, and writes the
//! result to disk.
//!
//! # Example
//!
//! ```
//! use pm_config::Config;
//! use pm_form::{new_form, render_form};
//!
//! let mut form = new_form(&Config::default()).unwrap();
//! form.body_content = "Spring sale starts now.".to_owned();
//! form.cta_text = "Shop".to_owned();
//! form.cta_link = "https://example.com".to_owned();
//!
//! let document = render_form(&form).unwrap();
//! assert!(document.as_str().contains("Spring sale starts now."));
//! ```

mod error;
mod export;
mod form;
mod image;

pub use error::FormError;
pub use export::{export_html, write_html};
pub use form::{EmailForm, FooterLinkForm, OfferForm};
pub use image::ImageUpload;

use pm_config::Config;
use pm_renderer::{HtmlDocument, render_email};

/// Start a form from the configured design defaults and color scheme.
///
/// # Errors
///
/// Returns `FormError::Config` if the configured scheme does not exist.
pub fn new_form(config: &Config) -> Result<EmailForm, FormError> {
    let scheme = config.active_scheme()?;
    let mut form = EmailForm::new(config.design.clone());
    form.apply_color_scheme(&config.design.color_scheme, scheme);
    Ok(form)
}

/// Switch `form` to the named color scheme.
///
/// # Errors
///
/// Returns `FormError::Config` if no scheme of that name exists.
pub fn select_scheme(form: &mut EmailForm, config: &Config, name: &str) -> Result<(), FormError> {
    let scheme = config.scheme(name).ok_or_else(|| {
        pm_config::ConfigError::Validation(format!("unknown color scheme {name:?}"))
    })?;
    form.apply_color_scheme(name, scheme);
    Ok(())
}

/// Validate `form` and render it.
///
/// # Errors
///
/// Returns the first validation error of [`EmailForm::to_model`].
pub fn render_form(form: &EmailForm) -> Result<HtmlDocument, FormError> {
    let model = form.to_model()?;
    Ok(render_email(&model))
}

#[cfg(test)]
mod tests {
    use pm_renderer::{ButtonStyle, LayoutStyle};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_form_uses_config() {
        let mut config = Config::default();
        config.design.color_scheme = "warm".to_owned();
        config.design.button_style = ButtonStyle::Pill;

        let form = new_form(&config).unwrap();

        assert_eq!(form.design.button_style, ButtonStyle::Pill);
        assert_eq!(form.cta_color, "#ff6b35");
        assert_eq!(form.body_background_color, "#fff8f5");
        assert_eq!(form.offers()[0].cta_color, "#ff6b35");
    }

    #[test]
    fn test_new_form_unknown_scheme() {
        let mut config = Config::default();
        config.design.color_scheme = "neon".to_owned();
        assert!(matches!(new_form(&config), Err(FormError::Config(_))));
    }

    #[test]
    fn test_select_scheme() {
        let config = Config::default();
        let mut form = new_form(&config).unwrap();

        select_scheme(&mut form, &config, "corporate").unwrap();
        assert_eq!(form.cta_color, "#374151");
        assert_eq!(form.design.color_scheme, "corporate");

        assert!(select_scheme(&mut form, &config, "neon").is_err());
        assert_eq!(form.design.color_scheme, "corporate");
    }

    #[test]
    fn test_render_form_end_to_end() {
        let mut form = new_form(&Config::default()).unwrap();
        form.design.layout_style = LayoutStyle::CardStyle;
        form.body_content = "Line one\nLine two".to_owned();
        form.cta_text = "Shop".to_owned();
        form.cta_link = "https://example.com/shop".to_owned();
        let offer = form.offer_mut(0).unwrap();
        offer.title = "Lease Deal".to_owned();
        offer.cta_text = "View".to_owned();
        offer.cta_link = "https://example.com/deal".to_owned();
        let link = form.footer_link_mut(0).unwrap();
        link.text = "Visit".to_owned();
        link.link = "https://example.com".to_owned();

        let html = render_form(&form).unwrap().into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Line one<br />Line two"));
        assert!(html.contains("Lease Deal"));
        assert!(html.contains("href=\"https://example.com/deal\""));
        assert!(html.contains(">Visit</a>"));
        assert!(html.contains("border: 1px solid #e2e8f0;"));
    }

    #[test]
    fn test_render_form_missing_body() {
        let form = new_form(&Config::default()).unwrap();
        assert!(matches!(render_form(&form), Err(FormError::MissingBody)));
    }
}
