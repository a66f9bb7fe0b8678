//! Form adapter error types.

use std::path::PathBuf;

use pm_config::ConfigError;
use pm_renderer::ColorError;

/// Error returned when editing, validating or exporting a form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Adding an offer would exceed the maximum.
    #[error("At most {max} offers are allowed")]
    TooManyOffers { max: usize },

    /// Adding a footer link would exceed the maximum.
    #[error("At most {max} footer links are allowed")]
    TooManyFooterLinks { max: usize },

    /// No entry exists at the given index.
    #[error("No entry at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The first offer and the first footer link are always present.
    #[error("The first entry cannot be removed")]
    FirstEntryFixed,

    /// Body text is required.
    #[error("Email body cannot be empty")]
    MissingBody,

    /// A color field does not hold a `#rrggbb` value.
    #[error("Invalid color in {field}: {source}")]
    InvalidColor {
        field: String,
        #[source]
        source: ColorError,
    },

    /// Hero message font size is not a positive whole number of pixels.
    #[error("Invalid font size: {0:?}")]
    InvalidFontSize(String),

    /// Upload is not a PNG or JPEG image.
    #[error("Unsupported image type {mime} (expected image/png or image/jpeg)")]
    UnsupportedImage { mime: String },

    /// Upload contains no data.
    #[error("Image upload is empty")]
    EmptyImage,

    /// Upload file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be applied.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O error while exporting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
