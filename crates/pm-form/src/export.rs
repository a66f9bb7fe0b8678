//! Writing rendered documents to disk.

use std::path::{Path, PathBuf};

use pm_config::ExportConfig;
use pm_renderer::HtmlDocument;

use crate::error::FormError;

/// Write `document` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `FormError::Io` if a directory or the file cannot be written.
pub fn write_html(document: &HtmlDocument, path: &Path) -> Result<(), FormError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document.as_str())?;
    tracing::info!(path = %path.display(), bytes = document.len(), "Exported email");
    Ok(())
}

/// Write `document` to the location configured in `[export]`.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns `FormError::Io` if a directory or the file cannot be written.
pub fn export_html(document: &HtmlDocument, config: &ExportConfig) -> Result<PathBuf, FormError> {
    let path = config.path();
    write_html(document, &path)?;
    Ok(path)
}
