//! Page templates with placeholder substitution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Placeholder replaced with the extracted page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Error returned when a template cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Template not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Template is missing the '{0}' placeholder")]
    MissingPlaceholder(&'static str),
}

/// An HTML shell with `{{ Title }}` and `{{ Content }}` placeholders.
///
/// Both placeholders must be present; a template without them would
/// silently produce pages with no content.
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    /// Load a template from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when the file does not exist, cannot be read, or
    /// is missing a placeholder.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        if !path.is_file() {
            return Err(TemplateError::NotFound(path.to_path_buf()));
        }
        Self::from_source(fs::read_to_string(path)?)
    }

    /// Build a template from an in-memory source string.
    ///
    /// # Errors
    ///
    /// Returns an error when a placeholder is missing.
    pub fn from_source(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !source.contains(placeholder) {
                return Err(TemplateError::MissingPlaceholder(placeholder));
            }
        }
        Ok(Self { source })
    }

    /// Substitute the title and rendered body into the template.
    #[must_use]
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Rewrite root-relative `href` and `src` attributes for a site served
/// under `base_path`.
///
/// With the default base path `/` this is the identity transformation.
#[must_use]
pub fn rewrite_root_links(html: &str, base_path: &str) -> String {
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
