//! Site building: render every content page through the template.

use std::fs;
use std::io;
use std::path::PathBuf;

use rayon::prelude::*;
use sitegen_markdown::{RenderError, extract_title, markdown_to_html};

use crate::assets::mirror_static;
use crate::scanner::{PageRef, scan_content};
use crate::template::{PageTemplate, TemplateError, rewrite_root_links};

/// Error returned when a site build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Failed to render {}: {source}", .path.display())]
    Render {
        path: PathBuf,
        source: RenderError,
    },
}

/// Configuration for [`SiteBuilder`].
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory holding markdown sources.
    pub content_dir: PathBuf,
    /// Directory holding static assets.
    pub static_dir: PathBuf,
    /// HTML template with title and content placeholders.
    pub template_path: PathBuf,
    /// Directory the finished site is written to.
    pub output_dir: PathBuf,
    /// URL prefix applied to root-relative links, e.g. `/` or `/docs/`.
    pub base_path: String,
}

/// Counts reported by a completed build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Markdown pages rendered.
    pub pages: usize,
    /// Static assets copied.
    pub assets: usize,
}

/// Builds a complete static site from markdown content.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sitegen_site::{BuildConfig, SiteBuilder};
///
/// let builder = SiteBuilder::new(BuildConfig {
///     content_dir: PathBuf::from("content"),
///     static_dir: PathBuf::from("static"),
///     template_path: PathBuf::from("template.html"),
///     output_dir: PathBuf::from("public"),
///     base_path: "/".to_owned(),
/// });
/// let summary = builder.build()?;
/// println!("{} pages, {} assets", summary.pages, summary.assets);
/// ```
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the site: mirror static assets, then render every page.
    ///
    /// Pages render in parallel; the first failure aborts the build.
    ///
    /// # Errors
    ///
    /// Returns an error when a directory or the template is missing, a
    /// page fails to render, or a file cannot be written.
    pub fn build(&self) -> Result<BuildSummary, BuildError> {
        let template = PageTemplate::load(&self.config.template_path)?;

        if !self.config.content_dir.is_dir() {
            return Err(BuildError::DirectoryNotFound(
                self.config.content_dir.clone(),
            ));
        }
        let pages = scan_content(&self.config.content_dir)?;

        let assets = mirror_static(&self.config.static_dir, &self.config.output_dir)?;

        pages
            .par_iter()
            .try_for_each(|page| self.generate_page(page, &template))?;

        Ok(BuildSummary {
            pages: pages.len(),
            assets,
        })
    }

    /// Render one markdown source into its HTML destination.
    fn generate_page(&self, page: &PageRef, template: &PageTemplate) -> Result<(), BuildError> {
        let markdown = fs::read_to_string(&page.source)?;

        let render = |source| BuildError::Render {
            path: page.source.clone(),
            source,
        };
        let html = markdown_to_html(&markdown).map_err(render)?;
        let title = extract_title(&markdown).map_err(render)?;

        let rendered = rewrite_root_links(&template.render(&title, &html), &self.config.base_path);

        let dest = self
            .config
            .output_dir
            .join(page.rel_path.with_extension("html"));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, rendered)?;

        tracing::info!(source = %page.source.display(), dest = %dest.display(), "Generated page");
        Ok(())
    }
}
