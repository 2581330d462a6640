//! Site assembly for sitegen.
//!
//! Takes a directory of markdown content, a directory of static assets and
//! an HTML template, and produces a finished site:
//!
//! 1. Static assets are mirrored into the output directory.
//! 2. Every `.md` file under the content directory is rendered with
//!    [`sitegen_markdown`] and substituted into the template.
//! 3. Root-relative links are rewritten for the configured base path.
//!
//! [`SiteBuilder`] drives the whole pipeline; the other items are its
//! building blocks and are exported for callers that need finer control.

mod assets;
mod builder;
mod scanner;
mod template;

pub use assets::mirror_static;
pub use builder::{BuildConfig, BuildError, BuildSummary, SiteBuilder};
pub use template::{
    CONTENT_PLACEHOLDER, PageTemplate, TITLE_PLACEHOLDER, TemplateError, rewrite_root_links,
};
