//! Markdown to HTML rendering core.
//!
//! A hand-written transformation pipeline with no markdown library behind it:
//!
//! 1. [`tokenize`] splits raw text into typed inline spans ([`TextSpan`]),
//! 2. [`BlockType::classify`] types paragraph-level chunks,
//! 3. [`markdown_to_tree`] builds a polymorphic [`HtmlNode`] tree,
//! 4. [`HtmlNode::to_html`] serializes the tree to an HTML string.
//!
//! The crate performs no I/O and keeps no mutable state; rendering the same
//! document twice yields byte-identical output, so callers may render many
//! documents concurrently as long as each call gets its own input string.
//!
//! Span text is passed through verbatim. There is no HTML escaping at any
//! stage.
//!
//! # Example
//!
//! ```
//! use sitegen_markdown::markdown_to_html;
//!
//! let html = markdown_to_html("Hello **world**").unwrap();
//! assert_eq!(html, "<div><p>Hello <b>world</b></p></div>");
//! ```

mod block;
mod inline;
mod node;
mod render;
mod span;

pub use block::{BlockType, split_blocks};
pub use inline::tokenize;
pub use node::HtmlNode;
pub use render::{extract_title, markdown_to_html, markdown_to_tree};
pub use span::{SpanKind, TextSpan};

/// Error produced while rendering markdown to HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A delimiter pass found an unbalanced delimiter (an opening marker
    /// without its closing counterpart).
    #[error("invalid markdown syntax for delimiter '{0}'")]
    UnbalancedDelimiter(String),

    /// A leaf node reached serialization without a value.
    #[error("leaf node requires a value")]
    LeafWithoutValue,

    /// A parent node reached serialization without a tag.
    #[error("parent node requires a tag")]
    ParentWithoutTag,

    /// A parent node reached serialization without children.
    #[error("parent node requires children")]
    ParentWithoutChildren,

    /// The document contains no h1 heading to use as its title.
    #[error("document has no h1 heading to use as a title")]
    MissingTitle,
}
