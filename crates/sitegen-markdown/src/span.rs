//! Typed inline spans.
//!
//! A [`TextSpan`] is the tokenizer's output unit: a run of text tagged with
//! the inline construct it belongs to. Spans are immutable value objects
//! compared structurally, which is what the tokenizer tests rely on.

use crate::node::HtmlNode;

/// Inline construct a span of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Raw text with no markup.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// A run of text tagged with its inline kind.
///
/// `url` is populated only for [`SpanKind::Link`] (the href target) and
/// [`SpanKind::Image`] (the src target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    /// Inline construct this span represents.
    pub kind: SpanKind,
    /// The span's text (alt text for images).
    pub text: String,
    /// Link or image target.
    pub url: Option<String>,
}

impl TextSpan {
    /// Create a span of the given kind with no url.
    #[must_use]
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    /// Create a plain text span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    /// Create a link span.
    #[must_use]
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// Create an image span.
    #[must_use]
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            url: Some(url.into()),
        }
    }

    /// Convert this span into its HTML leaf node.
    ///
    /// Plain text becomes an untagged leaf (serialized as raw text), styled
    /// spans map to `b`/`i`/`code`, links to `a href`, images to an `img`
    /// with empty value and `src`/`alt` attributes. A missing url renders as
    /// an empty attribute value.
    #[must_use]
    pub fn to_leaf(&self) -> HtmlNode {
        let url = || self.url.clone().unwrap_or_default();
        match self.kind {
            SpanKind::Plain => HtmlNode::text(&self.text),
            SpanKind::Bold => HtmlNode::leaf("b", &self.text),
            SpanKind::Italic => HtmlNode::leaf("i", &self.text),
            SpanKind::Code => HtmlNode::leaf("code", &self.text),
            SpanKind::Link => {
                HtmlNode::leaf_with_attrs("a", &self.text, vec![("href".to_owned(), url())])
            }
            SpanKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src".to_owned(), url()), ("alt".to_owned(), self.text.clone())],
            ),
        }
    }
}
