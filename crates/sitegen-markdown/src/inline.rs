//! Inline span tokenizer.
//!
//! Converts raw block text into a flat list of [`TextSpan`]s through a fixed
//! sequence of passes. Each pass re-examines only the plain spans produced so
//! far and hands every other span through untouched, so the pass order is the
//! precedence order:
//!
//! 1. newline split,
//! 2. `**` (bold), `_` (italic), `` ` `` (code) delimiter passes,
//! 3. image extraction, then link extraction.
//!
//! There is no nesting: a delimiter of another type inside an already typed
//! span stays literal text.

use std::sync::LazyLock;

use regex::Regex;

use crate::RenderError;
use crate::span::{SpanKind, TextSpan};

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Tokenize a block's text into typed inline spans.
///
/// # Errors
///
/// Returns [`RenderError::UnbalancedDelimiter`] when a `**`, `_` or `` ` ``
/// delimiter is opened but never closed.
///
/// # Example
///
/// ```
/// use sitegen_markdown::{SpanKind, tokenize};
///
/// let spans = tokenize("plain with a `code block` inside").unwrap();
/// assert_eq!(spans.len(), 3);
/// assert_eq!(spans[1].kind, SpanKind::Code);
/// assert_eq!(spans[1].text, "code block");
/// ```
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, RenderError> {
    let mut spans: Vec<TextSpan> = text.split('\n').map(TextSpan::plain).collect();
    spans = split_delimiter(spans, "**", SpanKind::Bold)?;
    spans = split_delimiter(spans, "_", SpanKind::Italic)?;
    spans = split_delimiter(spans, "`", SpanKind::Code)?;
    spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split plain spans on a delimiter, typing the delimited segments.
///
/// Splitting produces alternating outside/inside segments. An even segment
/// count means the final delimiter was never closed. Even-indexed segments
/// stay plain (empty ones are dropped), odd-indexed segments take `kind`
/// (kept even when empty).
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, RenderError> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain || !span.text.contains(delimiter) {
            result.push(span);
            continue;
        }
        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(RenderError::UnbalancedDelimiter(delimiter.to_owned()));
        }
        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 1 {
                result.push(TextSpan::new(kind, part));
            } else if !part.is_empty() {
                result.push(TextSpan::plain(part));
            }
        }
    }
    Ok(result)
}

/// Extract `![alt](url)` patterns from plain spans into image spans.
fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_targets(spans, &IMAGE_RE, false, |alt, url| TextSpan::image(alt, url))
}

/// Extract `[text](url)` patterns from plain spans into link spans.
///
/// A candidate directly preceded by `!` is an image pattern and is never
/// matched as a link.
fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_targets(spans, &LINK_RE, true, |text, url| TextSpan::link(text, url))
}

/// Shared scan for the image and link passes.
///
/// Walks each plain span left to right: text before a match becomes a plain
/// span when non-empty, the match becomes a span built by `make`, and the
/// scan resumes after it. Spans with no match (empty ones included) pass
/// through unchanged.
fn split_targets(
    spans: Vec<TextSpan>,
    pattern: &Regex,
    skip_bang_prefixed: bool,
    make: fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut result = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            result.push(span);
            continue;
        }
        let text = span.text.as_str();
        let mut cursor = 0;
        for caps in pattern.captures_iter(text) {
            let Some(found) = caps.get(0) else { continue };
            if skip_bang_prefixed
                && found.start() > 0
                && text.as_bytes()[found.start() - 1] == b'!'
            {
                continue;
            }
            if found.start() > cursor {
                result.push(TextSpan::plain(&text[cursor..found.start()]));
            }
            result.push(make(&caps[1], &caps[2]));
            cursor = found.end();
        }
        // cursor still at zero means nothing matched; keep the span as-is
        if cursor == 0 {
            result.push(span);
        } else if cursor < text.len() {
            result.push(TextSpan::plain(&text[cursor..]));
        }
    }
    result
}
