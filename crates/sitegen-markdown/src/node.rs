//! Polymorphic HTML node tree.
//!
//! Two node shapes cover the whole output model: a [`HtmlNode::Leaf`] holds
//! text (optionally wrapped in a tag), a [`HtmlNode::Parent`] holds child
//! nodes. Nodes are constructed permissively and checked when serialized, so
//! an incomplete node is only an error once [`HtmlNode::to_html`] reaches it.

use crate::RenderError;

/// A node in the rendered HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text content, optionally wrapped in a tag.
    Leaf {
        /// Wrapping tag. `None` serializes the value as raw text.
        tag: Option<String>,
        /// Text content. Required at serialization time.
        value: Option<String>,
        /// Attributes in serialization order.
        attrs: Vec<(String, String)>,
    },
    /// An element containing child nodes.
    Parent {
        /// Element tag. Required at serialization time.
        tag: Option<String>,
        /// Child nodes. Required at serialization time.
        children: Option<Vec<HtmlNode>>,
        /// Attributes carried in the model but never serialized.
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Create a raw text leaf (no tag).
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf without attributes.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    #[must_use]
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs,
        }
    }

    /// Create a parent element with the given children.
    #[must_use]
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attrs: Vec::new(),
        }
    }

    /// Serialize this node and its subtree to HTML.
    ///
    /// Leaves without a tag emit their value as-is; tagged leaves emit
    /// `<tag attrs>value</tag>`. Parents emit their tag around the
    /// concatenation of their children with no added whitespace. Values and
    /// attributes are emitted verbatim, without escaping.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::LeafWithoutValue`] for a leaf with no value,
    /// [`RenderError::ParentWithoutTag`] or
    /// [`RenderError::ParentWithoutChildren`] for an incomplete parent.
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            Self::Leaf { tag, value, attrs } => {
                let value = value.as_ref().ok_or(RenderError::LeafWithoutValue)?;
                match tag {
                    None => Ok(value.clone()),
                    Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs))),
                }
            }
            Self::Parent { tag, children, .. } => {
                let tag = tag.as_ref().ok_or(RenderError::ParentWithoutTag)?;
                let children = children.as_ref().ok_or(RenderError::ParentWithoutChildren)?;
                let mut html = format!("<{tag}>");
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str(&format!("</{tag}>"));
                Ok(html)
            }
        }
    }
}

/// Serialize attributes as ` name="value"` pairs in insertion order.
fn render_attrs(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}
