use crate::{builder::NodeBuilder, node::Node};

/// What a [`Node`] holds between its tags.
///
/// Exactly one variant is active; an element cannot carry child elements and
/// text at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// No children and no text, encoded as a self-closing tag
    #[default]
    Empty,
    /// Child elements, encoded in the stored order
    Children(Vec<Node>),
    /// Raw character data, copied into the output without escaping
    Text(String),
}

impl Content {
    /// Returns `true` for [`Content::Empty`].
    ///
    /// An empty `Children` list or an empty `Text` is not `Empty`: both still
    /// produce an open and a close tag.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Node>> for Content {
    fn from(children: Vec<Node>) -> Self {
        Self::Children(children)
    }
}

impl From<NodeBuilder> for Content {
    fn from(builder: NodeBuilder) -> Self {
        Self::Children(builder.build())
    }
}
