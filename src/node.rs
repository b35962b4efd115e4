use crate::{
    builder::NodeBuilder,
    content::Content,
    encoder::{self, EncodeOptions},
};
use std::{collections::HashMap, fmt};

/// Attribute map of a node.
///
/// Iteration order is whatever the map yields and may differ between two maps
/// holding the same pairs. Use [`EncodeOptions::sort_attribute_keys`] when the
/// output has to be stable.
pub type Attributes = HashMap<String, String>;

/// A single XML element.
///
/// Names, attribute keys, attribute values and text are stored and encoded
/// verbatim. Nothing is validated or escaped, so a value holding `"` or a text
/// holding `<` produces malformed XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name. Expected to be non-empty
    pub name: String,
    pub attributes: Attributes,
    pub content: Content,
}

impl Node {
    /// Element without attributes or content: `<name/>`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            content: Content::Empty,
        }
    }

    /// Element holding raw text: `<name>text</name>`
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_content(Content::Text(text.into()))
    }

    /// Element holding `children` in iteration order.
    pub fn parent(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self::new(name).with_content(Content::Children(children.into_iter().collect()))
    }

    /// Element whose children are declared through a [`NodeBuilder`].
    ///
    /// ```
    /// use xmlemit::Node;
    ///
    /// let verbose = false;
    /// let node = Node::build("parent", |b| {
    ///     b.node(Node::new("child"))
    ///         .node_if(verbose, || Node::new("debug"))
    ///         .nodes((0..2).map(|i| Node::new(format!("item{i}"))))
    /// });
    /// assert_eq!(node.to_string(), "<parent><child/><item0/><item1/></parent>");
    /// ```
    pub fn build(name: impl Into<String>, f: impl FnOnce(NodeBuilder) -> NodeBuilder) -> Self {
        Self::new(name).with_content(f(NodeBuilder::new()))
    }

    /// Sets one attribute, replacing an existing value for the same key.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replaces the whole attribute map.
    #[must_use]
    pub fn with_attributes<K, V>(mut self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    /// Child elements, or an empty slice unless the content is `Children`.
    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Children(children) => children,
            Content::Empty | Content::Text(_) => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Empty | Content::Children(_) => None,
        }
    }

    /// Exact number of bytes this element and its subtree encode to.
    ///
    /// Independent of [`EncodeOptions`]: sorting only reorders attributes.
    pub fn encoded_len(&self) -> usize {
        encoder::capacity_of(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::encode_to_string(self, EncodeOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_attributes_or_content() {
        let node = Node::new("node");
        assert_eq!(node.name, "node");
        assert!(node.attributes.is_empty());
        assert_eq!(node.content, Content::Empty);
    }

    #[test]
    fn test_with_attribute_replaces_same_key() {
        let node = Node::new("node")
            .with_attribute("key", "old")
            .with_attribute("key", "new");
        assert_eq!(node.attributes.len(), 1);
        assert_eq!(node.attributes.get("key").map(String::as_str), Some("new"));
    }

    #[test]
    fn test_with_attributes_replaces_map() {
        let node = Node::new("node")
            .with_attribute("gone", "x")
            .with_attributes([("a", "1"), ("b", "2")]);
        assert_eq!(node.attributes.len(), 2);
        assert!(!node.attributes.contains_key("gone"));
    }

    #[test]
    fn test_accessors() {
        let text = Node::text("t", "body");
        assert_eq!(text.text_content(), Some("body"));
        assert!(text.children().is_empty());

        let parent = Node::parent("p", [Node::new("c")]);
        assert_eq!(parent.text_content(), None);
        assert_eq!(parent.children().len(), 1);
    }

    #[test]
    fn test_empty_name_is_accepted() {
        assert_eq!(Node::new("").to_string(), "</>");
    }

    #[test]
    fn test_display_matches_encoded_len() {
        let node = Node::parent("a", [Node::text("b", "c")]).with_attribute("k", "v");
        let shown = node.to_string();
        assert_eq!(shown, r#"<a k="v"><b>c</b></a>"#);
        assert_eq!(shown.len(), node.encoded_len());
    }
}
