use crate::{
    encoder::{self, EncodeOptions},
    error::Result,
    node::Node,
};
use std::{fmt, io::Write};
use tracing::{debug, instrument, trace};

/// An XML document with exactly one root element.
///
/// Encoding never emits an XML declaration, a doctype or a trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root_node: Node,
}

impl Document {
    pub fn new(root_node: Node) -> Self {
        Self { root_node }
    }

    /// Builds the document from a closure producing the root node.
    ///
    /// ```
    /// use xmlemit::{Document, Node};
    ///
    /// let document = Document::build(|| {
    ///     Node::build("root", |b| b.node(Node::new("child1")).node(Node::new("child2")))
    /// });
    /// assert_eq!(document.encoded(), b"<root><child1/><child2/></root>");
    /// ```
    pub fn build(root: impl FnOnce() -> Node) -> Self {
        Self::new(root())
    }

    /// Encodes with default options.
    ///
    /// # Panics
    ///
    /// See [`Document::encoded_with`].
    pub fn encoded(&self) -> Vec<u8> {
        self.encoded_with(EncodeOptions::default())
    }

    /// Encodes the tree into a buffer allocated once, at its exact final size.
    ///
    /// # Panics
    ///
    /// Panics if the emitted byte count differs from the precomputed capacity.
    /// That can only happen through an encoder bug; the output is never
    /// truncated or padded to hide it.
    #[instrument(level = "debug", skip_all, fields(root = %self.root_node.name))]
    pub fn encoded_with(&self, options: EncodeOptions) -> Vec<u8> {
        let capacity = self.encoded_len();
        debug!(capacity, ?options, "computed encoded capacity");

        let mut output = Vec::with_capacity(capacity);
        let written = encoder::encode_into(&self.root_node, options, &mut output);
        trace!(written, "emitted document");

        assert_eq!(
            written, capacity,
            "encoded length does not match precomputed capacity"
        );
        output
    }

    /// Exact length in bytes of the encoded document.
    pub fn encoded_len(&self) -> usize {
        self.root_node.encoded_len()
    }

    /// Same bytes as [`Document::encoded_with`], as a `String`.
    ///
    /// # Panics
    ///
    /// See [`Document::encoded_with`].
    pub fn to_xml_string(&self, options: EncodeOptions) -> String {
        encoder::encode_to_string(&self.root_node, options)
    }

    /// Encodes and writes the whole document to `writer`.
    ///
    /// # Panics
    ///
    /// See [`Document::encoded_with`].
    pub fn write_to<W: Write>(&self, mut writer: W, options: EncodeOptions) -> Result<()> {
        writer.write_all(&self.encoded_with(options))?;
        writer.flush()?;
        Ok(())
    }
}

impl From<Node> for Document {
    fn from(root_node: Node) -> Self {
        Self::new(root_node)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root_node, f)
    }
}
