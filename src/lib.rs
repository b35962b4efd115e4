//! xmlemit: build an XML element tree and encode it to bytes
//!
//! This crate provides functionality to:
//! - Describe elements with attributes, text or child elements
//! - Declare child lists with ordinary control flow through [`NodeBuilder`]
//! - Encode a [`Document`] into a buffer sized exactly once, up front
//!
//! The output is written verbatim: no escaping, no declaration, no whitespace.
//!
//! # Examples
//! ```
//! use xmlemit::{Document, EncodeOptions, Node};
//!
//! let document = Document::new(
//!     Node::build("config", |b| {
//!         b.node(Node::new("entry").with_attribute("key", "value"))
//!             .node(Node::text("note", "hello"))
//!     }),
//! );
//! let bytes = document.encoded_with(EncodeOptions::new().sort_attribute_keys(true));
//! assert_eq!(bytes, br#"<config><entry key="value"/><note>hello</note></config>"#);
//! ```

#![forbid(unsafe_code)]

use std::{fs::File, io::BufWriter, path::Path};
use tracing::{debug, info, instrument};

pub mod builder;
pub mod cli;
pub mod content;
pub mod document;
pub mod encoder;
pub mod error;
pub mod node;

// Re-exports
pub use builder::NodeBuilder;
pub use content::Content;
pub use document::Document;
pub use encoder::{capacity_of, EncodeOptions};
pub use error::{Error, Result};
pub use node::{Attributes, Node};

/// Encodes `document` and writes it to `path`, replacing any existing file.
///
/// # Panics
///
/// See [`Document::encoded_with`].
#[instrument(skip(document))]
pub fn write_file(path: &Path, document: &Document, options: EncodeOptions) -> Result<()> {
    debug!("Creating output file");
    let file = File::create(path)?;
    document.write_to(BufWriter::new(file), options)?;
    info!(bytes = document.encoded_len(), "Document written");
    Ok(())
}
