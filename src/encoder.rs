//! Two-pass encoding of a [`Node`] tree.
//!
//! The capacity pass and the emission pass are the same traversal run into
//! different sinks: [`capacity_of`] walks into a byte counter, the emitters
//! walk into a buffer reserved with exactly that many bytes. Because both
//! passes share every branch, they cannot disagree on punctuation.
//!
//! Output layout:
//!
//! | Content    | Bytes                                   |
//! |------------|-----------------------------------------|
//! | `Empty`    | `<name k="v"/>`                         |
//! | `Children` | `<name k="v">` children `</name>`       |
//! | `Text`     | `<name k="v">` text `</name>`           |
//!
//! No declaration, whitespace, newlines or escaping is ever added.

mod options;
mod sink;

pub use self::options::EncodeOptions;
use self::sink::{Measure, Sink};

use crate::{
    content::Content,
    node::{Attributes, Node},
};

/// Exact encoded byte length of `node` and its subtree.
///
/// Attribute order does not change the total, so no options are needed.
pub fn capacity_of(node: &Node) -> usize {
    let mut measure = Measure::default();
    walk(node, EncodeOptions::default(), &mut measure);
    measure.0
}

/// Appends the encoding of `node` to `buf` and returns the number of bytes
/// written.
pub(crate) fn encode_into(node: &Node, options: EncodeOptions, buf: &mut Vec<u8>) -> usize {
    let start = buf.len();
    walk(node, options, buf);
    buf.len() - start
}

/// Encodes `node` into a string reserved to its exact capacity.
///
/// # Panics
///
/// Panics if the emitted length differs from [`capacity_of`], which means the
/// two passes are out of sync.
pub(crate) fn encode_to_string(node: &Node, options: EncodeOptions) -> String {
    let capacity = capacity_of(node);
    let mut out = String::with_capacity(capacity);
    walk(node, options, &mut out);
    assert_eq!(
        out.len(),
        capacity,
        "encoded length does not match precomputed capacity"
    );
    out
}

fn walk<S: Sink>(node: &Node, options: EncodeOptions, sink: &mut S) {
    sink.put("<");
    sink.put(&node.name);
    walk_attributes(&node.attributes, options, sink);

    match &node.content {
        Content::Empty => sink.put("/>"),
        Content::Children(children) => {
            sink.put(">");
            for child in children {
                walk(child, options, sink);
            }
            close_tag(&node.name, sink);
        }
        Content::Text(text) => {
            sink.put(">");
            sink.put(text);
            close_tag(&node.name, sink);
        }
    }
}

fn walk_attributes<S: Sink>(attributes: &Attributes, options: EncodeOptions, sink: &mut S) {
    if options.sort_attribute_keys {
        let mut entries: Vec<(&String, &String)> = attributes.iter().collect();
        entries.sort_by_key(|(k, _)| *k);
        for (key, value) in entries {
            attribute(key, value, sink);
        }
    } else {
        for (key, value) in attributes {
            attribute(key, value, sink);
        }
    }
}

#[inline]
fn attribute<S: Sink>(key: &str, value: &str, sink: &mut S) {
    sink.put(" ");
    sink.put(key);
    sink.put("=\"");
    sink.put(value);
    sink.put("\"");
}

#[inline]
fn close_tag<S: Sink>(name: &str, sink: &mut S) {
    sink.put("</");
    sink.put(name);
    sink.put(">");
}
