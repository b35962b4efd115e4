#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlemit::{Content, Document, EncodeOptions, Node};

/// Builds a tree from `\0`-separated fields: each field becomes a node whose
/// first byte picks the shape, the rest is its name, attribute or text.
fn tree_from(input: &str) -> Node {
    let mut stack = vec![Node::new("root")];
    for field in input.split('\0') {
        let mut chars = field.chars();
        let shape = chars.next().unwrap_or(' ');
        let rest = chars.as_str();
        match shape {
            'o' => stack.push(Node::parent(rest, Vec::new())),
            'c' if stack.len() > 1 => {
                if let Some(done) = stack.pop() {
                    append(&mut stack, done);
                }
            }
            'a' => {
                let (key, value) = rest.split_once('=').unwrap_or((rest, ""));
                if let Some(top) = stack.last_mut() {
                    top.attributes.insert(key.to_string(), value.to_string());
                }
            }
            't' => append(&mut stack, Node::text("t", rest)),
            _ => append(&mut stack, Node::new(rest)),
        }
    }
    while stack.len() > 1 {
        if let Some(done) = stack.pop() {
            append(&mut stack, done);
        }
    }
    stack.pop().unwrap_or_else(|| Node::new("root"))
}

fn append(stack: &mut [Node], node: Node) {
    if let Some(top) = stack.last_mut() {
        match &mut top.content {
            Content::Children(children) => children.push(node),
            content => *content = Content::Children(vec![node]),
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let document = Document::new(tree_from(s));
        for sort in [false, true] {
            let bytes = document.encoded_with(EncodeOptions::new().sort_attribute_keys(sort));
            assert_eq!(bytes.len(), document.encoded_len());
        }
    }
});
