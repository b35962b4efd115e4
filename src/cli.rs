//! Command-line surface of the `xmlemit` binary

use crate::{
    document::Document,
    encoder::EncodeOptions,
    error::{Error, Result},
    node::Node,
    write_file,
};
use clap::Parser;
use std::{io::Write, path::PathBuf};
use tracing::{info, instrument};

/// Encode a single XML element, optionally with text or empty child elements
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the root element
    pub name: String,

    /// Attribute of the root element, repeatable
    #[arg(short, long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
    pub attributes: Vec<(String, String)>,

    /// Raw text content of the root element
    #[arg(short, long, conflicts_with = "children")]
    pub text: Option<String>,

    /// Name of an empty child element, repeatable; kept in the given order
    #[arg(short, long = "child", value_name = "NAME")]
    pub children: Vec<String>,

    /// Emit attributes in ascending key order
    #[arg(long)]
    pub sort_attributes: bool,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> EncodeOptions {
        EncodeOptions::new().sort_attribute_keys(self.sort_attributes)
    }
}

/// Splits `KEY=VALUE` at the first `=`. The value may itself contain `=`.
pub fn parse_attribute(s: &str) -> Result<(String, String)> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| Error::InvalidAttribute(s.to_string()))
}

pub fn build_document(args: &Args) -> Result<Document> {
    let root = Node::new(args.name.as_str()).with_attributes(args.attributes.iter().cloned());

    let root = match (&args.text, args.children.is_empty()) {
        (Some(_), false) => return Err(Error::ConflictingContent),
        (Some(text), true) => root.with_content(text.as_str()),
        (None, false) => root.with_content(
            args.children
                .iter()
                .map(|name| Node::new(name.as_str()))
                .collect::<Vec<_>>(),
        ),
        (None, true) => root,
    };

    Ok(Document::new(root))
}

/// Builds the document described by `args` and writes it to the output file,
/// or to `stdout` when no file is given.
#[instrument(skip_all, fields(root = %args.name))]
pub fn run<W: Write>(args: &Args, mut stdout: W) -> Result<()> {
    let document = build_document(args)?;
    let options = args.options();

    if let Some(path) = &args.output {
        info!("Writing to {}", path.display());
        write_file(path, &document, options)
    } else {
        document.write_to(&mut stdout, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        assert_eq!(
            parse_attribute("key=value").ok(),
            Some(("key".to_string(), "value".to_string()))
        );
        assert_eq!(
            parse_attribute("expr=a=b").ok(),
            Some(("expr".to_string(), "a=b".to_string()))
        );
        assert_eq!(
            parse_attribute("=").ok(),
            Some((String::new(), String::new()))
        );
        assert!(matches!(
            parse_attribute("novalue"),
            Err(Error::InvalidAttribute(s)) if s == "novalue"
        ));
    }

    #[test]
    fn test_args_from_command_line() {
        let args = Args::try_parse_from([
            "xmlemit",
            "root",
            "-a",
            "b=2",
            "--attr",
            "a=1",
            "-c",
            "x",
            "--child",
            "y",
            "--sort-attributes",
        ]);
        let args = args.ok();
        assert!(args.is_some());
        if let Some(args) = args {
            assert_eq!(args.name, "root");
            assert_eq!(args.attributes.len(), 2);
            assert_eq!(args.children, ["x", "y"]);
            assert!(args.options().sort_attribute_keys);
        }
    }

    #[test]
    fn test_text_conflicts_with_children_on_command_line() {
        let args = Args::try_parse_from(["xmlemit", "root", "-t", "body", "-c", "x"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_build_document_rejects_text_and_children() {
        let args = Args {
            name: "root".to_string(),
            text: Some("body".to_string()),
            children: vec!["x".to_string()],
            ..Args::default()
        };
        assert!(matches!(
            build_document(&args),
            Err(Error::ConflictingContent)
        ));
    }

    #[test]
    fn test_run_to_stdout() -> Result<()> {
        let args = Args {
            name: "root".to_string(),
            attributes: vec![
                ("b".to_string(), "2".to_string()),
                ("a".to_string(), "1".to_string()),
            ],
            children: vec!["x".to_string(), "y".to_string()],
            sort_attributes: true,
            ..Args::default()
        };
        let mut out = Vec::new();
        run(&args, &mut out)?;
        assert_eq!(out, br#"<root a="1" b="2"><x/><y/></root>"#);
        Ok(())
    }
}
