#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

use clap::Parser;
use std::fs;
use xmlemit::{
    cli::{run, Args},
    write_file, Document, EncodeOptions, Error, Node,
};

#[test]
fn test_run_text_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["xmlemit", "note", "-t", "a & b"])?;
    let mut out = Vec::new();
    run(&args, &mut out)?;
    assert_eq!(out, b"<note>a & b</note>");
    Ok(())
}

#[test]
fn test_run_bare_element() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["xmlemit", "root"])?;
    let mut out = Vec::new();
    run(&args, &mut out)?;
    assert_eq!(out, b"<root/>");
    Ok(())
}

#[test]
fn test_invalid_attribute_is_rejected() {
    let err = Args::try_parse_from(["xmlemit", "root", "-a", "missing-equals"]).unwrap_err();
    assert!(err.to_string().contains("expected KEY=VALUE"));
}

#[test]
fn test_run_writes_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.xml");
    let args = Args::try_parse_from([
        "xmlemit",
        "list",
        "-c",
        "first",
        "-c",
        "second",
        "-o",
        path.to_str().unwrap(),
    ])?;

    let mut stdout = Vec::new();
    run(&args, &mut stdout)?;

    assert!(stdout.is_empty());
    assert_eq!(fs::read(&path)?, b"<list><first/><second/></list>");
    Ok(())
}

#[test]
fn test_write_file_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("doc.xml");
    fs::write(&path, "previous contents that are longer")?;

    let document = Document::new(Node::new("a").with_attributes([("y", "2"), ("x", "1")]));
    write_file(&path, &document, EncodeOptions::new().sort_attribute_keys(true))?;

    assert_eq!(fs::read_to_string(&path)?, r#"<a x="1" y="2"/>"#);
    Ok(())
}

#[test]
fn test_write_file_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("doc.xml");
    let result = write_file(&path, &Document::new(Node::new("a")), EncodeOptions::default());
    assert!(matches!(result, Err(Error::Io(_))));
}
