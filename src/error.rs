//! Error types for xmlemit
//!
//! Building and encoding a tree cannot fail. Errors only come from writing
//! the output somewhere and from command-line input.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid attribute {0:?}: expected KEY=VALUE")]
    InvalidAttribute(String),

    #[error("an element cannot hold both text and child elements")]
    ConflictingContent,
}

/// Result type alias for xmlemit
pub type Result<T> = std::result::Result<T, Error>;
