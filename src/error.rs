//! Crate-level error types.

use std::fmt;

/// Errors produced by the nodeview crate.
#[derive(Debug)]
pub enum NodeviewError {
    /// HTTP transport failure while fetching the node list.
    Fetch(String),
    /// The node endpoint returned a body that is not the expected JSON
    /// shape.
    Malformed(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for NodeviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "node fetch error: {msg}"),
            Self::Malformed(msg) => {
                write!(f, "malformed node response: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for NodeviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NodeviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NodeviewError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}
