use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Input continues after the root scope was closed.
    TrailingInput,
    /// Input ended with `open` scopes still waiting for their `>`.
    UnclosedScope { open: usize },
}

impl Display for MalformedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::TrailingInput => write!(f, "input continues after the root was closed"),
            MalformedReason::UnclosedScope { open } => write!(f, "{} scope(s) left open", open),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed trie encoding at char {position}: {reason}")]
    MalformedEncoding {
        position: usize,
        reason: MalformedReason,
    },
    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
