use std::{io, num::ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Grid access outside `[0, cols) x [0, rows)`
    #[error("position ({x}, {y}) is outside grid boundaries")]
    OutOfBounds { x: isize, y: isize },

    /// The requested node subset contains a cycle
    #[error("cycle detected: ordered {sorted} of {total} nodes")]
    CycleDetected { sorted: usize, total: usize },

    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot parse line {line:?}")]
    Malformed { line: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid integer: {0}")]
    ParseInt(#[from] ParseIntError),

    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed<S: Into<String>>(line: S) -> Self {
        Error::Malformed { line: line.into() }
    }
}
