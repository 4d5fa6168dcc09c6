//! Parse error types.

use alloc::string::String;
use thiserror::Error;

use crate::section::SectionKind;

/// Errors that can occur while decoding a quadtree dump.
///
/// Every error is fatal for the whole file, there is no mode that
/// skips bad lines. Line numbers are 1-based and refer to the original
/// text, comments included.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: `{kind}` header must be followed by a record count")]
    MalformedHeader { line: usize, kind: SectionKind },

    #[error("line {line}: malformed {kind} record: {reason}")]
    MalformedRecord {
        line: usize,
        kind: SectionKind,
        reason: RecordFault,
    },

    #[error(
        "line {line}: quadtree node {index} has non-positive scale {scale}"
    )]
    DegenerateGeometry {
        line: usize,
        index: usize,
        scale: f64,
    },
}

/// Why a single record line was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordFault {
    #[error("block declares {declared} records but only {available} lines follow")]
    Truncated { declared: usize, available: usize },

    #[error("expected {expected} comma-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("`{field}` is not a number")]
    InvalidNumber { field: String },

    #[error("`{field}` is not finite")]
    NonFinite { field: String },

    #[error("item count {value} is not a non-negative integer")]
    InvalidItemCount { value: f64 },
}

impl ParseError {
    /// The source line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedHeader { line, .. }
            | Self::MalformedRecord { line, .. }
            | Self::DegenerateGeometry { line, .. } => *line,
        }
    }
}
