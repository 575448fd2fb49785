use std::io;
use thiserror::Error;

use cdhit_core::MemberLineError;

/// Error type for cdhit-io readers.
///
/// Running out of input is not an error: readers report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// IO error occurred while reading the source.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A member line does not follow the `.clstr` record grammar.
    #[error("Malformed member line at line {line}: {reason} ({text:?})")]
    MalformedMemberLine {
        line: usize,
        text: String,
        reason: MemberLineError,
    },

    /// Header/record sequencing is violated (empty group, misplaced header, truncated file).
    #[error("Parsing error at line {line}: {message}")]
    Structural { line: usize, message: String },

    /// A cluster has no member flagged as representative.
    #[error("Cluster '{label}' ending at line {line} has no representative sequence")]
    MissingRepresentative { label: String, line: usize },

    /// A cluster has more than one member flagged as representative.
    #[error("Cluster '{label}' ending at line {line} has {count} representative sequences")]
    MultipleRepresentatives {
        label: String,
        line: usize,
        count: usize,
    },
}

impl ReaderError {
    /// The 1-based line number the error was detected at, if it concerns a line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ReaderError::Io(_) => None,
            ReaderError::MalformedMemberLine { line, .. }
            | ReaderError::Structural { line, .. }
            | ReaderError::MissingRepresentative { line, .. }
            | ReaderError::MultipleRepresentatives { line, .. } => Some(*line),
        }
    }

    pub(crate) fn structural(line: usize, message: impl Into<String>) -> Self {
        ReaderError::Structural {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for cdhit-io operations.
pub type Result<T> = std::result::Result<T, ReaderError>;
