//! Errors reported by buffer operations.
//!
//! Every mutating operation fails closed: when one of these is returned the
//! buffer is exactly as it was before the call.

use std::collections::TryReserveError;
use std::io;

pub type Result<T> = std::result::Result<T, EditError>;

#[derive(Debug)]
pub enum EditError {
    /// Growing a line or the line array failed.
    OutOfMemory,
    CursorOutOfRange { row: usize, col: usize },
    /// Line breaks go through `insert_newline`, never `insert_char`.
    InvalidByte(u8),
    AtDocumentStart,
    AtDocumentEnd,
    MarkingDisabled,
    EmptyMarking,
    Io(io::Error),
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::OutOfMemory => write!(f, "Out of memory"),
            EditError::CursorOutOfRange { row, col } => {
                write!(f, "Cursor out of range: ({}, {})", row, col)
            }
            EditError::InvalidByte(b) => write!(f, "Invalid byte for insert: 0x{:02x}", b),
            EditError::AtDocumentStart => write!(f, "Already at start of document"),
            EditError::AtDocumentEnd => write!(f, "Already at end of document"),
            EditError::MarkingDisabled => write!(f, "No marking"),
            EditError::EmptyMarking => write!(f, "Marking is empty"),
            EditError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EditError {
    fn from(e: io::Error) -> Self {
        EditError::Io(e)
    }
}

impl From<TryReserveError> for EditError {
    fn from(_: TryReserveError) -> Self {
        EditError::OutOfMemory
    }
}
