use crate::selection::{Position, Range};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a host rejects an edit transaction.
///
/// A rejected transaction leaves the buffer untouched.
pub enum EditError {
    #[error("line {line} is out of bounds (document has {line_count} lines)")]
    /// An edit referenced a line past the end of the document.
    LineOutOfBounds {
        /// Offending line index.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    #[error("position {line}:{character} is past the end of its line")]
    /// An edit referenced a character past the end of its line.
    CharacterOutOfBounds {
        /// Line index.
        line: usize,
        /// Offending character offset.
        character: usize,
    },

    #[error("edits at {first:?} and {second:?} overlap")]
    /// Two edits in the same transaction cover shared text.
    Overlapping {
        /// Range of the earlier edit.
        first: Range,
        /// Range of the later edit.
        second: Range,
    },

    #[error("edit rejected by host: {0}")]
    /// The host refused the transaction for its own reasons (read-only buffer, stale version, ...).
    Rejected(String),
}

impl EditError {
    pub(crate) fn out_of_bounds(pos: Position, line_count: usize) -> Self {
        if pos.line >= line_count {
            Self::LineOutOfBounds {
                line: pos.line,
                line_count,
            }
        } else {
            Self::CharacterOutOfBounds {
                line: pos.line,
                character: pos.character,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reasons a change-case command did nothing.
///
/// Every variant guarantees that neither the buffer nor the selections were modified, so host
/// glue is free to drop the error silently.
pub enum CommandError {
    #[error("unknown transformation '{0}'")]
    /// No catalog record has this name.
    UnknownTransformation(String),

    #[error("no active editor")]
    /// The command was invoked without a text editor.
    NoActiveEditor,

    #[error(transparent)]
    /// The host did not commit the batch edit.
    Edit(#[from] EditError),
}
