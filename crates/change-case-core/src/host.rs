//! Host seam.
//!
//! The core never owns a text buffer. It reads from a [`TextDocument`], asks a [`TextEditor`] to
//! apply one atomic batch of [`BufferEdit`]s and then writes the reconciled selections back.
//! [`crate::Document`] and [`crate::MemoryEditor`] implement these traits for tests, benches
//! and the CLI.

use crate::error::EditError;
use crate::selection::{Position, Range, Selection};

/// One logical line as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    /// Line text without the line terminator.
    pub text: String,
    /// Length of `text` in characters.
    pub length: usize,
}

impl LineInfo {
    /// Build line info from line text (no trailing newline).
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self { text, length }
    }
}

/// A single replacement in a batch edit, expressed in pre-edit coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEdit {
    /// The replaced range.
    pub range: Range,
    /// Replacement text, inserted verbatim (line terminators included).
    pub new_text: String,
}

/// Read access to a text buffer.
pub trait TextDocument {
    /// Text covered by `range`, with the line terminators as they appear in the buffer.
    fn get_text(&self, range: Range) -> String;

    /// Number of logical lines (an empty document has one empty line).
    fn line_count(&self) -> usize;

    /// The line at `line`, or `None` if out of bounds.
    fn line_at(&self, line: usize) -> Option<LineInfo>;

    /// The host's ordinary word range at `position`, if any.
    fn word_range_at_position(&self, position: Position) -> Option<Range>;
}

/// An editor view over a document: selections plus the atomic edit primitive.
pub trait TextEditor {
    /// Document type shown by this editor.
    type Document: TextDocument;

    /// The document being edited.
    fn document(&self) -> &Self::Document;

    /// Current selections (at least one; a caret is an empty selection).
    fn selections(&self) -> Vec<Selection>;

    /// Replace the selection set.
    fn set_selections(&mut self, selections: Vec<Selection>);

    /// Apply every edit as one transaction over the pre-edit coordinate space.
    ///
    /// Returning `Ok` is the commit signal. On `Err` the buffer must be unchanged.
    fn perform_edit(&mut self, edits: Vec<BufferEdit>) -> Result<(), EditError>;
}
