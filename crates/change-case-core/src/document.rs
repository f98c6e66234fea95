//! In-memory host: a rope-backed [`Document`] and a multi-selection [`MemoryEditor`].

use crate::error::EditError;
use crate::host::{BufferEdit, LineInfo, TextDocument, TextEditor};
use crate::line_index::LineIndex;
use crate::selection::{Position, Range, Selection};

/// Ordinary word characters for [`TextDocument::word_range_at_position`].
pub(crate) fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// A text document stored verbatim.
///
/// Lines end at LF, CRLF or a lone CR, and each line keeps its own terminator, so text outside
/// an edited range is never rewritten.
#[derive(Debug, Clone, Default)]
pub struct Document {
    index: LineIndex,
}

impl Document {
    /// Load a document.
    pub fn new(text: &str) -> Self {
        Self {
            index: LineIndex::from_text(text),
        }
    }

    /// Full text.
    pub fn text(&self) -> String {
        self.index.get_text()
    }

    /// Total character count, terminators included.
    pub fn char_count(&self) -> usize {
        self.index.char_count()
    }

    fn char_offset(&self, pos: Position) -> usize {
        self.index.position_to_char_offset(pos.line, pos.character)
    }

    fn checked_char_offset(&self, pos: Position) -> Result<usize, EditError> {
        match self.index.line_len(pos.line) {
            Some(len) if pos.character <= len => Ok(self.char_offset(pos)),
            _ => Err(EditError::out_of_bounds(pos, self.index.line_count())),
        }
    }
}

impl TextDocument for Document {
    fn get_text(&self, range: Range) -> String {
        let start = self.char_offset(range.start);
        let end = self.char_offset(range.end);
        self.index.slice(start, end)
    }

    fn line_count(&self) -> usize {
        self.index.line_count()
    }

    fn line_at(&self, line: usize) -> Option<LineInfo> {
        self.index.get_line_text(line).map(LineInfo::new)
    }

    fn word_range_at_position(&self, position: Position) -> Option<Range> {
        let chars: Vec<char> = self.index.get_line_text(position.line)?.chars().collect();
        let column = position.character;
        if column > chars.len() {
            return None;
        }

        let on_word = chars.get(column).is_some_and(|&ch| is_word_char(ch));
        let after_word = column > 0 && is_word_char(chars[column - 1]);
        if !on_word && !after_word {
            return None;
        }

        let mut start = column;
        while start > 0 && is_word_char(chars[start - 1]) {
            start -= 1;
        }
        let mut end = column;
        while end < chars.len() && is_word_char(chars[end]) {
            end += 1;
        }

        Some(Range::on_line(position.line, start, end))
    }
}

/// An editor over a [`Document`] with a multi-selection set and atomic batch edits.
#[derive(Debug, Clone)]
pub struct MemoryEditor {
    document: Document,
    selections: Vec<Selection>,
}

impl MemoryEditor {
    /// Create an editor with a single caret at the start of the document.
    pub fn new(text: &str) -> Self {
        Self {
            document: Document::new(text),
            selections: vec![Selection::caret(Position::default())],
        }
    }

    /// Replace the selection set (builder style).
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// Full text.
    pub fn text(&self) -> String {
        self.document.text()
    }
}

impl TextEditor for MemoryEditor {
    type Document = Document;

    fn document(&self) -> &Document {
        &self.document
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    fn perform_edit(&mut self, edits: Vec<BufferEdit>) -> Result<(), EditError> {
        struct Op {
            range: Range,
            start: usize,
            end: usize,
            text: String,
        }

        // Validate everything against the pre-edit document before touching it.
        let mut ops = Vec::with_capacity(edits.len());
        for edit in edits {
            let range = Range::new(edit.range.start, edit.range.end);
            let start = self.document.checked_char_offset(range.start)?;
            let end = self.document.checked_char_offset(range.end)?;
            ops.push(Op {
                range,
                start,
                end,
                text: edit.new_text,
            });
        }

        ops.sort_by_key(|op| (op.start, op.end));
        for pair in ops.windows(2) {
            if pair[0].range.overlaps(&pair[1].range) {
                return Err(EditError::Overlapping {
                    first: pair[0].range,
                    second: pair[1].range,
                });
            }
        }

        // Apply in descending offset order so earlier offsets stay valid.
        for op in ops.iter().rev() {
            self.document.index.delete(op.start, op.end - op.start);
            self.document.index.insert(op.start, &op.text);
        }

        Ok(())
    }
}
