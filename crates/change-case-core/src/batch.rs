//! Multi-selection batch conversion.
//!
//! A conversion runs in two phases:
//!
//! 1. **Compute**: every selection is resolved to a `(text, range)` pair against the pre-edit
//!    document and turned into a [`ReplacementAction`].
//! 2. **Commit and reconcile**: all changed actions are handed to the host as one atomic edit.
//!    Only once the host commits are the new selections computed
//!    ([`crate::reconcile_selections`]) and written back.
//!
//! If the host rejects the edit, nothing is written back.

use crate::error::EditError;
use crate::host::{BufferEdit, TextDocument, TextEditor};
use crate::reconcile::reconcile_selections;
use crate::selection::{Position, Range, Selection};
use crate::transform::apply_transformation;
use crate::word::resolve_word_span;

/// Text and range a selection converts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Text covered by `range` (empty for a cursor with no word).
    pub text: String,
    /// Range that will be replaced.
    pub range: Range,
}

/// Everything known about one selection's replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementAction {
    /// Text before conversion.
    pub original_text: String,
    /// Range of `original_text` in the pre-edit document.
    pub original_range: Range,
    /// Converted text.
    pub replacement_text: String,
    /// Length change of the range's last line, in characters.
    pub length_delta: isize,
    /// Range the converted text occupies, ignoring other edits on the same line.
    pub new_range: Range,
}

impl ReplacementAction {
    /// Build an action, deriving `new_range`.
    ///
    /// A cursor keeps its range; anything else keeps its start and moves its end character by
    /// `length_delta`.
    pub fn new(
        original_text: String,
        original_range: Range,
        replacement_text: String,
        length_delta: isize,
    ) -> Self {
        let new_range = if original_range.is_empty() {
            original_range
        } else {
            Range {
                start: original_range.start,
                end: original_range.end.shifted(length_delta),
            }
        };

        Self {
            original_text,
            original_range,
            replacement_text,
            length_delta,
            new_range,
        }
    }

    /// Returns `true` if the conversion left the text unchanged.
    pub fn is_noop(&self) -> bool {
        self.replacement_text == self.original_text
    }

    /// The buffer edit for this action.
    pub fn to_buffer_edit(&self) -> BufferEdit {
        BufferEdit {
            range: self.original_range,
            new_text: self.replacement_text.clone(),
        }
    }
}

/// Clamp a position into `document`.
pub fn clamp_position<D: TextDocument + ?Sized>(document: &D, pos: Position) -> Position {
    let last_line = document.line_count().saturating_sub(1);
    let line = pos.line.min(last_line);
    let line_len = document.line_at(line).map_or(0, |info| info.length);
    Position::new(line, pos.character.min(line_len))
}

/// Resolve the text and range a selection converts.
///
/// A caret expands to the change-case word around it (see [`resolve_word_span`]); any other
/// selection converts exactly its directionless range. Out-of-bounds endpoints are clamped.
pub fn extract_text<D: TextDocument + ?Sized>(
    selection: &Selection,
    document: &D,
    include_dot: bool,
) -> Extracted {
    let selected = selection.range();
    let selected = Range::new(
        clamp_position(document, selected.start),
        clamp_position(document, selected.end),
    );

    let range = if selected.is_empty() {
        resolve_word_span(document, selected.end, include_dot)
    } else {
        selected
    };

    let text = if range.is_empty() {
        String::new()
    } else {
        document.get_text(range)
    };

    Extracted { text, range }
}

/// Compute one [`ReplacementAction`] per selection, in input order.
pub fn build_replacement_actions<D, F>(
    selections: &[Selection],
    document: &D,
    transform: &F,
    include_dot: bool,
) -> Vec<ReplacementAction>
where
    D: TextDocument + ?Sized,
    F: Fn(&str) -> String + ?Sized,
{
    selections
        .iter()
        .map(|selection| {
            let Extracted { text, range } = extract_text(selection, document, include_dot);
            let transformed = apply_transformation(&text, range, transform);
            let action = ReplacementAction::new(
                text,
                range,
                transformed.replacement,
                transformed.length_delta,
            );
            tracing::trace!(
                range = ?action.original_range,
                new_range = ?action.new_range,
                length_delta = action.length_delta,
                noop = action.is_noop(),
                "Computed replacement"
            );
            action
        })
        .collect()
}

/// Convert every selection of `editor` with `transform` as one atomic edit.
///
/// On success the editor's selections are replaced by the reconciled ones, which are also
/// returned. If the host rejects the edit the error is returned and the selections are left
/// exactly as they were.
pub fn apply_batch<E, F>(
    editor: &mut E,
    transform: &F,
    include_dot: bool,
) -> Result<Vec<Selection>, EditError>
where
    E: TextEditor + ?Sized,
    F: Fn(&str) -> String + ?Sized,
{
    let selections = editor.selections();
    let actions = build_replacement_actions(&selections, editor.document(), transform, include_dot);

    let edits: Vec<BufferEdit> = actions
        .iter()
        .filter(|action| !action.is_noop())
        .map(ReplacementAction::to_buffer_edit)
        .collect();

    if !edits.is_empty() {
        let edit_count = edits.len();
        if let Err(err) = editor.perform_edit(edits) {
            tracing::warn!(%err, edit_count, "Host rejected change-case edit");
            return Err(err);
        }
    }

    let reconciled = reconcile_selections(&actions);
    editor.set_selections(reconciled.clone());
    Ok(reconciled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, MemoryEditor};
    use pretty_assertions::assert_eq;

    fn upper(text: &str) -> String {
        text.to_uppercase()
    }

    #[test]
    fn test_extract_caret_expands_to_word() {
        let doc = Document::new("call my-function(now)");
        let extracted = extract_text(&Selection::caret(Position::new(0, 8)), &doc, false);
        assert_eq!(extracted.text, "my-function");
        assert_eq!(extracted.range, Range::on_line(0, 5, 16));
    }

    #[test]
    fn test_extract_caret_without_word_is_empty() {
        let doc = Document::new("a + b");
        let caret = Selection::caret(Position::new(0, 2));
        let extracted = extract_text(&caret, &doc, false);
        assert_eq!(extracted.text, "");
        assert_eq!(extracted.range, Range::point(Position::new(0, 2)));
    }

    #[test]
    fn test_extract_backward_selection_is_directionless() {
        let doc = Document::new("hello world");
        let sel = Selection::new(Position::new(0, 11), Position::new(0, 6));
        let extracted = extract_text(&sel, &doc, false);
        assert_eq!(extracted.text, "world");
        assert_eq!(extracted.range, Range::on_line(0, 6, 11));
    }

    #[test]
    fn test_extract_clamps_out_of_bounds_selection() {
        let doc = Document::new("abc\ndef");
        let sel = Selection::new(Position::new(1, 1), Position::new(7, 40));
        let extracted = extract_text(&sel, &doc, false);
        assert_eq!(extracted.range, Range::on_line(1, 1, 3));
        assert_eq!(extracted.text, "ef");
    }

    #[test]
    fn test_new_range_for_cursor_and_selection() {
        let cursor = Range::point(Position::new(1, 4));
        assert_eq!(
            ReplacementAction::new(String::new(), cursor, String::new(), 0).new_range,
            cursor
        );

        let selected = Range::on_line(1, 4, 10);
        let action = ReplacementAction::new("fooBar".into(), selected, "foo_bar".into(), 1);
        assert_eq!(action.new_range, Range::on_line(1, 4, 11));
    }

    #[test]
    fn test_apply_batch_single_selection() {
        let mut editor = MemoryEditor::new("say hello").with_selections(vec![Selection::new(
            Position::new(0, 4),
            Position::new(0, 9),
        )]);

        let selections = apply_batch(&mut editor, &upper, false).unwrap();

        assert_eq!(editor.text(), "say HELLO");
        assert_eq!(selections, vec![Selection::from_range(Range::on_line(0, 4, 9))]);
        assert_eq!(editor.selections(), selections);
    }

    #[test]
    fn test_apply_batch_noop_skips_edit() {
        struct CountingEditor {
            inner: MemoryEditor,
            edits: usize,
        }

        impl TextEditor for CountingEditor {
            type Document = Document;
            fn document(&self) -> &Document {
                self.inner.document()
            }
            fn selections(&self) -> Vec<Selection> {
                self.inner.selections()
            }
            fn set_selections(&mut self, selections: Vec<Selection>) {
                self.inner.set_selections(selections)
            }
            fn perform_edit(&mut self, edits: Vec<BufferEdit>) -> Result<(), EditError> {
                self.edits += 1;
                self.inner.perform_edit(edits)
            }
        }

        let mut editor = CountingEditor {
            inner: MemoryEditor::new("ALREADY UPPER").with_selections(vec![Selection::new(
                Position::new(0, 0),
                Position::new(0, 7),
            )]),
            edits: 0,
        };

        let selections = apply_batch(&mut editor, &upper, false).unwrap();

        assert_eq!(editor.edits, 0);
        assert_eq!(editor.inner.text(), "ALREADY UPPER");
        assert_eq!(selections, vec![Selection::from_range(Range::on_line(0, 0, 7))]);
    }
}
