//! Rope-backed logical line index.
//!
//! Provides O(log N) conversion between `(line, character)` positions and character offsets,
//! plus the slice/insert/delete primitives the in-memory document is built on. Text is kept
//! verbatim; lines break at LF, CRLF and lone CR (ropey's `cr_lines`), and line lengths exclude
//! the terminator.

use crate::line_ending::LineEnding;
use ropey::Rope;

/// Logical line index over verbatim text.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty index (one empty line).
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count. An empty text has one line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Character length of `line` excluding its terminator, or `None` if out of bounds.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        let text = self.line_with_terminator(line)?;
        let terminator = LineEnding::trailing(&text).map_or(0, LineEnding::char_len);
        Some(text.chars().count() - terminator)
    }

    /// Text of `line` excluding its terminator.
    pub fn get_line_text(&self, line: usize) -> Option<String> {
        let mut text = self.line_with_terminator(line)?;
        if let Some(ending) = LineEnding::trailing(&text) {
            text.truncate(text.len() - ending.as_str().len());
        }
        Some(text)
    }

    fn line_with_terminator(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        Some(self.rope.line(line).to_string())
    }

    /// Character offset of `(line, character)`.
    ///
    /// The line is clamped to the last line and the character to the line length.
    pub fn position_to_char_offset(&self, line: usize, character: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(line);
        let line_len = self.line_len(line).unwrap_or(0);
        line_start + character.min(line_len)
    }

    /// Text between two character offsets (half-open, clamped).
    pub fn slice(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at a character offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let char_offset = char_offset.min(self.rope.len_chars());
        self.rope.insert(char_offset, text);
    }

    /// Delete `len_chars` characters starting at `start_char`.
    pub fn delete(&mut self, start_char: usize, len_chars: usize) {
        let start_char = start_char.min(self.rope.len_chars());
        let end_char = (start_char + len_chars).min(self.rope.len_chars());

        if start_char < end_char {
            self.rope.remove(start_char..end_char);
        }
    }

    /// Complete text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index_has_one_line() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_len(0), Some(0));
        assert_eq!(index.char_count(), 0);
    }

    #[test]
    fn test_line_len_excludes_newline() {
        let index = LineIndex::from_text("ABC\nDEFG\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_len(0), Some(3));
        assert_eq!(index.line_len(1), Some(4));
        assert_eq!(index.line_len(2), Some(0));
        assert_eq!(index.line_len(3), None);
    }

    #[test]
    fn test_mixed_terminators_are_excluded_from_lines() {
        let index = LineIndex::from_text("ab\r\ncd\ref\ngh");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_len(0), Some(2));
        assert_eq!(index.line_len(1), Some(2));
        assert_eq!(index.get_line_text(0).as_deref(), Some("ab"));
        assert_eq!(index.get_line_text(1).as_deref(), Some("cd"));
        assert_eq!(index.get_line_text(2).as_deref(), Some("ef"));
        assert_eq!(index.get_line_text(3).as_deref(), Some("gh"));
        assert_eq!(index.position_to_char_offset(0, 99), 2);
        assert_eq!(index.position_to_char_offset(2, 0), 7);
        assert_eq!(index.slice(0, 7), "ab\r\ncd\r");
    }

    #[test]
    fn test_unicode_separators_are_line_content() {
        let index = LineIndex::from_text("a\u{2028}b\u{85}c");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_len(0), Some(5));
    }

    #[test]
    fn test_position_to_offset() {
        let index = LineIndex::from_text("ABC\nDEF\nGHI");

        assert_eq!(index.position_to_char_offset(1, 0), 4);
        assert_eq!(index.position_to_char_offset(2, 2), 10);
        assert_eq!(index.slice(4, 10), "DEF\nGH");
    }

    #[test]
    fn test_position_clamps_character_to_line() {
        let index = LineIndex::from_text("AB\nCD");
        assert_eq!(index.position_to_char_offset(0, 99), 2);
        assert_eq!(index.position_to_char_offset(99, 0), 5);
    }

    #[test]
    fn test_cjk_offsets_count_chars() {
        let index = LineIndex::from_text("你好\n世界");

        assert_eq!(index.char_count(), 5);
        assert_eq!(index.position_to_char_offset(1, 1), 4);
        assert_eq!(index.slice(0, 2), "你好");
    }

    #[test]
    fn test_insert_and_delete() {
        let mut index = LineIndex::from_text("Hello World");

        index.insert(6, "Beautiful ");
        assert_eq!(index.get_text(), "Hello Beautiful World");

        index.delete(6, 10);
        assert_eq!(index.get_text(), "Hello World");
    }
}
