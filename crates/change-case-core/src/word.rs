//! Word-span resolution for carets.
//!
//! A change-case "word" is broader than the host's ordinary word: identifiers joined by
//! dashes, slashes and dollar signs (and optionally dots) are converted as one unit, so
//! `bar-baz` or `foo.bar-baz` can be converted from a bare caret.

use crate::host::TextDocument;
use crate::selection::{Position, Range};
use regex::Regex;
use std::sync::LazyLock;

static WORD_CHAR_WITH_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-/$]$").expect("valid word-character class"));

static WORD_CHAR_WITHOUT_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_\-/$]$").expect("valid word-character class"));

/// Character class used when widening a host word range.
#[derive(Debug, Clone, Copy)]
pub struct WordCharClass {
    regex: &'static Regex,
}

impl WordCharClass {
    /// The class for the given dot policy.
    pub fn new(include_dot: bool) -> Self {
        let regex = if include_dot {
            &*WORD_CHAR_WITH_DOT
        } else {
            &*WORD_CHAR_WITHOUT_DOT
        };
        Self { regex }
    }

    /// Returns `true` if `ch` belongs to the class.
    pub fn matches(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(ch.encode_utf8(&mut buf))
    }
}

/// Resolve the change-case word around `position`.
///
/// Starts from the host's ordinary word range and widens it character by character in both
/// directions while characters match [`WordCharClass`]. Returns the degenerate range at
/// `position` when the host reports no word there.
///
/// The host word may contain any alphanumeric character, but widening only crosses the ASCII
/// class. Non-ASCII letters inside the host word are kept, while non-ASCII letters outside it
/// stop widening: in `é-foo` a caret on `foo` resolves to `-foo`.
pub fn resolve_word_span<D: TextDocument + ?Sized>(
    document: &D,
    position: Position,
    include_dot: bool,
) -> Range {
    let Some(word) = document.word_range_at_position(position) else {
        return Range::point(position);
    };
    let Some(line) = document.line_at(word.start.line) else {
        return Range::point(position);
    };

    let class = WordCharClass::new(include_dot);
    let chars: Vec<char> = line.text.chars().collect();
    let line_len = line.length.min(chars.len());

    let mut start = word.start.character.min(line_len);
    while start > 0 && class.matches(chars[start - 1]) {
        start -= 1;
    }

    let mut end = word.end.character.min(line_len);
    while end < line_len && class.matches(chars[end]) {
        end += 1;
    }

    tracing::trace!(
        line = word.start.line,
        start,
        end,
        include_dot,
        "Resolved change-case word span"
    );

    Range::new(
        Position::new(word.start.line, start),
        Position::new(word.end.line, end),
    )
}
