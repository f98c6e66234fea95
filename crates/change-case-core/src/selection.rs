//! Logical coordinates: positions, ranges and selections.
//!
//! All coordinates are zero-based. `character` counts Unicode scalar values (`char`s) within a
//! logical line, never bytes.

use std::cmp::Ordering;

/// Position coordinates (line and character offset within the line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based character offset within the logical line.
    pub character: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Returns this position moved by `delta` characters on the same line.
    ///
    /// Saturates at column 0.
    pub fn shifted(self, delta: isize) -> Self {
        Self {
            line: self.line,
            character: self.character.saturating_add_signed(delta),
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.character.cmp(&other.character))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A directionless span between two positions, with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Range {
    /// Create a range from two endpoints in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a degenerate range (a cursor) at `pos`.
    pub fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Shorthand for a range on a single line.
    pub fn on_line(line: usize, start_character: usize, end_character: usize) -> Self {
        Self::new(
            Position::new(line, start_character),
            Position::new(line, end_character),
        )
    }

    /// Returns `true` if the range is a cursor (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if both endpoints are on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Returns `true` if the two ranges share at least one character.
    ///
    /// Touching ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (anchor before active)
    Forward,
    /// Backward selection (active before anchor)
    Backward,
}

/// A user-visible selection: an anchor (fixed end) and an active end (the caret).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Position where the selection started.
    pub anchor: Position,
    /// Position of the caret.
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor to active.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A caret with no selected text.
    pub fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// A forward selection covering `range`.
    pub fn from_range(range: Range) -> Self {
        Self {
            anchor: range.start,
            active: range.end,
        }
    }

    /// The directionless span of this selection.
    pub fn range(&self) -> Range {
        Range::new(self.anchor, self.active)
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Returns `true` if both ends are on the same line.
    pub fn is_single_line(&self) -> bool {
        self.anchor.line == self.active.line
    }

    /// Direction of this selection.
    pub fn direction(&self) -> SelectionDirection {
        selection_direction(self.anchor, self.active)
    }
}

/// Direction implied by an anchor/active pair.
pub fn selection_direction(anchor: Position, active: Position) -> SelectionDirection {
    if anchor <= active {
        SelectionDirection::Forward
    } else {
        SelectionDirection::Backward
    }
}

/// Compare two ranges by end position (line, then character).
pub fn compare_by_end(a: &Range, b: &Range) -> Ordering {
    a.end.cmp(&b.end)
}
