//! Selection reconciliation after a batch edit.
//!
//! The buffer edit is applied as one transaction over pre-edit coordinates, but each
//! [`ReplacementAction::new_range`] is still expressed as if its own edit were the only one.
//! Walking the actions left to right per line and carrying the accumulated width change
//! reproduces what sequential substitution would have done to later selections on that line.

use crate::batch::ReplacementAction;
use crate::selection::{Range, Selection, compare_by_end};
use std::collections::BTreeMap;

/// Accumulated character delta per original end line.
#[derive(Debug, Default)]
pub struct LineRunningOffsets {
    offsets: BTreeMap<usize, isize>,
}

impl LineRunningOffsets {
    /// One zeroed accumulator per distinct end line of `actions`.
    pub fn for_actions<'a>(actions: impl IntoIterator<Item = &'a ReplacementAction>) -> Self {
        let offsets = actions
            .into_iter()
            .map(|action| (action.original_range.end.line, 0))
            .collect();
        Self { offsets }
    }

    /// Current offset for `line` (0 for a line without accumulator).
    pub fn get(&self, line: usize) -> isize {
        self.offsets.get(&line).copied().unwrap_or(0)
    }

    /// Add `delta` to the accumulator of `line`.
    pub fn advance(&mut self, line: usize, delta: isize) {
        *self.offsets.entry(line).or_insert(0) += delta;
    }
}

/// Compute the final selections for a set of replacement actions.
///
/// Actions are ordered by the end of their `new_range` (line, then character; stable for ties).
/// Each action's `new_range` is shifted by the running offset of its original end line, then
/// that offset grows by the action's `length_delta`. The result is in that sorted order, which
/// is not necessarily the input order; callers should treat it as a set.
pub fn reconcile_selections(actions: &[ReplacementAction]) -> Vec<Selection> {
    let mut sorted: Vec<&ReplacementAction> = actions.iter().collect();
    sorted.sort_by(|a, b| compare_by_end(&a.new_range, &b.new_range));

    let mut running = LineRunningOffsets::for_actions(sorted.iter().copied());

    sorted
        .into_iter()
        .map(|action| {
            let line = action.original_range.end.line;
            let offset = running.get(line);
            let range = Range {
                start: action.new_range.start.shifted(offset),
                end: action.new_range.end.shifted(offset),
            };
            running.advance(line, action.length_delta);
            Selection::from_range(range)
        })
        .collect()
}
