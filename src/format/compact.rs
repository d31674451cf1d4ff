//! Structure-aware blank-line compaction
//!
//! Single pass over the requested line range. Redundant blank lines are
//! queued for deletion on a stack of pending indices; block-continuation
//! lines (list, quote, block reference) grant the next blank a reprieve,
//! and a horizontal rule pops the most recent pending deletion so it never
//! ends up touching the content above it. Non-blank lines are never
//! deleted and lines are never reordered.

use crate::classify::{LineClass, StructureView};
use crate::util::text::is_blank;

/// Result of a compaction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactOutcome {
    /// Surviving lines, original order
    pub lines: Vec<String>,
    /// Indices (into the input) of the deleted blank lines, ascending
    pub removed: Vec<usize>,
}

/// Remove redundant blank lines in the inclusive range `[range_start,
/// range_end]`. Lines outside the range are copied verbatim.
///
/// Idempotent: no two adjacent blanks survive, and every surviving blank is
/// justified by an immediately preceding continuation line or horizontal
/// rule, so a second pass deletes nothing.
pub fn compact<S: AsRef<str>>(
    lines: &[S],
    structure: &impl StructureView,
    range_start: usize,
    range_end: usize,
) -> CompactOutcome {
    if lines.is_empty() {
        return CompactOutcome {
            lines: Vec::new(),
            removed: Vec::new(),
        };
    }

    let last = lines.len() - 1;
    let start = range_start.min(last);
    let mut end = range_end.min(last);

    // A continuation block just above the range keeps its separating blank
    let mut preserve_next_blank = start > 0 && structure.classify(start - 1).continues_block();

    // A non-blank line just past the range pulls the trailing blank run in
    if end < last && !is_blank(lines[end + 1].as_ref()) {
        end += 1;
    }

    let mut pending: Vec<usize> = Vec::new();
    for i in start..=end {
        if is_blank(lines[i].as_ref()) {
            if preserve_next_blank {
                // Exactly one blank survives per continuation
                preserve_next_blank = false;
            } else {
                pending.push(i);
            }
            continue;
        }

        let class = structure.classify(i);
        if class == LineClass::HorizontalRule && i > 0 && pending.last() == Some(&(i - 1)) {
            // An HR must stay separated from the content above it
            pending.pop();
        } else if class.continues_block() {
            preserve_next_blank = true;
        } else {
            preserve_next_blank = false;
        }
    }

    let mut kept = Vec::with_capacity(lines.len() - pending.len());
    let mut removed_iter = pending.iter().copied().peekable();
    for (i, line) in lines.iter().enumerate() {
        if removed_iter.peek() == Some(&i) {
            removed_iter.next();
            continue;
        }
        kept.push(line.as_ref().to_string());
    }

    tracing::debug!(removed = pending.len(), "blank-line compaction finished");
    CompactOutcome {
        lines: kept,
        removed: pending,
    }
}
