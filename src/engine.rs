//! Engine facade: rule dispatch plus document-scope formatting commands
//!
//! Single-threaded and synchronous; every operation completes within one
//! host callback. Rule matching never touches the structural snapshot, so
//! it is never blocked by the host's parser. Document-scope operations
//! abort up front when the snapshot is not ready.

use ropey::Rope;

use crate::classify::StructureView;
use crate::config::RuleConfig;
use crate::error::EngineError;
use crate::event::{EditEvent, EditIntent, EditKind};
use crate::format::{compact, reformat_document, reformat_range, LineFormatter};
use crate::rules::{
    expand_convert, expand_delete, match_convert, match_delete, synthesize_convert,
    synthesize_delete, RuleStore,
};
use crate::util::text::{char_len, prefix_chars, suffix_chars};

/// Cursor position as `(line, column)` in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocPosition {
    pub line: usize,
    pub column: usize,
}

impl DocPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Host selection; `anchor == head` means a bare cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSelection {
    pub anchor: DocPosition,
    pub head: DocPosition,
}

impl DocSelection {
    pub fn cursor(position: DocPosition) -> Self {
        Self {
            anchor: position,
            head: position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// New document text and selection produced by a formatting command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOutcome {
    pub text: String,
    pub selection: DocSelection,
}

/// The transformation engine: owns the active rule sets and exposes the
/// edit-time and document-scope entry points
#[derive(Debug, Default)]
pub struct Engine {
    store: RuleStore,
    config: RuleConfig,
}

impl Engine {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            store: RuleStore::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Swap in a new configuration; the rule sets rebuild wholesale
    pub fn set_config(&mut self, config: RuleConfig) {
        self.store.refresh(&config);
        self.config = config;
    }

    /// Dispatch one host edit through the rules.
    ///
    /// Pure: no match means None and the host's default behavior proceeds.
    pub fn on_edit(&self, event: &EditEvent) -> Option<EditIntent> {
        match event.kind {
            EditKind::DeleteBackward => {
                let m = match_delete(event, self.store.delete_rules())?;
                let (left, right) = expand_delete(m.rule, &m.matched_left, &m.matched_right);
                Some(synthesize_delete(&m, &left, &right, event.point))
            }
            EditKind::InsertChar | EditKind::InsertCompose => {
                let rule = match_convert(event, self.store.convert_rules())?;
                let left_window = suffix_chars(&event.left, rule.before.left.char_len());
                let right_window = prefix_chars(&event.right, rule.before.right.char_len());
                let (left, right) = expand_convert(rule, left_window, right_window);
                Some(synthesize_convert(rule, &left, &right, event.point))
            }
        }
    }

    /// Reformat the whole document, mapping the cursor through the active
    /// line's delegate result. Aborts when the structural snapshot is not
    /// ready.
    pub fn format_document(
        &self,
        doc: &Rope,
        structure: &impl StructureView,
        formatter: &mut impl LineFormatter,
        cursor: DocPosition,
    ) -> Result<FormatOutcome, EngineError> {
        if !structure.is_ready() {
            return Err(EngineError::StructureUnavailable);
        }

        let lines = doc_lines(doc);
        let outcome = reformat_document(&lines, structure, formatter, cursor.line, cursor.column);
        let column = outcome.cursor_column.unwrap_or(cursor.column);

        Ok(FormatOutcome {
            text: outcome.lines.join("\n"),
            selection: DocSelection::cursor(DocPosition::new(cursor.line, column)),
        })
    }

    /// Reformat the selected line span, or the cursor's line when nothing
    /// is selected.
    ///
    /// A multi-line selection expands to the full reformatted line span; a
    /// bare cursor collapses to the delegate's mapped column. Never depends
    /// on snapshot readiness: unclassified lines simply pass through.
    pub fn format_selection_or_line(
        &self,
        doc: &Rope,
        structure: &impl StructureView,
        formatter: &mut impl LineFormatter,
        selection: DocSelection,
    ) -> Result<FormatOutcome, EngineError> {
        let lines = doc_lines(doc);

        if selection.is_empty() {
            let line = selection.head.line;
            let outcome = reformat_range(
                &lines,
                structure,
                formatter,
                line,
                line,
                Some((line, selection.head.column)),
            );
            let column = outcome.cursor_column.unwrap_or(selection.head.column);

            return Ok(FormatOutcome {
                text: outcome.lines.join("\n"),
                selection: DocSelection::cursor(DocPosition::new(line, column)),
            });
        }

        let begin = selection.anchor.line.min(selection.head.line);
        let end = selection.anchor.line.max(selection.head.line);
        let outcome = reformat_range(&lines, structure, formatter, begin, end, None);
        let end_len = outcome.lines.get(end).map(|l| char_len(l)).unwrap_or(0);

        Ok(FormatOutcome {
            text: outcome.lines.join("\n"),
            selection: DocSelection {
                anchor: DocPosition::new(begin, 0),
                head: DocPosition::new(end, end_len),
            },
        })
    }

    /// Delete redundant blank lines in the selected line span, or the whole
    /// document when `selection` is None. Aborts when the structural
    /// snapshot is not ready.
    pub fn delete_blank_lines(
        &self,
        doc: &Rope,
        structure: &impl StructureView,
        selection: Option<(usize, usize)>,
    ) -> Result<String, EngineError> {
        if !structure.is_ready() {
            return Err(EngineError::StructureUnavailable);
        }

        let lines = doc_lines(doc);
        let last = lines.len().saturating_sub(1);
        let (start, end) = match selection {
            Some((a, b)) => (a.min(b), a.max(b)),
            None => (0, last),
        };

        let outcome = compact(&lines, structure, start, end);
        Ok(outcome.lines.join("\n"))
    }
}

/// Document lines without their newline terminators.
/// A rope ending in `\n` yields a final empty line, so rejoining with `\n`
/// round-trips the text exactly.
fn doc_lines(doc: &Rope) -> Vec<String> {
    doc.lines()
        .map(|line| {
            let mut s = line.to_string();
            if s.ends_with('\n') {
                s.pop();
                if s.ends_with('\r') {
                    s.pop();
                }
            }
            s
        })
        .collect()
}
