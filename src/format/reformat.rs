//! Per-line reformatting pass with cursor mapping
//!
//! The actual per-line formatting is an opaque delegate supplied by the
//! host (markdown spacing heuristics, typography fixes, whatever). This
//! module only decides which lines the delegate sees, keeps line count and
//! order intact, and maps the active cursor column through the delegate's
//! answer. A delegate failure on one line is absorbed: that line keeps its
//! original text and the pass continues.

use crate::classify::StructureView;
use crate::error::LineFormatError;
use crate::util::text::char_len;

/// Opaque per-line formatting delegate.
///
/// `column` is the cursor column the delegate should map through its edits;
/// for inactive lines it is the end of the line. Returns the new line text
/// and the mapped column.
pub trait LineFormatter {
    fn format_line(
        &mut self,
        line: usize,
        text: &str,
        column: usize,
    ) -> Result<(String, usize), LineFormatError>;
}

impl<F> LineFormatter for F
where
    F: FnMut(usize, &str, usize) -> Result<(String, usize), LineFormatError>,
{
    fn format_line(
        &mut self,
        line: usize,
        text: &str,
        column: usize,
    ) -> Result<(String, usize), LineFormatError> {
        self(line, text, column)
    }
}

/// Result of a reformatting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformatOutcome {
    /// New text for every line of the input, same count and order
    pub lines: Vec<String>,
    /// Mapped cursor column for the active line, when one was given
    pub cursor_column: Option<usize>,
}

/// Reformat the inclusive line range `[start, end]`.
///
/// Only `Text` and `Table` lines reach the delegate; everything else passes
/// through unchanged, as do all lines outside the range. `active` is the
/// `(line, column)` of the cursor, if it sits inside the range.
pub fn reformat_range<S: AsRef<str>>(
    lines: &[S],
    structure: &impl StructureView,
    formatter: &mut impl LineFormatter,
    start: usize,
    end: usize,
    active: Option<(usize, usize)>,
) -> ReformatOutcome {
    let mut out = Vec::with_capacity(lines.len());
    let mut cursor_column = None;

    for (i, line) in lines.iter().enumerate() {
        let text = line.as_ref();
        if i < start || i > end {
            out.push(text.to_string());
            continue;
        }

        let is_active = active.map(|(line, _)| line == i).unwrap_or(false);
        let column = match active {
            Some((line, column)) if line == i => column,
            _ => char_len(text),
        };

        let (new_text, new_column) = format_one_line(i, text, column, structure, formatter);
        if is_active {
            cursor_column = Some(new_column);
        }
        out.push(new_text);
    }

    ReformatOutcome {
        lines: out,
        cursor_column,
    }
}

/// Reformat a whole document with the cursor at `(active_line, active_col)`
pub fn reformat_document<S: AsRef<str>>(
    lines: &[S],
    structure: &impl StructureView,
    formatter: &mut impl LineFormatter,
    active_line: usize,
    active_col: usize,
) -> ReformatOutcome {
    let end = lines.len().saturating_sub(1);
    reformat_range(
        lines,
        structure,
        formatter,
        0,
        end,
        Some((active_line, active_col)),
    )
}

fn format_one_line(
    line: usize,
    text: &str,
    column: usize,
    structure: &impl StructureView,
    formatter: &mut impl LineFormatter,
) -> (String, usize) {
    if !structure.classify(line).is_formattable() {
        return (text.to_string(), column);
    }

    match formatter.format_line(line, text, column) {
        Ok(result) => result,
        Err(e) => {
            // Keep the original line; the pass must always complete
            tracing::warn!(line, error = %e, "line formatter failed, keeping original text");
            (text.to_string(), column)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{LineClass, LineClassMap};

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    /// Delegate that collapses runs of spaces and maps the column to the
    /// end of the shortened line
    fn squeeze(
        _line: usize,
        text: &str,
        _column: usize,
    ) -> Result<(String, usize), LineFormatError> {
        let mut out = String::new();
        let mut last_space = false;
        for ch in text.chars() {
            if ch == ' ' && last_space {
                continue;
            }
            last_space = ch == ' ';
            out.push(ch);
        }
        let column = out.chars().count();
        Ok((out, column))
    }

    #[test]
    fn test_document_preserves_count_and_order() {
        let input = lines(&["a  b", "- item", "c  d"]);
        let structure = LineClassMap::new(vec![LineClass::Text, LineClass::List, LineClass::Text]);
        let out = reformat_document(&input, &structure, &mut squeeze, 0, 0);

        assert_eq!(out.lines, lines(&["a b", "- item", "c d"]));
    }

    #[test]
    fn test_only_text_and_table_reach_delegate() {
        let input = lines(&["x  x", "y  y", "z  z", "w  w"]);
        let structure = LineClassMap::new(vec![
            LineClass::Quote,
            LineClass::Table,
            LineClass::HorizontalRule,
            LineClass::Other,
        ]);
        let out = reformat_document(&input, &structure, &mut squeeze, 0, 0);

        assert_eq!(out.lines, lines(&["x  x", "y y", "z  z", "w  w"]));
    }

    #[test]
    fn test_active_line_column_is_mapped() {
        let input = lines(&["a  b", "c  d"]);
        let structure = LineClassMap::uniform(LineClass::Text, 2);
        let out = reformat_document(&input, &structure, &mut squeeze, 1, 4);

        assert_eq!(out.cursor_column, Some(3));
    }

    #[test]
    fn test_delegate_failure_keeps_line() {
        let mut failing = |line: usize, text: &str, column: usize| {
            if line == 1 {
                Err(LineFormatError::new("boom"))
            } else {
                squeeze(line, text, column)
            }
        };
        let input = lines(&["a  b", "c  d", "e  f"]);
        let structure = LineClassMap::uniform(LineClass::Text, 3);
        let out = reformat_document(&input, &structure, &mut failing, 1, 2);

        assert_eq!(out.lines, lines(&["a b", "c  d", "e f"]));
        // Failing active line keeps its original column too
        assert_eq!(out.cursor_column, Some(2));
    }

    #[test]
    fn test_range_leaves_outside_lines_alone() {
        let input = lines(&["a  a", "b  b", "c  c"]);
        let structure = LineClassMap::uniform(LineClass::Text, 3);
        let out = reformat_range(&input, &structure, &mut squeeze, 1, 1, None);

        assert_eq!(out.lines, lines(&["a  a", "b b", "c  c"]));
        assert_eq!(out.cursor_column, None);
    }
}
