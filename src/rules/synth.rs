//! Edit synthesis: a match plus expanded halves becomes a host edit
//!
//! Pure functions; the host applies the returned intent as one atomic
//! transaction including cursor placement.

use super::matcher::DeleteMatch;
use super::store::ConvertRule;
use crate::event::{EditIntent, CHANGE_TAG};
use crate::util::text::char_len;

/// Intent for a delete-rule match: replace the matched context around the
/// point with the expanded halves, cursor lands between them.
pub fn synthesize_delete(
    m: &DeleteMatch<'_>,
    after_left: &str,
    after_right: &str,
    point: usize,
) -> EditIntent {
    let from = point - char_len(&m.matched_left);
    let to = point + char_len(&m.matched_right);
    EditIntent {
        from,
        to,
        insert: format!("{after_left}{after_right}"),
        cursor: from + char_len(after_left),
        tag: CHANGE_TAG,
    }
}

/// Intent for a convert-rule match. The `+ 1` keeps the replacement span in
/// pre-insert coordinates: the triggering character is counted in
/// `before.left` but does not exist at `point` yet.
pub fn synthesize_convert(
    rule: &ConvertRule,
    after_left: &str,
    after_right: &str,
    point: usize,
) -> EditIntent {
    let from = (point + 1).saturating_sub(rule.before.left.char_len());
    let to = point + rule.before.right.char_len();
    EditIntent {
        from,
        to,
        insert: format!("{after_left}{after_right}"),
        cursor: from + char_len(after_left),
        tag: CHANGE_TAG,
    }
}
