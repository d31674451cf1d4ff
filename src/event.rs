//! Edit events consumed from the host and edit intents handed back
//!
//! All offsets and lengths are in characters, matching rope-backed hosts.
//! An [`EditEvent`] is a snapshot of the text framing a single edit; an
//! [`EditIntent`] is the replacement the host applies as one atomic
//! transaction, superseding the keystroke's default effect.

use serde::Serialize;

use crate::util::text::{char_len, prefix_chars, suffix_chars};

/// User-event tag stamped on every intent this engine produces
pub const CHANGE_TAG: &str = "typewright.change";

/// Kind of host edit a rule can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A single character typed directly
    InsertChar,
    /// Text committed by an input-method composition
    InsertCompose,
    /// Backward deletion of one character
    DeleteBackward,
}

impl EditKind {
    /// Parse a host change-type tag. Tags other than the three recognized
    /// ones yield None and are ignored by the engine.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "insert.char" => Some(Self::InsertChar),
            "insert.compose" => Some(Self::InsertCompose),
            "delete.backward" => Some(Self::DeleteBackward),
            _ => None,
        }
    }
}

/// Snapshot of the document text around a single edit.
///
/// Conventions per kind:
/// - delete events: `left`/`right` frame `point` in the pre-change document,
///   and `point` is the offset immediately after the character being deleted.
/// - insert events: `left`/`right` frame the caret after the typed text has
///   landed (so `left` ends with the inserted character), while `point` is
///   the pre-insert caret offset. The synthesizer accounts for the one-char
///   difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    pub kind: EditKind,
    /// Last character of the inserted text, None for deletions
    pub inserted: Option<char>,
    /// Document text left of the edit boundary
    pub left: String,
    /// Document text right of the edit boundary
    pub right: String,
    /// Char offset of the edit in the pre-change document
    pub point: usize,
}

impl EditEvent {
    /// Event for a single character typed at `point`.
    /// `text` is the document after the character landed.
    pub fn typed(text: &str, point: usize, ch: char) -> Self {
        let boundary = point + 1;
        Self {
            kind: EditKind::InsertChar,
            inserted: Some(ch),
            left: prefix_chars(text, boundary).to_string(),
            right: skip_chars(text, boundary).to_string(),
            point,
        }
    }

    /// Event for text committed by an IME composition at `point`.
    /// `text` is the document after the composed text landed.
    pub fn composed(text: &str, point: usize, inserted: &str) -> Self {
        let boundary = point + char_len(inserted);
        Self {
            kind: EditKind::InsertCompose,
            inserted: inserted.chars().last(),
            left: prefix_chars(text, boundary).to_string(),
            right: skip_chars(text, boundary).to_string(),
            point,
        }
    }

    /// Event for a backward deletion whose deleted character ends at `point`.
    /// `text` is the document before the deletion applies.
    pub fn backspace(text: &str, point: usize) -> Self {
        Self {
            kind: EditKind::DeleteBackward,
            inserted: None,
            left: prefix_chars(text, point).to_string(),
            right: skip_chars(text, point).to_string(),
            point,
        }
    }
}

/// Text from character offset `n` to the end
fn skip_chars(s: &str, n: usize) -> &str {
    suffix_chars(s, char_len(s).saturating_sub(n))
}

/// Replacement edit handed back to the host.
///
/// Offsets are char offsets into the pre-change document and always satisfy
/// `from <= to <= document length`. The host applies the replacement and
/// cursor placement as one transaction, instead of the keystroke's default
/// effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditIntent {
    pub from: usize,
    pub to: usize,
    pub insert: String,
    /// New cursor anchor after the replacement applies
    pub cursor: usize,
    /// User-event tag for the host's transaction log
    pub tag: &'static str,
}
