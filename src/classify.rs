//! Per-line structural classification consumed from the host's parser
//!
//! The engine never parses markdown itself. Hosts derive a [`LineClass`] for
//! each line from their own syntax tree and hand it over behind the
//! [`StructureView`] trait; document-scope operations abort when the
//! snapshot reports itself as not ready.

use serde::{Deserialize, Serialize};

/// Terminal structural classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    Text,
    Table,
    List,
    Quote,
    BlockReference,
    HorizontalRule,
    Other,
}

impl LineClass {
    /// Block kinds that keep exactly one following blank line as a
    /// structural separator during blank-line compaction.
    pub fn continues_block(self) -> bool {
        matches!(self, Self::List | Self::Quote | Self::BlockReference)
    }

    /// Lines handed to the per-line formatting delegate
    pub fn is_formattable(self) -> bool {
        matches!(self, Self::Text | Self::Table)
    }
}

/// Read-only view of the host's structural snapshot
pub trait StructureView {
    /// Whether the snapshot covers the whole document.
    /// Document-scope operations abort with
    /// [`crate::EngineError::StructureUnavailable`] when this is false.
    fn is_ready(&self) -> bool {
        true
    }

    /// Classification of the given line index.
    /// Out-of-range indices classify as [`LineClass::Other`].
    fn classify(&self, line: usize) -> LineClass;
}

/// Vec-backed [`StructureView`] for hosts that precompute classifications
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClassMap {
    classes: Vec<LineClass>,
}

impl LineClassMap {
    pub fn new(classes: Vec<LineClass>) -> Self {
        Self { classes }
    }

    /// Classify every line as the same class. Handy for plain-text hosts.
    pub fn uniform(class: LineClass, lines: usize) -> Self {
        Self {
            classes: vec![class; lines],
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl StructureView for LineClassMap {
    fn classify(&self, line: usize) -> LineClass {
        self.classes.get(line).copied().unwrap_or(LineClass::Other)
    }
}

impl FromIterator<LineClass> for LineClassMap {
    fn from_iter<T: IntoIterator<Item = LineClass>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Structural snapshot that is still being built by the host parser.
/// Every document-scope operation against it aborts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingStructure;

impl StructureView for PendingStructure {
    fn is_ready(&self) -> bool {
        false
    }

    fn classify(&self, _line: usize) -> LineClass {
        LineClass::Other
    }
}
