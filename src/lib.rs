//! Typewright - contextual text transformations for live document editors
//!
//! This crate decides, around an edit point or over a line range, whether a
//! configured rule applies, computes the replacement text and new cursor
//! position, and performs structure-aware blank-line compaction. The host
//! editor keeps the transaction/selection machinery and the syntax tree;
//! this crate consumes snapshots and hands back intents.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod format;
pub mod rules;
pub mod util;

// Re-export commonly used types
pub use classify::{LineClass, LineClassMap, PendingStructure, StructureView};
pub use config::{RawRule, RuleConfig};
pub use engine::{DocPosition, DocSelection, Engine, FormatOutcome};
pub use error::{EngineError, LineFormatError};
pub use event::{EditEvent, EditIntent, EditKind, CHANGE_TAG};
pub use format::{CompactOutcome, LineFormatter, ReformatOutcome};
pub use rules::{ConvertRule, PairString, PatternFragment, RuleSet, RuleStore};
