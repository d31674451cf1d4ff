//! User rule pipeline: parse, match, expand, synthesize
//!
//! A raw `(before, after)` string pair becomes a [`ConvertRule`] at refresh
//! time. On each host edit the matcher tests the rules in priority order;
//! a hit flows through placeholder expansion into an [`crate::EditIntent`].

mod expand;
mod fragment;
mod matcher;
mod store;
mod synth;

pub use expand::{expand_convert, expand_delete};
pub use fragment::{PairString, PatternFragment};
pub use matcher::{match_convert, match_delete, DeleteMatch};
pub use store::{ConvertRule, RuleSet, RuleStore};
pub use synth::{synthesize_convert, synthesize_delete};
