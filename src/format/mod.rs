//! Whole-document passes: per-line reformatting and blank-line compaction
//!
//! Both operate on a line snapshot plus the host's structural
//! classification; neither ever changes line count beyond deleting blank
//! lines, and neither reorders anything.

mod compact;
mod reformat;

pub use compact::{compact, CompactOutcome};
pub use reformat::{reformat_document, reformat_range, LineFormatter, ReformatOutcome};
