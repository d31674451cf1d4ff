//! Rule parsing and the active rule set
//!
//! Raw `(before, after)` string pairs compile into [`ConvertRule`]s once,
//! when the configuration changes. A [`RuleSet`] is an immutable value the
//! store swaps wholesale, so a match in progress always observes either the
//! old set or the new set in its entirety.

use regex::Regex;

use super::fragment::{PairString, PatternFragment};
use crate::config::{RawRule, RuleConfig};
use crate::util::text::split_pair;

/// One compiled rule: required context, replacement, and optional template
#[derive(Debug, Clone)]
pub struct ConvertRule {
    /// Context that must frame the edit point for the rule to fire
    pub before: PairString,
    /// Default replacement halves
    pub after: PairString,
    /// Raw two-half template overriding `after` when present; synthesized
    /// whenever either after-half is a regex fragment
    pub after_pattern: Option<String>,

    // Context regexes anchored at the edit boundary, compiled at refresh.
    // None when the fragment source is invalid; such a rule never matches
    // on the delete path.
    left_ctx: Option<Regex>,
    right_ctx: Option<Regex>,
}

impl ConvertRule {
    /// Parse one raw rule. Malformed halves (no unescaped pipe) degrade to
    /// empty pairs that never match; they are not an error.
    pub fn parse(raw: &RawRule) -> Self {
        let before = PairString::parse(&raw.before).unwrap_or_else(|| {
            tracing::debug!(rule = %raw.before, "rule string has no pipe, never matches");
            PairString::empty()
        });
        let after = PairString::parse(&raw.after).unwrap_or_else(PairString::empty);

        // The template keeps the raw halves (delimiters, escapes and all);
        // expansion re-parses them per match.
        let after_pattern = if after.left.is_regex() || after.right.is_regex() {
            let (left_raw, right_raw) = split_pair(&raw.after).unwrap_or(("", ""));
            Some(format!("{left_raw}|{right_raw}"))
        } else {
            None
        };

        let left_ctx = compile_context(&before.left, PatternFragment::compile_end_anchored);
        let right_ctx = compile_context(&before.right, PatternFragment::compile_start_anchored);

        Self {
            before,
            after,
            after_pattern,
            left_ctx,
            right_ctx,
        }
    }

    /// End-anchored regex for the left context, if it compiled
    pub fn left_ctx(&self) -> Option<&Regex> {
        self.left_ctx.as_ref()
    }

    /// Start-anchored regex for the right context, if it compiled
    pub fn right_ctx(&self) -> Option<&Regex> {
        self.right_ctx.as_ref()
    }
}

// Rule identity is its declarative content; the compiled regexes are
// derived deterministically from it.
impl PartialEq for ConvertRule {
    fn eq(&self, other: &Self) -> bool {
        self.before == other.before
            && self.after == other.after
            && self.after_pattern == other.after_pattern
    }
}

impl Eq for ConvertRule {}

fn compile_context(
    fragment: &PatternFragment,
    compile: impl Fn(&PatternFragment) -> Result<Regex, regex::Error>,
) -> Option<Regex> {
    match compile(fragment) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(source = fragment.text(), error = %e, "invalid rule regex, rule disabled");
            None
        }
    }
}

/// Immutable, ordered rule list. Order is total priority: first match wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ConvertRule>,
}

impl RuleSet {
    /// Build a rule set from raw pairs, preserving order
    pub fn parse(raw: &[RawRule]) -> Self {
        Self {
            rules: raw.iter().map(ConvertRule::parse).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConvertRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Owner of the active rule sets
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    convert: RuleSet,
    delete: RuleSet,
}

impl RuleStore {
    pub fn new(config: &RuleConfig) -> Self {
        let mut store = Self::default();
        store.refresh(config);
        store
    }

    /// Rebuild both rule sets from scratch. The replacement is a single
    /// assignment per set; no partially built set is ever observable.
    pub fn refresh(&mut self, config: &RuleConfig) {
        self.convert = RuleSet::parse(&config.convert_rules);
        self.delete = RuleSet::parse(&config.delete_rules);
        tracing::debug!(
            convert = self.convert.len(),
            delete = self.delete.len(),
            "refreshed rule sets"
        );
    }

    pub fn convert_rules(&self) -> &RuleSet {
        &self.convert
    }

    pub fn delete_rules(&self) -> &RuleSet {
        &self.delete
    }
}
