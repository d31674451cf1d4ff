//! Rule configuration supplied by the host
//!
//! Hosts own persistence and UI; this crate only defines the shape. Each raw
//! rule is a pair of `left|right` strings split at the first unescaped pipe,
//! with halves written `r/source/` compiled as regex instead of literal text.

use serde::{Deserialize, Serialize};

/// One raw user rule: required context (`before`) and replacement (`after`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRule {
    pub before: String,
    pub after: String,
}

impl RawRule {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// Active rule configuration, rebuilt wholesale on every change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Rules triggered by character insertion, in priority order
    #[serde(default)]
    pub convert_rules: Vec<RawRule>,

    /// Rules triggered by backward deletion, in priority order
    #[serde(default)]
    pub delete_rules: Vec<RawRule>,
}

impl RuleConfig {
    pub fn is_empty(&self) -> bool {
        self.convert_rules.is_empty() && self.delete_rules.is_empty()
    }
}
