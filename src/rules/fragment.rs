//! Pattern fragments: the literal-or-regex halves of a rule context
//!
//! A raw half written `r/source/` is treated as a regular expression; any
//! other text is a literal that gets escaped at compile time. The explicit
//! variant replaces prefix-sniffing at every match site with a single parse
//! step when the rule set is rebuilt.

use std::borrow::Cow;

use regex::Regex;

use crate::util::text::{char_len, unescape_pipes};

/// One half of a rule context, framing an edit point
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternFragment {
    /// Exact text, escaped when compiled into a regex
    Literal(String),
    /// Raw regex source, validated when compiled
    Regex(String),
}

impl PatternFragment {
    /// Parse a raw half. `r/source/` selects the regex variant; everything
    /// else is literal text with `\|` unescaped to a plain pipe.
    pub fn parse(raw: &str) -> Self {
        match regex_source(raw) {
            // Escaped pipes stay escaped inside regex source, where `\|`
            // already means a literal pipe.
            Some(source) => Self::Regex(source.to_string()),
            None => Self::Literal(unescape_pipes(raw)),
        }
    }

    /// The fragment's text: literal content, or the regex source
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Regex(source) => source,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }

    /// Character length of the fragment text, the window size used by
    /// literal convert matching
    pub fn char_len(&self) -> usize {
        char_len(self.text())
    }

    /// Regex source for this fragment: escaped literal, or raw source
    fn source(&self) -> Cow<'_, str> {
        match self {
            Self::Literal(text) => Cow::Owned(regex::escape(text)),
            Self::Regex(source) => Cow::Borrowed(source.as_str()),
        }
    }

    /// Compile anchored at the end of the haystack: the left-context form
    pub fn compile_end_anchored(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!("(?:{})$", self.source()))
    }

    /// Compile anchored at the start of the haystack: the right-context form
    pub fn compile_start_anchored(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^(?:{})", self.source()))
    }
}

/// Regex source of a raw half written `r/source/`, None for literal halves
pub fn regex_source(raw: &str) -> Option<&str> {
    if raw.len() >= 3 && raw.starts_with("r/") && raw.ends_with('/') {
        Some(&raw[2..raw.len() - 1])
    } else {
        None
    }
}

/// Left/right fragments framing an edit point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairString {
    pub left: PatternFragment,
    pub right: PatternFragment,
}

impl PairString {
    /// Split a raw rule string at its first unescaped pipe and parse both
    /// halves. None when the string has no unescaped pipe.
    pub fn parse(raw: &str) -> Option<Self> {
        let (left, right) = crate::util::text::split_pair(raw)?;
        Some(Self {
            left: PatternFragment::parse(left),
            right: PatternFragment::parse(right),
        })
    }

    /// Degenerate pair with empty halves; never matches anything
    pub fn empty() -> Self {
        Self {
            left: PatternFragment::Literal(String::new()),
            right: PatternFragment::Literal(String::new()),
        }
    }
}
