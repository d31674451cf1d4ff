//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use typewright::{
    Engine, LineClass, LineClassMap, LineFormatError, RawRule, RuleConfig,
};

/// Engine with the given convert rules and no delete rules
pub fn convert_engine(rules: &[(&str, &str)]) -> Engine {
    Engine::new(RuleConfig {
        convert_rules: raw_rules(rules),
        delete_rules: vec![],
    })
}

/// Engine with the given delete rules and no convert rules
pub fn delete_engine(rules: &[(&str, &str)]) -> Engine {
    Engine::new(RuleConfig {
        convert_rules: vec![],
        delete_rules: raw_rules(rules),
    })
}

pub fn raw_rules(rules: &[(&str, &str)]) -> Vec<RawRule> {
    rules
        .iter()
        .map(|(before, after)| RawRule::new(*before, *after))
        .collect()
}

/// Structure map from a class per line
pub fn structure(classes: &[LineClass]) -> LineClassMap {
    LineClassMap::new(classes.to_vec())
}

/// All-text structure for `lines` lines
pub fn text_structure(lines: usize) -> LineClassMap {
    LineClassMap::uniform(LineClass::Text, lines)
}

/// Delegate that collapses runs of spaces; the mapped column is the end of
/// the shortened line
pub fn squeeze_spaces(
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

/// Delegate that returns every line unchanged
pub fn passthrough(
    _line: usize,
    text: &str,
    column: usize,
) -> Result<(String, usize), LineFormatError> {
    Ok((text.to_string(), column))
}

/// Apply an intent to a document the way a host transaction would,
/// returning the new text and cursor offset (all in chars)
pub fn apply_intent(text: &str, intent: &typewright::EditIntent) -> (String, usize) {
    let chars: Vec<char> = text.chars().collect();
    let mut out: String = chars[..intent.from].iter().collect();
    out.push_str(&intent.insert);
    out.extend(chars[intent.to..].iter());
    (out, intent.cursor)
}
