//! Expansion of a matched rule into concrete replacement halves
//!
//! Without an `after_pattern` the rule's literal after-halves pass through
//! untouched. With one, the template splits at its first unescaped pipe and
//! each half expands per path: the delete path runs a regex substitution
//! against the matched context (so `$1` reaches the before-pattern's capture
//! groups), the convert path runs plain placeholder substitution against the
//! matched windows. Either way the result is exactly two halves; a missing
//! half is the empty string.

use regex::{NoExpand, Regex};

use super::fragment::{regex_source, PatternFragment};
use super::store::ConvertRule;
use crate::util::text::{split_pair, unescape_pipes};

/// Expand a delete-path match into `(after_left, after_right)`
pub fn expand_delete(
    rule: &ConvertRule,
    matched_left: &str,
    matched_right: &str,
) -> (String, String) {
    let Some(pattern) = &rule.after_pattern else {
        return plain_after(rule);
    };

    let (template_left, template_right) = split_pair(pattern).unwrap_or((pattern, ""));
    let left = substitute_match(rule.left_ctx(), matched_left, template_left);
    let right = substitute_match(rule.right_ctx(), matched_right, template_right);
    (left, right)
}

/// Expand a convert-path match into `(after_left, after_right)`.
/// `left_window` / `right_window` are the literal windows that matched.
pub fn expand_convert(
    rule: &ConvertRule,
    left_window: &str,
    right_window: &str,
) -> (String, String) {
    let Some(pattern) = &rule.after_pattern else {
        return plain_after(rule);
    };

    let expanded = substitute_placeholders(pattern, left_window, right_window);
    match split_pair(&expanded) {
        Some((left, right)) => (finish_half(left), finish_half(right)),
        // Fewer than two halves: fall back to the literal after-halves
        None => plain_after(rule),
    }
}

fn plain_after(rule: &ConvertRule) -> (String, String) {
    (
        rule.after.left.text().to_string(),
        rule.after.right.text().to_string(),
    )
}

/// Replace the anchored context match inside `matched` with the template
/// half. A `r/template/` half expands `$n` back-references; a literal half
/// substitutes verbatim. Without a usable context regex the matched text
/// passes through unchanged.
fn substitute_match(context: Option<&Regex>, matched: &str, raw_half: &str) -> String {
    let Some(re) = context else {
        return matched.to_string();
    };
    match PatternFragment::parse(raw_half) {
        PatternFragment::Regex(template) => re.replace(matched, template.as_str()).into_owned(),
        PatternFragment::Literal(literal) => re.replace(matched, NoExpand(&literal)).into_owned(),
    }
}

/// Substitute `$1` / `$2` with the matched windows. `\$` escapes a literal
/// dollar; `\|` passes through untouched for the later half split.
fn substitute_placeholders(template: &str, left_window: &str, right_window: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'$') => {
                chars.next();
                out.push('$');
            }
            '$' => match chars.peek() {
                Some('1') => {
                    chars.next();
                    out.push_str(left_window);
                }
                Some('2') => {
                    chars.next();
                    out.push_str(right_window);
                }
                _ => out.push('$'),
            },
            _ => out.push(ch),
        }
    }

    out
}

/// Final cleanup of one expanded half: strip a `r/../` wrapper, unescape
/// pipes in literal text
fn finish_half(raw: &str) -> String {
    match regex_source(raw) {
        Some(source) => source.to_string(),
        None => unescape_pipes(raw),
    }
}
