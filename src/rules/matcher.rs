//! Context matching around an edit point
//!
//! Delete matching is regex-anchored: the left context must end exactly at
//! the edit boundary, the right context must start there. Convert matching
//! is deliberately stricter: the freshly typed window must equal the rule's
//! before-context literally. Delete rules recognize variable context (any
//! digit, any word); convert rules fire only on an exact typed sequence.

use super::store::{ConvertRule, RuleSet};
use crate::event::{EditEvent, EditKind};
use crate::util::text::{prefix_chars, suffix_chars};

/// Successful delete-rule match: the winning rule and the context text its
/// anchored regexes consumed on each side of the edit point
#[derive(Debug, Clone)]
pub struct DeleteMatch<'r> {
    pub rule: &'r ConvertRule,
    pub matched_left: String,
    pub matched_right: String,
}

/// Match a backward deletion against the delete rules, in priority order.
/// None means the host's default deletion proceeds unmodified.
pub fn match_delete<'r>(event: &EditEvent, rules: &'r RuleSet) -> Option<DeleteMatch<'r>> {
    if event.kind != EditKind::DeleteBackward {
        return None;
    }

    for rule in rules.iter() {
        let (Some(left_re), Some(right_re)) = (rule.left_ctx(), rule.right_ctx()) else {
            continue;
        };
        let Some(left_match) = left_re.find(&event.left) else {
            continue;
        };
        let Some(right_match) = right_re.find(&event.right) else {
            continue;
        };

        tracing::trace!(
            left = left_match.as_str(),
            right = right_match.as_str(),
            "delete rule matched"
        );
        return Some(DeleteMatch {
            rule,
            matched_left: left_match.as_str().to_string(),
            matched_right: right_match.as_str().to_string(),
        });
    }

    None
}

/// Match an insertion against the convert rules, in priority order.
///
/// Fast-rejects on the inserted character, then requires exact literal
/// equality between the rule's before-context and the char windows framing
/// the edit point.
pub fn match_convert<'r>(event: &EditEvent, rules: &'r RuleSet) -> Option<&'r ConvertRule> {
    if !matches!(event.kind, EditKind::InsertChar | EditKind::InsertCompose) {
        return None;
    }
    let inserted = event.inserted?;

    for rule in rules.iter() {
        let before_left = rule.before.left.text();
        let before_right = rule.before.right.text();

        // Degenerate rules have an empty left half and never pass this check
        if before_left.chars().last() != Some(inserted) {
            continue;
        }

        let left_window = suffix_chars(&event.left, rule.before.left.char_len());
        let right_window = prefix_chars(&event.right, rule.before.right.char_len());
        if left_window == before_left && right_window == before_right {
            return Some(rule);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RawRule;

    fn rules(pairs: &[(&str, &str)]) -> RuleSet {
        let raw: Vec<RawRule> = pairs
            .iter()
            .map(|(b, a)| RawRule::new(*b, *a))
            .collect();
        RuleSet::parse(&raw)
    }

    #[test]
    fn test_delete_matches_empty_pair() {
        let rules = rules(&[("(|)", "|")]);
        let event = EditEvent::backspace("()", 1);
        let m = match_delete(&event, &rules).unwrap();
        assert_eq!(m.matched_left, "(");
        assert_eq!(m.matched_right, ")");
    }

    #[test]
    fn test_delete_regex_context() {
        // Any digit pair around the point
        let rules = rules(&[("r/\\d/|r/\\d/", "|")]);
        let event = EditEvent::backspace("a12b", 2);
        let m = match_delete(&event, &rules).unwrap();
        assert_eq!(m.matched_left, "1");
        assert_eq!(m.matched_right, "2");

        let event = EditEvent::backspace("axyb", 2);
        assert!(match_delete(&event, &rules).is_none());
    }

    #[test]
    fn test_delete_requires_delete_kind() {
        let rules = rules(&[("(|)", "|")]);
        let event = EditEvent::typed("()", 0, '(');
        assert!(match_delete(&event, &rules).is_none());
    }

    #[test]
    fn test_delete_first_rule_wins() {
        let rules = rules(&[("(|)", "A|"), ("r/./|r/./", "B|")]);
        let event = EditEvent::backspace("()", 1);
        let m = match_delete(&event, &rules).unwrap();
        assert_eq!(m.rule.after.left.text(), "A");
    }

    #[test]
    fn test_convert_literal_window() {
        let rules = rules(&[("(|", "(|)")]);
        // Typed '(' at offset 2 of "ab(cd"
        let event = EditEvent::typed("ab(cd", 2, '(');
        assert!(match_convert(&event, &rules).is_some());
    }

    #[test]
    fn test_convert_fast_reject_on_inserted_char() {
        let rules = rules(&[("(|", "(|)")]);
        let event = EditEvent::typed("ab[cd", 2, '[');
        assert!(match_convert(&event, &rules).is_none());
    }

    #[test]
    fn test_convert_requires_both_windows() {
        let rules = rules(&[(">>|<<", "x|y")]);
        let event = EditEvent::typed(">><<", 1, '>');
        assert!(match_convert(&event, &rules).is_some());

        let event = EditEvent::typed(">><x", 1, '>');
        assert!(match_convert(&event, &rules).is_none());
    }

    #[test]
    fn test_convert_window_shorter_than_context() {
        let rules = rules(&[("((|", "x|y")]);
        // Only one char left of the caret; window cannot cover the context
        let event = EditEvent::typed("(", 0, '(');
        assert!(match_convert(&event, &rules).is_none());
    }

    #[test]
    fn test_convert_ignores_delete_events() {
        let rules = rules(&[("(|", "(|)")]);
        let event = EditEvent::backspace("((", 2);
        assert!(match_convert(&event, &rules).is_none());
    }
}
