//! Rule pipeline tests - convert and delete rules end to end

mod common;

use common::{apply_intent, convert_engine, delete_engine};
use typewright::{EditEvent, EditKind, Engine, RawRule, RuleConfig, CHANGE_TAG};

// ========================================================================
// Convert rules (insertion-triggered)
// ========================================================================

#[test]
fn test_pair_completion_on_type() {
    let engine = convert_engine(&[("(|", "(|)")]);

    // Document was "ab", '(' typed at offset 2
    let event = EditEvent::typed("ab(", 2, '(');
    let intent = engine.on_edit(&event).unwrap();

    let (text, cursor) = apply_intent("ab", &intent);
    assert_eq!(text, "ab()");
    assert_eq!(cursor, 3);
    assert_eq!(intent.tag, CHANGE_TAG);
}

#[test]
fn test_convert_with_right_context() {
    // Second '>' completes a French quote only in front of "<<"
    let engine = convert_engine(&[(">>|<<", "«|»")]);

    let event = EditEvent::typed("a>><<b", 2, '>');
    let intent = engine.on_edit(&event).unwrap();

    let (text, cursor) = apply_intent("a><<b", &intent);
    assert_eq!(text, "a«»b");
    assert_eq!(cursor, 2);

    // Without the right context nothing fires
    let event = EditEvent::typed("a>>xb", 2, '>');
    assert!(engine.on_edit(&event).is_none());
}

#[test]
fn test_convert_placeholder_template() {
    // Wrap the typed context: regex after-halves switch on template mode
    let engine = convert_engine(&[("::|", "r/[$1]/|r//")]);

    let event = EditEvent::typed("x::", 2, ':');
    let intent = engine.on_edit(&event).unwrap();

    let (text, cursor) = apply_intent("x:", &intent);
    assert_eq!(text, "x[::]");
    assert_eq!(cursor, 5);
}

#[test]
fn test_convert_first_rule_wins() {
    let engine = convert_engine(&[("(|", "(|)"), ("((|", "{|}")]);

    let event = EditEvent::typed("((", 1, '(');
    let intent = engine.on_edit(&event).unwrap();
    assert_eq!(intent.insert, "()");
}

#[test]
fn test_compose_event_matches_convert_rules() {
    let engine = convert_engine(&[("。|", "。|\n")]);

    let event = EditEvent::composed("你好。", 2, "。");
    assert_eq!(event.kind, EditKind::InsertCompose);
    let intent = engine.on_edit(&event).unwrap();
    assert_eq!(intent.insert, "。\n");
}

// ========================================================================
// Delete rules (backspace-triggered)
// ========================================================================

#[test]
fn test_empty_pair_collapse_on_backspace() {
    let engine = delete_engine(&[("(|)", "|")]);

    // Cursor between "()" at offset 1
    let event = EditEvent::backspace("()", 1);
    let intent = engine.on_edit(&event).unwrap();

    let (text, cursor) = apply_intent("()", &intent);
    assert_eq!(text, "");
    assert_eq!(cursor, 0);
}

#[test]
fn test_delete_regex_context_matches_variability() {
    // Footnote-ish context: any digit between the brackets
    let engine = delete_engine(&[("r/\\[\\^\\d/|]", "|")]);

    let event = EditEvent::backspace("a[^7]b", 4);
    let intent = engine.on_edit(&event).unwrap();

    let (text, _) = apply_intent("a[^7]b", &intent);
    assert_eq!(text, "ab");
}

#[test]
fn test_delete_template_backreference() {
    // Collapse "**|**" down to "*|*", keeping whatever sits left of it
    let engine = delete_engine(&[("r/(.)\\*\\*/|r/\\*\\*/", "r/$1*/|r/*/")]);

    let event = EditEvent::backspace("x****", 3);
    let intent = engine.on_edit(&event).unwrap();

    let (text, cursor) = apply_intent("x****", &intent);
    assert_eq!(text, "x**");
    assert_eq!(cursor, 2);
}

#[test]
fn test_delete_conservation_when_no_rule_matches() {
    let engine = delete_engine(&[("(|)", "|"), ("[|]", "|")]);

    for (text, point) in [("ab", 1), ("(x)", 2), ("[)", 1)] {
        let event = EditEvent::backspace(text, point);
        assert!(
            engine.on_edit(&event).is_none(),
            "no intent expected for {text:?} at {point}"
        );
    }
}

#[test]
fn test_rule_kinds_do_not_cross() {
    let engine = Engine::new(RuleConfig {
        convert_rules: vec![RawRule::new("(|", "(|)")],
        delete_rules: vec![RawRule::new("(|)", "|")],
    });

    // A backspace never triggers convert rules and vice versa
    assert!(engine.on_edit(&EditEvent::backspace("((", 1)).is_none());
    assert!(engine.on_edit(&EditEvent::typed("()", 0, '(')).is_some());
}

#[test]
fn test_malformed_rule_is_silent_noop() {
    let engine = convert_engine(&[("no pipe here", "also none"), ("(|", "(|)")]);

    // The malformed rule never matches; the well-formed one still fires
    let event = EditEvent::typed("(", 0, '(');
    assert!(engine.on_edit(&event).is_some());
}

#[test]
fn test_unknown_change_tags_are_ignored() {
    assert_eq!(EditKind::from_tag("delete.forward"), None);
    assert_eq!(EditKind::from_tag("insert.paste"), None);
}
