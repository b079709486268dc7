//! Tests for document/selector

use super::*;

#[test]
fn test_parse_class_selector() {
    let selector = Selector::parse(".tooltip").unwrap();
    assert_eq!(selector.tag, None);
    assert_eq!(selector.classes, vec!["tooltip".to_string()]);
}

#[test]
fn test_parse_compound_selector() {
    let selector = Selector::parse("div#help.tip.wide[data-tooltip]").unwrap();
    assert_eq!(selector.tag.as_deref(), Some("div"));
    assert_eq!(selector.id.as_deref(), Some("help"));
    assert_eq!(selector.classes, vec!["tip".to_string(), "wide".to_string()]);
    assert_eq!(selector.attributes, vec!["data-tooltip".to_string()]);
}

#[test]
fn test_parse_tag_is_lowercased() {
    let selector: Selector = "SPAN".parse().unwrap();
    assert_eq!(selector.tag.as_deref(), Some("span"));
}

#[test]
fn test_parse_rejects_malformed() {
    for input in ["", "   ", ".", "#", "[x", "[]", "div .tip", "a > b", "#a#b", ".a,.b"] {
        assert!(
            Selector::parse(input).is_err(),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn test_matches_requires_all_parts() {
    let selector = Selector::parse("div.tip[data-x]").unwrap();
    let classes = ["tip"];
    let attrs = ["data-x"];

    assert!(selector.matches("div", None, |c| classes.contains(&c), |a| attrs.contains(&a)));
    assert!(!selector.matches("span", None, |c| classes.contains(&c), |a| attrs.contains(&a)));
    assert!(!selector.matches("div", None, |_| false, |a| attrs.contains(&a)));
    assert!(!selector.matches("div", None, |c| classes.contains(&c), |_| false));
}

#[test]
fn test_matches_id() {
    let selector = Selector::parse("#help").unwrap();
    assert!(selector.matches("p", Some("help"), |_| false, |_| false));
    assert!(!selector.matches("p", Some("other"), |_| false, |_| false));
    assert!(!selector.matches("p", None, |_| false, |_| false));
}
