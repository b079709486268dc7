//! Tests for binder

use super::*;
use crate::controller::{HIGHLIGHT_CLASS, SurfaceState};
use crate::document::{Bounds, Element, Page};
use crate::test_utils::test_helpers::*;
use proptest::prelude::*;

fn setup() -> (Page, Binder, VisibilityController) {
    let config = Config::default();
    (Page::new(), Binder::new(&config), VisibilityController::new(&config))
}

fn trigger(page: &mut Page, element: Element) -> NodeId {
    let root = page.root();
    page.append(
        root,
        element.with_bounds(Bounds::new(500.0, 100.0, 40.0, 20.0)),
    )
}

fn show() -> TriggerOptions {
    TriggerOptions::action(Action::Show)
}

#[test]
fn test_inline_markup_is_synthesized_once() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(
        &mut page,
        Element::new("span")
            .with_attr(MARKER_ATTR, "")
            .with_attr(HTML_ATTR, "Inline tooltip"),
    );

    let first = binder.apply(&mut page, &mut controller, t, &show(), t0());
    let second = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(controller.surface().content_count(), 1);
    assert_eq!(controller.surface().markup(first.unwrap()), Some("Inline tooltip"));
    assert_eq!(binder.cached_content(t), first);
}

#[test]
fn test_selector_prefers_child_of_trigger() {
    let (mut page, mut binder, mut controller) = setup();
    let root = page.root();
    page.append(
        root,
        Element::new("div").with_class("tip").with_markup("Page-wide tip"),
    );
    let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, ".tip"));
    page.append(
        t,
        Element::new("div").with_class("tip").with_markup("Child tip"),
    );

    let content = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert_eq!(controller.surface().markup(content.unwrap()), Some("Child tip"));
}

#[test]
fn test_selector_falls_back_to_document() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, "#help"));
    let root = page.root();
    page.append(
        root,
        Element::new("div")
            .with_attr("id", "help")
            .with_markup("Tooltip in DOM"),
    );

    let content = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert_eq!(
        controller.surface().markup(content.unwrap()),
        Some("Tooltip in DOM")
    );
    assert_eq!(controller.state(), SurfaceState::Visible);
}

#[test]
fn test_selector_takes_precedence_over_inline_markup() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(
        &mut page,
        Element::new("div")
            .with_attr(MARKER_ATTR, ".missing")
            .with_attr(HTML_ATTR, "Inline"),
    );

    let content = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert_eq!(content, None);
    assert_eq!(controller.surface().content_count(), 0);
    assert_eq!(controller.state(), SurfaceState::Hidden);
}

#[test]
fn test_unresolved_content_is_retried_later() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, ".late"));

    assert_eq!(binder.apply(&mut page, &mut controller, t, &show(), t0()), None);

    let root = page.root();
    page.append(
        root,
        Element::new("p").with_class("late").with_markup("Arrived"),
    );
    let content = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert!(content.is_some());
    assert!(page.has_class(t, HIGHLIGHT_CLASS));
}

#[test]
fn test_empty_selector_match_yields_no_content() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, ".tip"));
    page.append(t, Element::new("div").with_class("tip"));

    assert_eq!(binder.apply(&mut page, &mut controller, t, &show(), t0()), None);
}

#[test]
fn test_invalid_selector_yields_no_content() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, "div > .tip"));

    assert_eq!(binder.apply(&mut page, &mut controller, t, &show(), t0()), None);
    assert_eq!(controller.state(), SurfaceState::Hidden);
}

#[test]
fn test_cached_content_ignores_attribute_changes() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(
        &mut page,
        Element::new("span").with_attr(HTML_ATTR, "Original"),
    );
    let first = binder.apply(&mut page, &mut controller, t, &show(), t0());

    page.set_attribute(t, HTML_ATTR, "Changed");
    let second = binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert_eq!(first, second);
    assert_eq!(controller.surface().markup(second.unwrap()), Some("Original"));
}

#[test]
fn test_explicit_html_binds_content_without_action() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("span"));

    let content = binder.apply(
        &mut page,
        &mut controller,
        t,
        &TriggerOptions::default().with_html("From options"),
        t0(),
    );

    assert!(content.is_some());
    assert_eq!(controller.state(), SurfaceState::Hidden);
    assert_eq!(binder.apply(&mut page, &mut controller, t, &show(), t0()), content);
    assert_eq!(controller.state(), SurfaceState::Visible);
}

#[test]
fn test_marker_attribute_is_normalized() {
    let (mut page, mut binder, mut controller) = setup();
    let bare = trigger(&mut page, Element::new("span"));
    let with_selector = trigger(&mut page, Element::new("span").with_attr(MARKER_ATTR, ".tip"));

    binder.apply(&mut page, &mut controller, bare, &TriggerOptions::default(), t0());
    binder.apply(&mut page, &mut controller, bare, &TriggerOptions::default(), t0());
    binder.apply(&mut page, &mut controller, with_selector, &TriggerOptions::default(), t0());

    assert_eq!(page.attribute(bare, MARKER_ATTR).as_deref(), Some(""));
    assert_eq!(page.attribute(with_selector, MARKER_ATTR).as_deref(), Some(".tip"));
}

#[test]
fn test_disable_refuses_show_until_enabled() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "Tip"));

    binder.apply(&mut page, &mut controller, t, &TriggerOptions::action(Action::Disable), t0());
    assert_eq!(page.attribute(t, DISABLE_ATTR).as_deref(), Some(""));

    binder.apply(&mut page, &mut controller, t, &show(), t0());
    assert_eq!(controller.state(), SurfaceState::Hidden);
    assert!(!page.has_class(t, HIGHLIGHT_CLASS));

    binder.apply(&mut page, &mut controller, t, &TriggerOptions::action(Action::Enable), t0());
    assert!(!page.has_attribute(t, DISABLE_ATTR));

    binder.apply(&mut page, &mut controller, t, &show(), t0());
    assert_eq!(controller.state(), SurfaceState::Visible);
    assert!(page.has_class(t, HIGHLIGHT_CLASS));
}

#[test]
fn test_disable_keeps_visible_tooltip() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "Tip"));
    binder.apply(&mut page, &mut controller, t, &show(), t0());

    binder.apply(&mut page, &mut controller, t, &TriggerOptions::action(Action::Disable), t0());

    assert_eq!(controller.state(), SurfaceState::Visible);
    assert!(page.has_class(t, HIGHLIGHT_CLASS));
}

#[test]
fn test_disabled_show_leaves_other_tooltip_active() {
    let (mut page, mut binder, mut controller) = setup();
    let a = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "A"));
    let b = trigger(
        &mut page,
        Element::new("span")
            .with_attr(HTML_ATTR, "B")
            .with_attr(DISABLE_ATTR, ""),
    );
    binder.apply(&mut page, &mut controller, a, &show(), t0());

    binder.apply(&mut page, &mut controller, b, &show(), t0());

    assert_eq!(controller.active_trigger(), Some(a));
    assert!(page.has_class(a, HIGHLIGHT_CLASS));
    assert!(!page.has_class(b, HIGHLIGHT_CLASS));
}

#[test]
fn test_hide_action_schedules_hide() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "Tip"));
    let start = t0();
    binder.apply(&mut page, &mut controller, t, &show(), start);

    binder.apply(&mut page, &mut controller, t, &TriggerOptions::action(Action::Hide), start);
    assert!(controller.is_hide_pending());

    controller.tick(&mut page, start + ms(30));
    assert!(!page.has_class(t, HIGHLIGHT_CLASS));
}

#[test]
fn test_offset_resolution_and_recording() {
    let (mut page, mut binder, mut controller) = setup();
    let declared = trigger(
        &mut page,
        Element::new("span")
            .with_attr(HTML_ATTR, "Tip")
            .with_attr(OFFSET_ATTR, "7"),
    );
    let plain = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "Tip"));

    binder.apply(&mut page, &mut controller, declared, &TriggerOptions::default(), t0());
    binder.apply(&mut page, &mut controller, plain, &TriggerOptions::default(), t0());

    assert_eq!(binder.recorded_offset(declared), Some(7.0));
    assert_eq!(binder.recorded_offset(plain), Some(2.0));
}

#[test]
fn test_explicit_offset_sticks_to_trigger() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(&mut page, Element::new("span").with_attr(HTML_ATTR, "Hello"));

    binder.apply(
        &mut page,
        &mut controller,
        t,
        &TriggerOptions::default().with_offset(10.0),
        t0(),
    );
    binder.apply(&mut page, &mut controller, t, &show(), t0());

    // "Hello" surface is 9x3: 500 - 3 - (19 + 10)
    assert_eq!(controller.surface().top(), 468.0);
}

#[test]
fn test_style_from_attribute_selects_side_mode() {
    let (mut page, mut binder, mut controller) = setup();
    let t = trigger(
        &mut page,
        Element::new("span")
            .with_attr(HTML_ATTR, "Hello")
            .with_attr(STYLE_ATTR, "side"),
    );

    binder.apply(&mut page, &mut controller, t, &show(), t0());

    assert!(controller.surface().has_class("side"));
    assert!(controller.surface().has_class("tooltip-right"));
    assert_eq!(controller.active_style(), Some("side"));
}

#[test]
fn test_unknown_trigger_is_ignored() {
    let (mut page, mut binder, mut controller) = setup();
    let ghost = NodeId(404);

    let content = binder.apply(
        &mut page,
        &mut controller,
        ghost,
        &TriggerOptions::action(Action::Show).with_html("Ghost"),
        t0(),
    );

    assert_eq!(content, None);
    assert_eq!(controller.surface().content_count(), 0);
    assert_eq!(binder.recorded_offset(ghost), None);
}

// Resolving content any number of times yields one cached entry
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_resolution_is_idempotent(
        calls in 1usize..10,
        markup in "[a-zA-Z ]{1,20}",
        use_selector in prop::bool::ANY,
    ) {
        let (mut page, mut binder, mut controller) = setup();
        let t = if use_selector {
            let t = trigger(&mut page, Element::new("div").with_attr(MARKER_ATTR, ".tip"));
            page.append(t, Element::new("div").with_class("tip").with_markup(&markup));
            t
        } else {
            trigger(&mut page, Element::new("div").with_attr(HTML_ATTR, &markup))
        };

        let config = binder.resolve(&page, t, &TriggerOptions::default());
        let first = binder.resolve_content(&page, controller.surface_mut(), t, &config);
        prop_assert!(first.is_some());

        for _ in 0..calls {
            let again = binder.resolve_content(&page, controller.surface_mut(), t, &config);
            prop_assert_eq!(again, first);
        }
        prop_assert_eq!(controller.surface().content_count(), 1);
    }
}
