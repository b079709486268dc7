use super::app_state::DemoTrigger;
use crate::binder::{DISABLE_ATTR, HTML_ATTR, MARKER_ATTR, STYLE_ATTR};
use crate::document::{Bounds, Element, NodeId, Page};

const BUTTON_WIDTH: f64 = 18.0;
const BUTTON_HEIGHT: f64 = 3.0;

/// Build the demo page, one trigger for each way of declaring content
pub fn demo_page() -> (Page, Vec<DemoTrigger>) {
    let mut page = Page::new();
    let root = page.root();
    let mut triggers = Vec::new();

    let mut add = |page: &mut Page, label: &str, top: f64, left: f64, element: Element| -> NodeId {
        let id = page.append(
            root,
            element
                .with_class("button")
                .with_markup(label)
                .with_bounds(Bounds::new(top, left, BUTTON_WIDTH, BUTTON_HEIGHT)),
        );
        triggers.push(DemoTrigger {
            id,
            label: label.to_string(),
        });
        id
    };

    add(
        &mut page,
        "Top row",
        1.0,
        24.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(HTML_ATTR, "No room above,<br>so this opens below"),
    );
    add(
        &mut page,
        "Inline",
        12.0,
        8.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(HTML_ATTR, "Inline tooltip<br>shown above the trigger"),
    );
    add(
        &mut page,
        "Side",
        12.0,
        44.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(STYLE_ATTR, "side")
            .with_attr(HTML_ATTR, "Side tooltip<br>left of the trigger"),
    );
    let child = add(
        &mut page,
        "Child",
        22.0,
        24.0,
        Element::new("button").with_attr(MARKER_ATTR, ".child-tip"),
    );
    page.append(
        child,
        Element::new("div")
            .with_class("child-tip")
            .with_markup("Content found inside<br>the trigger itself"),
    );
    add(
        &mut page,
        "Edge",
        22.0,
        0.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(STYLE_ATTR, "side")
            .with_attr(HTML_ATTR, "No room on the left,<br>so this opens right"),
    );
    add(
        &mut page,
        "Page",
        32.0,
        8.0,
        Element::new("button").with_attr(MARKER_ATTR, "#page-tip"),
    );
    add(
        &mut page,
        "Disabled",
        32.0,
        44.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(DISABLE_ATTR, "")
            .with_attr(HTML_ATTR, "Press d to enable me"),
    );
    add(
        &mut page,
        "Far below",
        48.0,
        24.0,
        Element::new("button")
            .with_attr(MARKER_ATTR, "")
            .with_attr(HTML_ATTR, "Scroll down to reach me"),
    );

    page.append(
        root,
        Element::new("div")
            .with_attr("id", "page-tip")
            .with_markup("Content from elsewhere<br>on the page"),
    );

    (page, triggers)
}
