use std::collections::{BTreeMap, BTreeSet};

use super::{Bounds, Document, NodeId, Selector};

/// A single element of an in-memory [`Page`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub markup: String,
    pub bounds: Bounds,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_markup(mut self, markup: &str) -> Self {
        self.markup = markup.to_string();
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn matches(&self, selector: &Selector) -> bool {
        selector.matches(
            &self.tag,
            self.attributes.get("id").map(String::as_str),
            |c| self.classes.contains(c),
            |a| self.attributes.contains_key(a),
        )
    }
}

/// Arena-backed document tree with a `body` root
#[derive(Debug, Clone)]
pub struct Page {
    elements: Vec<Element>,
    scroll_top: f64,
}

impl Page {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            scroll_top: 0.0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `element` as the last child of `parent`
    ///
    /// Appending to an unknown parent attaches the element to the root.
    pub fn append(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let parent = if self.contains(parent) {
            parent
        } else {
            self.root()
        };
        let id = NodeId(self.elements.len());
        element.parent = Some(parent);
        element.children.clear();
        self.elements.push(element);
        self.elements[parent.0].children.push(id);
        id
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }

    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = scroll_top.max(0.0);
    }

    /// Lowest edge of any element, used to clamp scrolling
    pub fn content_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.bounds.bottom())
            .fold(0.0, f64::max)
    }

    /// Deepest element whose bounds contain the given document point
    pub fn hit_test(&self, top: f64, left: f64) -> Option<NodeId> {
        let mut found = None;
        self.walk(self.root(), &mut |id, element| {
            if id != NodeId(0) && element.bounds.contains(top, left) {
                found = Some(id);
            }
            false
        });
        found
    }

    /// Pre-order traversal from `start` (inclusive); stops when `visit` returns true
    fn walk(&self, start: NodeId, visit: &mut impl FnMut(NodeId, &Element) -> bool) -> bool {
        let Some(element) = self.elements.get(start.0) else {
            return false;
        };
        if visit(start, element) {
            return true;
        }
        for child in &element.children {
            if self.walk(*child, &mut *visit) {
                return true;
            }
        }
        false
    }

    fn find_from(&self, start: NodeId, selector: &Selector, include_start: bool) -> Option<NodeId> {
        let mut found = None;
        self.walk(start, &mut |id, element| {
            if (include_start || id != start) && element.matches(selector) {
                found = Some(id);
                return true;
            }
            false
        });
        found
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for Page {
    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.elements.len()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(|e| e.parent)
    }

    fn find_descendant(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        self.find_from(node, selector, false)
    }

    fn find_first(&self, selector: &Selector) -> Option<NodeId> {
        self.find_from(self.root(), selector, true)
    }

    fn inner_markup(&self, node: NodeId) -> Option<String> {
        self.element(node).map(|e| e.markup.clone())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node).and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(node) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.element_mut(node) {
            element.attributes.remove(name);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.remove(class);
        }
    }

    fn bounds(&self, node: NodeId) -> Option<Bounds> {
        self.element(node).map(|e| e.bounds)
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }
}
