//! Document seam
//!
//! The tooltip engine never talks to a concrete UI toolkit. Everything it
//! needs from the host document (attributes, classes, bounds, selector
//! lookups, scroll position) goes through the [`Document`] trait.
//! [`Page`] is an in-memory implementation used by the terminal demo and
//! by tests.

mod page;
mod selector;

pub use page::{Element, Page};
pub use selector::Selector;

/// Identity of an element inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Document-relative bounding box of an element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Half-open containment test: the bottom and right edges are outside.
    pub fn contains(&self, top: f64, left: f64) -> bool {
        top >= self.top && top < self.bottom() && left >= self.left && left < self.right()
    }
}

/// Host document operations the tooltip engine depends on
pub trait Document {
    /// Whether `node` still exists in the document
    fn contains(&self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// First descendant of `node` (excluding `node` itself) matching `selector`, in document order
    fn find_descendant(&self, node: NodeId, selector: &Selector) -> Option<NodeId>;

    /// First element in the whole document matching `selector`, in document order
    fn find_first(&self, selector: &Selector) -> Option<NodeId>;

    /// Inner markup of an element
    fn inner_markup(&self, node: NodeId) -> Option<String>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Outer bounds of an element in document coordinates
    fn bounds(&self, node: NodeId) -> Option<Bounds>;

    /// Current vertical scroll offset of the viewport
    fn scroll_top(&self) -> f64;
}


#[cfg(test)]
#[path = "document/selector_tests.rs"]
mod selector_tests;
