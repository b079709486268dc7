//! Shared tooltip surface
//!
//! One container hosts whichever content is active. Synthesized content
//! entries live in an arena on the surface and are never removed; only one
//! is visible at a time.

pub mod pointer;

use std::collections::BTreeSet;

use unicode_width::UnicodeWidthStr;

use crate::config::SurfaceConfig;
use crate::geometry::Size;

pub use pointer::{PointerLayers, style_pointer};

/// Handle to a content entry owned by the [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(usize);

#[derive(Debug, Clone)]
struct ContentEntry {
    markup: String,
    visible: bool,
}

#[derive(Debug, Clone)]
pub struct Surface {
    metrics: SurfaceConfig,
    contents: Vec<ContentEntry>,
    classes: BTreeSet<String>,
    displayed: bool,
    top: f64,
    left: f64,
    opacity: f64,
    pointer: PointerLayers,
}

impl Surface {
    pub fn new(metrics: SurfaceConfig) -> Self {
        Self {
            metrics,
            contents: Vec::new(),
            classes: BTreeSet::new(),
            displayed: false,
            top: 0.0,
            left: 0.0,
            opacity: 1.0,
            pointer: PointerLayers::default(),
        }
    }

    /// Append a hidden content entry holding `markup`
    pub fn synthesize(&mut self, markup: &str) -> ContentId {
        self.contents.push(ContentEntry {
            markup: markup.to_string(),
            visible: false,
        });
        ContentId(self.contents.len() - 1)
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    pub fn markup(&self, id: ContentId) -> Option<&str> {
        self.contents.get(id.0).map(|c| c.markup.as_str())
    }

    pub fn contains(&self, id: ContentId) -> bool {
        id.0 < self.contents.len()
    }

    pub fn show_content(&mut self, id: ContentId) {
        if let Some(entry) = self.contents.get_mut(id.0) {
            entry.visible = true;
        }
    }

    pub fn hide_content(&mut self, id: ContentId) {
        if let Some(entry) = self.contents.get_mut(id.0) {
            entry.visible = false;
        }
    }

    pub fn is_content_visible(&self, id: ContentId) -> bool {
        self.contents.get(id.0).is_some_and(|c| c.visible)
    }

    pub fn visible_contents(&self) -> impl Iterator<Item = ContentId> + '_ {
        self.contents
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible)
            .map(|(i, _)| ContentId(i))
    }

    /// Text lines of all visible content, markup tags stripped
    pub fn text_lines(&self) -> Vec<String> {
        self.contents
            .iter()
            .filter(|c| c.visible)
            .flat_map(|c| markup_lines(&c.markup))
            .collect()
    }

    /// Outer size with the visible content laid out
    pub fn natural_size(&self) -> Size {
        let lines = self.text_lines();
        let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as f64;
        let text_height = lines.len() as f64;
        let m = &self.metrics;
        Size::new(
            text_width + 2.0 * (m.padding_x + m.border),
            text_height + 2.0 * (m.padding_y + m.border),
        )
    }

    /// Height inside the border, where the pointer layers are positioned
    pub fn inner_height(&self) -> f64 {
        (self.natural_size().height - 2.0 * self.metrics.border).max(0.0)
    }

    pub fn metrics(&self) -> &SurfaceConfig {
        &self.metrics
    }

    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn display(&mut self) {
        self.displayed = true;
    }

    pub fn conceal(&mut self) {
        self.displayed = false;
    }

    pub fn is_displayed(&self) -> bool {
        self.displayed
    }

    pub fn set_position(&mut self, top: f64, left: f64) {
        self.top = top;
        self.left = left;
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn pointer(&self) -> &PointerLayers {
        &self.pointer
    }

    pub(crate) fn pointer_mut(&mut self) -> &mut PointerLayers {
        &mut self.pointer
    }
}

/// Split markup into display lines: `<br>` breaks a line, other tags are dropped
pub fn markup_lines(markup: &str) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut chars = markup.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                let name = tag
                    .trim_start_matches('/')
                    .trim_end_matches('/')
                    .trim()
                    .to_ascii_lowercase();
                if name == "br" {
                    lines.push(String::new());
                }
            }
            '\n' => lines.push(String::new()),
            _ => {
                if let Some(line) = lines.last_mut() {
                    line.push(c);
                }
            }
        }
    }

    let lines: Vec<String> = lines.into_iter().map(|l| l.trim().to_string()).collect();
    if lines.iter().all(String::is_empty) {
        return Vec::new();
    }
    lines
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod surface_tests;
