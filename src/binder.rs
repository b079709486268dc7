//! Trigger binder
//!
//! Resolves which content belongs to a trigger, caches it for the
//! trigger's lifetime, and dispatches show/hide/enable/disable requests to
//! the visibility controller.

mod options;

use std::collections::HashMap;
use std::time::Instant;

use crate::config::Config;
use crate::controller::{Activation, VisibilityController};
use crate::document::{Document, NodeId, Selector};
use crate::surface::{ContentId, Surface};

pub use options::{
    Action, DISABLE_ATTR, DeclaredAttributes, HTML_ATTR, MARKER_ATTR, OFFSET_ATTR, STYLE_ATTR,
    TriggerConfig, TriggerOptions, resolve_config,
};

/// Per-trigger registry of resolved content and offsets
#[derive(Debug, Clone, Default)]
pub struct Binder {
    default_offset: f64,
    content: HashMap<NodeId, ContentId>,
    offsets: HashMap<NodeId, f64>,
}

impl Binder {
    pub fn new(config: &Config) -> Self {
        Self {
            default_offset: config.geometry.default_offset,
            content: HashMap::new(),
            offsets: HashMap::new(),
        }
    }

    /// Bind `trigger` with `options` and run the requested action
    ///
    /// Returns the trigger's content, if any resolved. Unknown triggers are
    /// ignored.
    pub fn apply<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        controller: &mut VisibilityController,
        trigger: NodeId,
        options: &TriggerOptions,
        now: Instant,
    ) -> Option<ContentId> {
        if !doc.contains(trigger) {
            return None;
        }

        let config = self.resolve(&*doc, trigger, options);
        let content = self.resolve_content(&*doc, controller.surface_mut(), trigger, &config);
        self.offsets.insert(trigger, config.offset);

        match options.action {
            Some(Action::Show) => {
                if is_disabled(&*doc, trigger) {
                    log::trace!("Ignoring show for disabled trigger {:?}", trigger);
                } else {
                    controller.show(
                        doc,
                        Activation {
                            trigger,
                            content,
                            style: config.style,
                            offset: config.offset,
                        },
                    );
                }
            }
            Some(Action::Hide) => controller.hide(now),
            Some(Action::Disable) => doc.set_attribute(trigger, DISABLE_ATTR, ""),
            Some(Action::Enable) => doc.remove_attribute(trigger, DISABLE_ATTR),
            None => {}
        }

        // Delegated listeners find triggers by this marker
        if !doc.has_attribute(trigger, MARKER_ATTR) {
            doc.set_attribute(trigger, MARKER_ATTR, "");
        }

        content
    }

    /// Resolve the trigger's configuration
    ///
    /// An offset recorded by an earlier call takes the place of the declared
    /// attribute, so explicit offsets stick to the trigger.
    pub fn resolve<D: Document + ?Sized>(
        &self,
        doc: &D,
        trigger: NodeId,
        options: &TriggerOptions,
    ) -> TriggerConfig {
        let mut declared = DeclaredAttributes::read(doc, trigger);
        if let Some(offset) = self.offsets.get(&trigger) {
            declared.offset = Some(*offset);
        }
        resolve_config(options, &declared, self.default_offset)
    }

    /// Find or synthesize the content for `trigger`
    ///
    /// A selector is looked up among the trigger's descendants first, then in
    /// the whole document; its inner markup becomes the content. Without a
    /// selector the inline markup is used. Once cached, the content is
    /// reused even if the trigger's attributes change.
    pub fn resolve_content<D: Document + ?Sized>(
        &mut self,
        doc: &D,
        surface: &mut Surface,
        trigger: NodeId,
        config: &TriggerConfig,
    ) -> Option<ContentId> {
        if let Some(content) = self.content.get(&trigger) {
            return Some(*content);
        }

        let markup = match config.selector.as_deref() {
            Some(selector) => markup_for_selector(doc, trigger, selector),
            None => config.html.clone(),
        };

        let markup = markup.filter(|m| !m.is_empty())?;
        let content = surface.synthesize(&markup);
        self.content.insert(trigger, content);
        log::trace!("Cached content {:?} for trigger {:?}", content, trigger);
        Some(content)
    }

    pub fn cached_content(&self, trigger: NodeId) -> Option<ContentId> {
        self.content.get(&trigger).copied()
    }

    /// Offset recorded by the last call for this trigger
    pub fn recorded_offset(&self, trigger: NodeId) -> Option<f64> {
        self.offsets.get(&trigger).copied()
    }
}

pub fn is_disabled<D: Document + ?Sized>(doc: &D, trigger: NodeId) -> bool {
    doc.has_attribute(trigger, DISABLE_ATTR)
}

fn markup_for_selector<D: Document + ?Sized>(
    doc: &D,
    trigger: NodeId,
    selector: &str,
) -> Option<String> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            log::debug!("Trigger {:?}: {}", trigger, e);
            return None;
        }
    };

    doc.find_descendant(trigger, &selector)
        .or_else(|| doc.find_first(&selector))
        .and_then(|node| doc.inner_markup(node))
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod binder_tests;
