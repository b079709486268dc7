//! Delegated event handling
//!
//! A single listener routes pointer and focus events from any element
//! carrying the trigger marker, plus hover events on the shared surface.
//! [`TooltipEngine`] bundles the controller and binder behind it.

use std::time::Instant;

use crate::binder::{Action, Binder, MARKER_ATTR, TriggerOptions};
use crate::config::Config;
use crate::controller::VisibilityController;
use crate::document::{Document, NodeId};
use crate::surface::ContentId;

/// UI events the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PointerEnter(NodeId),
    PointerLeave(NodeId),
    Focus(NodeId),
    Blur(NodeId),
    SurfaceEnter,
    SurfaceLeave,
}

pub struct TooltipEngine {
    controller: VisibilityController,
    binder: Binder,
}

impl TooltipEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            controller: VisibilityController::new(config),
            binder: Binder::new(config),
        }
    }

    /// Route one UI event; events on unmarked elements are ignored
    pub fn handle_event<D: Document + ?Sized>(&mut self, doc: &mut D, event: UiEvent, now: Instant) {
        match event {
            UiEvent::PointerEnter(node) | UiEvent::Focus(node) => {
                if let Some(trigger) = closest_trigger(&*doc, node) {
                    self.request(doc, trigger, &TriggerOptions::action(Action::Show), now);
                }
            }
            UiEvent::PointerLeave(node) | UiEvent::Blur(node) => {
                if closest_trigger(&*doc, node).is_some() {
                    self.controller.hide(now);
                }
            }
            UiEvent::SurfaceEnter => self.controller.cancel_hide(),
            UiEvent::SurfaceLeave => self.controller.hide(now),
        }
    }

    /// Programmatic request against a trigger, with explicit options
    pub fn request<D: Document + ?Sized>(
        &mut self,
        doc: &mut D,
        trigger: NodeId,
        options: &TriggerOptions,
        now: Instant,
    ) -> Option<ContentId> {
        self.binder
            .apply(doc, &mut self.controller, trigger, options, now)
    }

    /// Advance the hide debounce and fade
    pub fn tick<D: Document + ?Sized>(&mut self, doc: &mut D, now: Instant) {
        self.controller.tick(doc, now);
    }

    pub fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }
}

/// The node itself or its nearest ancestor carrying the trigger marker
pub fn closest_trigger<D: Document + ?Sized>(doc: &D, node: NodeId) -> Option<NodeId> {
    let mut current = Some(node).filter(|n| doc.contains(*n));
    while let Some(n) = current {
        if doc.has_attribute(n, MARKER_ATTR) {
            return Some(n);
        }
        current = doc.parent(n);
    }
    None
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
