//! Visibility controller
//!
//! Owns the shared surface and runs the show/hide state machine. At most
//! one trigger/content pair is active; showing a new pair deactivates the
//! previous one first. Hiding is debounced so the pointer can travel from
//! a trigger onto the surface without the tooltip flashing off.

use std::time::Instant;

use crate::config::{Config, GeometryConfig};
use crate::document::{Document, NodeId};
use crate::geometry::{self, Placement, PlacementRequest};
use crate::surface::{self, ContentId, Surface};
use crate::timer::{Fade, FadeStep, HideTimer};

/// Class carried by the trigger whose tooltip is showing
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Style tag selecting side placement
pub const SIDE_STYLE: &str = "side";

pub fn is_side_style(style: Option<&str>) -> bool {
    style == Some(SIDE_STYLE)
}

/// A request to show one trigger's content
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub trigger: NodeId,
    pub content: Option<ContentId>,
    pub style: Option<String>,
    pub offset: f64,
}

/// Observable state of the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Hidden,
    Visible,
    FadingOut,
}

#[derive(Debug, Clone)]
struct ActivePair {
    trigger: NodeId,
    content: ContentId,
    style: Option<String>,
}

pub struct VisibilityController {
    surface: Surface,
    hide_timer: HideTimer,
    fade: Fade,
    active: Option<ActivePair>,
    geometry: GeometryConfig,
    last_placement: Option<Placement>,
}

impl VisibilityController {
    pub fn new(config: &Config) -> Self {
        Self {
            surface: Surface::new(config.surface),
            hide_timer: HideTimer::new(config.timing.hide_delay()),
            fade: Fade::new(config.timing.fade()),
            active: None,
            geometry: config.geometry,
            last_placement: None,
        }
    }

    /// Show `activation`'s content anchored to its trigger
    ///
    /// Returns false (and changes nothing) when there is no content to show
    /// or the trigger is no longer in the document.
    pub fn show<D: Document + ?Sized>(&mut self, doc: &mut D, activation: Activation) -> bool {
        let Some(content) = activation.content.filter(|c| self.surface.contains(*c)) else {
            return false;
        };
        let Some(trigger_bounds) = doc.bounds(activation.trigger) else {
            return false;
        };

        self.hide_timer.cancel();
        self.deactivate(doc);

        doc.add_class(activation.trigger, HIGHLIGHT_CLASS);
        self.surface.show_content(content);

        let side = is_side_style(activation.style.as_deref());
        let placement = geometry::place(&PlacementRequest {
            trigger: trigger_bounds,
            container: self.surface.natural_size(),
            offset: activation.offset,
            pointer_clearance: self.geometry.pointer_clearance,
            scroll_top: doc.scroll_top(),
            side,
        });

        self.fade.stop();
        if let Some(style) = activation.style.as_deref() {
            self.surface.add_class(style);
        }
        self.surface.display();
        self.surface.set_position(placement.top, placement.left);
        self.surface.set_opacity(1.0);

        surface::style_pointer(
            &mut self.surface,
            placement.direction,
            side,
            self.geometry.pointer_correction,
        );

        log::debug!(
            "Showing tooltip for {:?} at {} ({})",
            activation.trigger,
            placement,
            activation.style.as_deref().unwrap_or("stacked")
        );

        self.active = Some(ActivePair {
            trigger: activation.trigger,
            content,
            style: activation.style,
        });
        self.last_placement = Some(placement);
        true
    }

    /// Request a hide after the grace period, restarting any pending one
    pub fn hide(&mut self, now: Instant) {
        self.hide_timer.schedule(now);
        log::trace!("Hide scheduled for {:?}", self.hide_timer.deadline());
    }

    /// Drop a pending hide; used while the pointer is over the surface
    pub fn cancel_hide(&mut self) {
        self.hide_timer.cancel();
    }

    pub fn is_hide_pending(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// Advance the hide debounce and the fade-out
    pub fn tick<D: Document + ?Sized>(&mut self, doc: &mut D, now: Instant) {
        if self.hide_timer.fire_if_due(now) {
            if self.surface.is_displayed() {
                self.fade.start(now);
            }
            if let Some(active) = &self.active {
                doc.remove_class(active.trigger, HIGHLIGHT_CLASS);
            }
        }

        match self.fade.step(now) {
            FadeStep::Idle => {}
            FadeStep::Running { opacity } => self.surface.set_opacity(opacity),
            FadeStep::Finished => {
                self.surface.set_opacity(0.0);
                self.surface.conceal();
                log::debug!("Tooltip faded out");
            }
        }
    }

    pub fn state(&self) -> SurfaceState {
        if !self.surface.is_displayed() {
            SurfaceState::Hidden
        } else if self.fade.is_running() {
            SurfaceState::FadingOut
        } else {
            SurfaceState::Visible
        }
    }

    /// Trigger of the most recent activation, kept after hiding
    pub fn active_trigger(&self) -> Option<NodeId> {
        self.active.as_ref().map(|a| a.trigger)
    }

    pub fn active_content(&self) -> Option<ContentId> {
        self.active.as_ref().map(|a| a.content)
    }

    pub fn active_style(&self) -> Option<&str> {
        self.active.as_ref().and_then(|a| a.style.as_deref())
    }

    /// Placement computed by the most recent show
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Undo the previous activation's highlight, content and style class
    fn deactivate<D: Document + ?Sized>(&mut self, doc: &mut D) {
        let Some(previous) = self.active.take() else {
            return;
        };
        doc.remove_class(previous.trigger, HIGHLIGHT_CLASS);
        self.surface.hide_content(previous.content);
        if let Some(style) = previous.style.as_deref() {
            self.surface.remove_class(style);
        }
        log::trace!("Deactivated tooltip for {:?}", previous.trigger);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
