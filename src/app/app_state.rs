use std::time::Instant;

use ratatui::layout::Rect;

use super::demo_page::demo_page;
use crate::binder::{self, Action, TriggerOptions};
use crate::config::Config;
use crate::document::{Document, NodeId, Page};
use crate::events::{TooltipEngine, UiEvent};

/// Rows moved per scroll step
pub const SCROLL_STEP: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoTrigger {
    pub id: NodeId,
    pub label: String,
}

/// Demo application state
pub struct App {
    pub page: Page,
    pub engine: TooltipEngine,
    pub triggers: Vec<DemoTrigger>,
    /// Index into `triggers` of the keyboard-focused trigger
    pub focus: Option<usize>,
    /// Element currently under the mouse
    pub hovered: Option<NodeId>,
    pub over_surface: bool,
    /// Page area from the last render, for mouse hit testing
    pub viewport: Rect,
    pub status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (page, triggers) = demo_page();
        Self::with_page(config, page, triggers)
    }

    pub fn with_page(config: &Config, page: Page, triggers: Vec<DemoTrigger>) -> Self {
        Self {
            page,
            engine: TooltipEngine::new(config),
            triggers,
            focus: None,
            hovered: None,
            over_surface: false,
            viewport: Rect::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self, now: Instant) {
        self.engine.tick(&mut self.page, now);
    }

    pub fn dispatch(&mut self, event: UiEvent, now: Instant) {
        self.engine.handle_event(&mut self.page, event, now);
    }

    pub fn focused_trigger(&self) -> Option<NodeId> {
        self.focus.and_then(|i| self.triggers.get(i)).map(|t| t.id)
    }

    /// Move keyboard focus forward or backward, wrapping around
    pub fn cycle_focus(&mut self, forward: bool, now: Instant) {
        if self.triggers.is_empty() {
            return;
        }
        let count = self.triggers.len();
        let next = match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };

        if let Some(previous) = self.focused_trigger() {
            self.dispatch(UiEvent::Blur(previous), now);
        }
        self.focus = Some(next);
        let id = self.triggers[next].id;
        self.scroll_into_view(id);
        self.dispatch(UiEvent::Focus(id), now);
    }

    /// Flip the disabled marker of the focused trigger
    pub fn toggle_focused_disabled(&mut self, now: Instant) {
        let Some(id) = self.focused_trigger() else {
            return;
        };
        let action = if binder::is_disabled(&self.page, id) {
            Action::Enable
        } else {
            Action::Disable
        };
        self.engine
            .request(&mut self.page, id, &TriggerOptions::action(action), now);
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        binder::is_disabled(&self.page, id)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.page.content_height() - self.viewport.height as f64).max(0.0)
    }

    pub fn scroll_by(&mut self, rows: f64) {
        let target = (self.page.scroll_top() + rows).clamp(0.0, self.max_scroll());
        self.page.set_scroll_top(target);
    }

    fn scroll_into_view(&mut self, id: NodeId) {
        let Some(bounds) = self.page.bounds(id) else {
            return;
        };
        let scroll = self.page.scroll_top();
        let height = self.viewport.height as f64;
        if height <= 0.0 {
            return;
        }
        if bounds.top < scroll {
            self.page.set_scroll_top(bounds.top);
        } else if bounds.bottom() > scroll + height {
            self.page.set_scroll_top(bounds.bottom() - height);
        }
    }
}
