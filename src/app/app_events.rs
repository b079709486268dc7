use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::app_state::{App, SCROLL_STEP};
use crate::document::{Bounds, Document};
use crate::events::{UiEvent, closest_trigger};
use crate::widgets::popup;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
            Event::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Tab => self.cycle_focus(true, now),
            KeyCode::BackTab => self.cycle_focus(false, now),
            KeyCode::Char('d') => {
                self.toggle_focused_disabled(now);
                self.status = self.focused_trigger().map(|id| {
                    if self.is_disabled(id) {
                        "Tooltip disabled".to_string()
                    } else {
                        "Tooltip enabled".to_string()
                    }
                });
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(SCROLL_STEP),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        match mouse.kind {
            MouseEventKind::Moved => self.hover(mouse.column, mouse.row, now),
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    /// Translate a pointer position into enter/leave events
    fn hover(&mut self, column: u16, row: u16, now: Instant) {
        let scroll_top = self.page.scroll_top();
        let position = popup::unproject(column, row, scroll_top, self.viewport);

        // The surface is drawn over the page, so it shadows any trigger below
        let over_surface = position.is_some_and(|(top, left)| self.surface_contains(top, left));
        let hovered = position
            .filter(|_| !over_surface)
            .and_then(|(top, left)| self.page.hit_test(top, left))
            .and_then(|node| closest_trigger(&self.page, node));

        // Leaves before enters, so an enter can cancel the hide a leave scheduled
        if hovered != self.hovered
            && let Some(previous) = self.hovered
        {
            self.dispatch(UiEvent::PointerLeave(previous), now);
        }
        if self.over_surface && !over_surface {
            self.dispatch(UiEvent::SurfaceLeave, now);
        }
        if over_surface && !self.over_surface {
            self.dispatch(UiEvent::SurfaceEnter, now);
        }
        if hovered != self.hovered
            && let Some(node) = hovered
        {
            self.dispatch(UiEvent::PointerEnter(node), now);
        }

        self.hovered = hovered;
        self.over_surface = over_surface;
    }

    fn surface_contains(&self, top: f64, left: f64) -> bool {
        let surface = self.engine.controller().surface();
        if !surface.is_displayed() {
            return false;
        }
        let size = surface.natural_size();
        Bounds::new(
            surface.top().round(),
            surface.left().round(),
            size.width,
            size.height,
        )
        .contains(top, left)
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
