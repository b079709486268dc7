use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};

use super::app_state::App;
use crate::controller::HIGHLIGHT_CLASS;
use crate::document::{Bounds, Document};
use crate::geometry::Direction;
use crate::widgets::popup;

const SURFACE_COLOR: Color = Color::Cyan;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let (page_area, status_area) = (layout[0], layout[1]);
        self.viewport = page_area;

        self.render_triggers(frame, page_area);
        self.render_surface(frame, page_area);
        self.render_status(frame, status_area);
    }

    fn render_triggers(&self, frame: &mut Frame, area: Rect) {
        let scroll_top = self.page.scroll_top();
        let focused = self.focused_trigger();

        for trigger in &self.triggers {
            let Some(bounds) = self.page.bounds(trigger.id) else {
                continue;
            };
            let Some(rect) = popup::project(bounds, scroll_top, area) else {
                continue;
            };

            let mut style = if self.page.has_class(trigger.id, HIGHLIGHT_CLASS) {
                Style::default().fg(Color::Yellow)
            } else if self.is_disabled(trigger.id) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            if focused == Some(trigger.id) {
                style = style.add_modifier(Modifier::BOLD);
            }

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style);
            let label = Paragraph::new(trigger.label.as_str())
                .alignment(Alignment::Center)
                .style(style)
                .block(block);
            frame.render_widget(label, rect);
        }
    }

    fn render_surface(&self, frame: &mut Frame, area: Rect) {
        let controller = self.engine.controller();
        let surface = controller.surface();
        if !surface.is_displayed() {
            return;
        }

        let size = surface.natural_size();
        let bounds = Bounds::new(surface.top(), surface.left(), size.width, size.height);
        let scroll_top = self.page.scroll_top();

        let mut style = Style::default().fg(SURFACE_COLOR);
        if surface.opacity() < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }

        if let Some(rect) = popup::project(bounds, scroll_top, area) {
            popup::clear_area(frame, rect);
            let lines: Vec<Line> = surface
                .text_lines()
                .into_iter()
                .map(|l| Line::from(Span::styled(l, style)))
                .collect();
            let metrics = surface.metrics();
            let (px, py) = (metrics.padding_x as u16, metrics.padding_y as u16);
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style)
                .padding(Padding::new(px, px, py, py));
            frame.render_widget(Paragraph::new(lines).block(block), rect);
        }

        let Some(placement) = controller.last_placement() else {
            return;
        };
        let top = surface.top().round();
        let left = surface.left().round();
        let width = size.width.round();
        let height = size.height.round();
        let mid_row = top
            + surface.metrics().border
            + surface
                .pointer()
                .border_top
                .unwrap_or(surface.inner_height() / 2.0)
                .floor();

        let (row, column) = match placement.direction {
            Direction::Down => (top + height, left + (width / 2.0).floor()),
            Direction::Up => (top - 1.0, left + (width / 2.0).floor()),
            Direction::Right => (mid_row, left + width),
            Direction::Left => (mid_row, left - 1.0),
        };

        let arrow = Bounds::new(row, column, 1.0, 1.0);
        if let Some(cell_rect) = popup::project(arrow, scroll_top, area)
            && let Some(cell) = frame.buffer_mut().cell_mut((cell_rect.x, cell_rect.y))
        {
            cell.set_symbol(arrow_glyph(placement.direction)).set_style(style);
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.engine.controller().state();
        let mut spans = vec![
            Span::styled(
                format!(" {:?} ", state),
                Style::default().fg(Color::Black).bg(SURFACE_COLOR),
            ),
            Span::raw(" "),
        ];

        match &self.status {
            Some(message) => spans.push(Span::raw(message.clone())),
            None => spans.push(Span::styled(
                "hover or Tab to a button | d: toggle disabled | wheel/j/k: scroll | q: quit",
                Style::default().fg(Color::DarkGray),
            )),
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Arrow drawn in the gap between surface and trigger
pub fn arrow_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Down => "▼",
        Direction::Up => "▲",
        Direction::Right => "▶",
        Direction::Left => "◀",
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
