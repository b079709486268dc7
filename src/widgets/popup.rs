use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::document::Bounds;

/// Project document bounds into a viewport, clipping to its edges
///
/// Document rows scroll by `scroll_top`; columns do not scroll. Returns
/// `None` when nothing of the bounds is visible.
pub fn project(bounds: Bounds, scroll_top: f64, viewport: Rect) -> Option<Rect> {
    let top = (bounds.top - scroll_top).round();
    let left = bounds.left.round();
    let bottom = top + bounds.height.round();
    let right = left + bounds.width.round();

    let clip_top = top.max(0.0);
    let clip_left = left.max(0.0);
    let clip_bottom = bottom.min(viewport.height as f64);
    let clip_right = right.min(viewport.width as f64);

    if clip_bottom <= clip_top || clip_right <= clip_left {
        return None;
    }

    Some(Rect {
        x: viewport.x + clip_left as u16,
        y: viewport.y + clip_top as u16,
        width: (clip_right - clip_left) as u16,
        height: (clip_bottom - clip_top) as u16,
    })
}

/// Map a screen cell back to document coordinates `(top, left)`
pub fn unproject(column: u16, row: u16, scroll_top: f64, viewport: Rect) -> Option<(f64, f64)> {
    if column < viewport.x
        || column >= viewport.x.saturating_add(viewport.width)
        || row < viewport.y
        || row >= viewport.y.saturating_add(viewport.height)
    {
        return None;
    }

    let top = (row - viewport.y) as f64 + scroll_top;
    let left = (column - viewport.x) as f64;
    Some((top, left))
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
