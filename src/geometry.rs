//! Placement geometry
//!
//! Computes where the shared surface goes relative to a trigger. Stacked
//! mode prefers above the trigger and flips below when that would start
//! above the scrolled viewport. Side mode prefers the left of the trigger
//! and flips to the right when that would start past the document's left
//! edge. Right and bottom overflow are not corrected.

use std::fmt;

use crate::document::Bounds;

/// Which way the surface's pointer arrow points (towards the trigger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Surface below the trigger
    Up,
    /// Surface above the trigger
    Down,
    /// Surface right of the trigger
    Left,
    /// Surface left of the trigger
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Class applied to the surface for this direction
    pub fn class_name(self) -> &'static str {
        match self {
            Direction::Up => "tooltip-up",
            Direction::Down => "tooltip-down",
            Direction::Left => "tooltip-left",
            Direction::Right => "tooltip-right",
        }
    }

    pub fn is_side(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the placement depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    /// Trigger outer bounds, document-relative
    pub trigger: Bounds,
    /// Natural outer size of the surface with its content shown
    pub container: Size,
    /// Configured trigger offset
    pub offset: f64,
    /// Space reserved for the pointer arrow
    pub pointer_clearance: f64,
    /// Current vertical scroll of the viewport
    pub scroll_top: f64,
    pub side: bool,
}

/// Computed surface position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub direction: Direction,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={} left={} direction={}",
            self.top, self.left, self.direction
        )
    }
}

/// Compute the surface placement for a trigger
pub fn place(request: &PlacementRequest) -> Placement {
    if request.side {
        place_side(request)
    } else {
        place_stacked(request)
    }
}

fn place_stacked(request: &PlacementRequest) -> Placement {
    let PlacementRequest {
        trigger, container, ..
    } = *request;
    let gap = request.pointer_clearance + request.offset;

    let left = trigger.left + (trigger.width / 2.0 - container.width / 2.0);
    let above = trigger.top - container.height - gap;

    if above < request.scroll_top {
        Placement {
            top: trigger.top + trigger.height + gap,
            left,
            direction: Direction::Up,
        }
    } else {
        Placement {
            top: above,
            left,
            direction: Direction::Down,
        }
    }
}

fn place_side(request: &PlacementRequest) -> Placement {
    let PlacementRequest {
        trigger, container, ..
    } = *request;
    let gap = request.pointer_clearance + request.offset;

    let top = trigger.top - (container.height / 2.0 - trigger.height / 2.0);
    let left_of = trigger.left - container.width - gap;

    if left_of < 0.0 {
        Placement {
            top,
            left: trigger.left + trigger.width + gap,
            direction: Direction::Left,
        }
    } else {
        Placement {
            top,
            left: left_of,
            direction: Direction::Right,
        }
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
