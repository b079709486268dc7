//! Pointer arrow styling
//!
//! The surface carries two stacked arrow layers: a border layer and the
//! pointer itself drawn over it. Stacked placements center the arrow
//! horizontally through default styling; side placements pin both layers
//! to the surface's vertical midpoint.

use super::Surface;
use crate::geometry::Direction;

/// Vertical offsets of the two arrow layers; `None` means default styling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerLayers {
    pub border_top: Option<f64>,
    pub pointer_top: Option<f64>,
}

/// Apply the direction class and pointer offsets for a placement
pub fn style_pointer(surface: &mut Surface, direction: Direction, side: bool, correction: f64) {
    for d in Direction::ALL {
        surface.remove_class(d.class_name());
    }

    let layers = if side {
        let mid = surface.inner_height() / 2.0;
        PointerLayers {
            border_top: Some(mid),
            pointer_top: Some(mid + correction),
        }
    } else {
        PointerLayers::default()
    };
    *surface.pointer_mut() = layers;

    surface.add_class(direction.class_name());
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod pointer_tests;
