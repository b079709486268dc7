//! hovertip: anchored tooltips on a single shared surface
//!
//! Triggers in a [`document::Document`] reveal content on hover or focus.
//! One [`controller::VisibilityController`] owns the surface, places it with
//! [`geometry::place`], and debounces hiding so the pointer can travel onto
//! the tooltip. [`events::TooltipEngine`] is the delegated entry point.

pub mod app;
pub mod binder;
pub mod cli;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod events;
pub mod geometry;
pub mod surface;
pub mod timer;
pub mod widgets;


pub use binder::{Action, TriggerOptions};
pub use config::Config;
pub use controller::{SurfaceState, VisibilityController};
pub use document::{Bounds, Document, NodeId, Page};
pub use error::HovertipError;
pub use events::{TooltipEngine, UiEvent};
pub use geometry::{Direction, Placement};
