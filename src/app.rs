//! Terminal demo
//!
//! Renders a scrollable page of triggers and the shared tooltip surface,
//! feeding crossterm mouse and keyboard input through the tooltip engine.

mod app_events;
mod app_render;
mod app_state;
mod demo_page;

pub use app_state::{App, DemoTrigger};
pub use demo_page::demo_page;
