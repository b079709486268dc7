//! Shared ratatui helpers

pub mod popup;
