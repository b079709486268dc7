//! Trigger configuration and its fallback chain
//!
//! Explicit options win over the trigger's declared attributes, which win
//! over configured defaults. Empty strings count as absent at every level.

use crate::document::{Document, NodeId};

pub const MARKER_ATTR: &str = "data-tooltip";
pub const HTML_ATTR: &str = "data-tooltip-html";
pub const STYLE_ATTR: &str = "data-tooltip-style";
pub const OFFSET_ATTR: &str = "data-tooltip-offset";
pub const DISABLE_ATTR: &str = "data-tooltip-disable";

/// Programmatic request against a trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Hide,
    Enable,
    Disable,
}

/// Explicit per-call options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerOptions {
    pub selector: Option<String>,
    pub html: Option<String>,
    pub style: Option<String>,
    pub offset: Option<f64>,
    pub action: Option<Action>,
}

impl TriggerOptions {
    pub fn action(action: Action) -> Self {
        Self {
            action: Some(action),
            ..Self::default()
        }
    }

    pub fn with_selector(mut self, selector: &str) -> Self {
        self.selector = Some(selector.to_string());
        self
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.html = Some(html.to_string());
        self
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// Configuration as declared on the trigger element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredAttributes {
    pub selector: Option<String>,
    pub html: Option<String>,
    pub style: Option<String>,
    pub offset: Option<f64>,
}

impl DeclaredAttributes {
    /// Read the declared attributes; an unparsable offset counts as absent
    pub fn read<D: Document + ?Sized>(doc: &D, trigger: NodeId) -> Self {
        Self {
            selector: doc.attribute(trigger, MARKER_ATTR),
            html: doc.attribute(trigger, HTML_ATTR),
            style: doc.attribute(trigger, STYLE_ATTR),
            offset: doc
                .attribute(trigger, OFFSET_ATTR)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite()),
        }
    }
}

/// Fully resolved configuration for one trigger
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerConfig {
    pub selector: Option<String>,
    pub html: Option<String>,
    pub style: Option<String>,
    pub offset: f64,
}

pub fn resolve_config(
    explicit: &TriggerOptions,
    declared: &DeclaredAttributes,
    default_offset: f64,
) -> TriggerConfig {
    TriggerConfig {
        selector: first_present(&explicit.selector, &declared.selector),
        html: first_present(&explicit.html, &declared.html),
        style: first_present(&explicit.style, &declared.style),
        offset: explicit.offset.or(declared.offset).unwrap_or(default_offset),
    }
}

fn first_present(explicit: &Option<String>, declared: &Option<String>) -> Option<String> {
    explicit
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| declared.as_deref().filter(|s| !s.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
