//! Command-line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::GeometryConfig;
use crate::document::Bounds;
use crate::error::HovertipError;
use crate::geometry::{PlacementRequest, Size};

#[derive(Debug, Parser)]
#[command(name = "hovertip", version, about = "Anchored tooltip placement engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal demo (default)
    Demo {
        /// Config file to use instead of ~/.config/hovertip/config.toml
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compute a single placement and print it
    Place(PlaceArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PlaceArgs {
    /// Trigger bounds as TOP,LEFT,WIDTH,HEIGHT
    #[arg(long, value_parser = parse_bounds, allow_hyphen_values = true)]
    pub trigger: Bounds,

    /// Surface size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub size: Size,

    /// Viewport scroll top
    #[arg(long, default_value_t = 0.0)]
    pub scroll: f64,

    /// Trigger offset (default 2)
    #[arg(long)]
    pub offset: Option<f64>,

    /// Pointer clearance (default 19)
    #[arg(long)]
    pub clearance: Option<f64>,

    /// Place beside the trigger instead of above/below
    #[arg(long)]
    pub side: bool,
}

impl PlaceArgs {
    pub fn request(&self, geometry: &GeometryConfig) -> PlacementRequest {
        PlacementRequest {
            trigger: self.trigger,
            container: self.size,
            offset: self.offset.unwrap_or(geometry.default_offset),
            pointer_clearance: self.clearance.unwrap_or(geometry.pointer_clearance),
            scroll_top: self.scroll,
            side: self.side,
        }
    }
}

/// Parse `TOP,LEFT,WIDTH,HEIGHT`
pub fn parse_bounds(input: &str) -> Result<Bounds, HovertipError> {
    let parts = parse_numbers(input, ',')?;
    match parts.as_slice() {
        [top, left, width, height] if *width >= 0.0 && *height >= 0.0 => {
            Ok(Bounds::new(*top, *left, *width, *height))
        }
        _ => Err(HovertipError::InvalidArgument(format!(
            "expected TOP,LEFT,WIDTH,HEIGHT, got {:?}",
            input
        ))),
    }
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_size(input: &str) -> Result<Size, HovertipError> {
    let parts = parse_numbers(&input.to_ascii_lowercase(), 'x')?;
    match parts.as_slice() {
        [width, height] if *width >= 0.0 && *height >= 0.0 => Ok(Size::new(*width, *height)),
        _ => Err(HovertipError::InvalidArgument(format!(
            "expected WIDTHxHEIGHT, got {:?}",
            input
        ))),
    }
}

fn parse_numbers(input: &str, separator: char) -> Result<Vec<f64>, HovertipError> {
    input
        .split(separator)
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| HovertipError::InvalidArgument(format!("not a number: {:?}", part)))
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
