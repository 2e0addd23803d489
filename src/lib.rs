// src/lib.rs

//! netgrid library crate.
//!
//! Renders a routed net (pins, vias and metal segments on a square grid)
//! as a text picture: parse the document, rasterize every primitive into a
//! [`Grid`], then resolve each cell to one symbol.

pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod net;
pub mod rasterizer;
pub mod renderer;

pub use config::DisplayConfig;
pub use error::NetError;
pub use grid::Grid;

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

/// Parses and rasterizes a net document into its grid.
pub fn build_grid(text: &str) -> Result<Grid, NetError> {
    let net = net::parse_net(text)?;
    let mut grid = Grid::new(net.size)?;
    let covered = rasterizer::rasterize_all(&mut grid, &net.primitives)?;
    info!(
        "Rasterized {} primitives over {} cells ({} marked)",
        net.primitives.len(),
        covered,
        grid.marked_cells()
    );
    Ok(grid)
}

/// Full pipeline on document text: picture plus legend.
pub fn render_str(text: &str, config: &DisplayConfig) -> Result<String, NetError> {
    let grid = build_grid(text)?;
    Ok(renderer::Renderer::new(config.clone()).render(&grid))
}

/// Full pipeline on a document file.
pub fn render_file(path: &Path, config: &DisplayConfig) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    render_str(&text, config).with_context(|| format!("cannot render {}", path.display()))
}
