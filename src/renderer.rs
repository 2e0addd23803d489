// src/renderer.rs

//! Priority renderer: turns a fully rasterized [`Grid`] into text.
//!
//! Each cell resolves to exactly one [`Symbol`] by fixed precedence,
//! `pin > via > metal3 > metal2 > empty`. The picture is written row by
//! row (`y` grows downward), followed by a legend drawn with the same
//! settings.

use crate::cell::{Cell, Layers};
use crate::color::SGR_RESET;
use crate::config::DisplayConfig;
use crate::grid::Grid;
use log::debug;

/// The five things a cell can display as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Empty,
    Pin,
    Via,
    Metal2,
    Metal3,
}

/// Legend order and wording.
const LEGEND: [(Symbol, &str); 5] = [
    (Symbol::Empty, "empty"),
    (Symbol::Pin, "pin"),
    (Symbol::Via, "via"),
    (Symbol::Metal2, "segment m2"),
    (Symbol::Metal3, "segment m3"),
];

impl Symbol {
    /// Picks the highest-precedence marker present.
    pub fn resolve(layers: Layers) -> Symbol {
        if layers.contains(Layers::PIN) {
            Symbol::Pin
        } else if layers.contains(Layers::VIA) {
            Symbol::Via
        } else if layers.contains(Layers::METAL3) {
            Symbol::Metal3
        } else if layers.contains(Layers::METAL2) {
            Symbol::Metal2
        } else {
            Symbol::Empty
        }
    }

    pub fn of(cell: &Cell) -> Symbol {
        Symbol::resolve(cell.layers())
    }
}

pub struct Renderer {
    config: DisplayConfig,
}

impl Renderer {
    pub fn new(config: DisplayConfig) -> Self {
        Renderer { config }
    }

    /// Appends one symbol, colored and duplicated per the configuration.
    fn push_symbol(&self, out: &mut String, symbol: Symbol) {
        let style = self.config.palette.style(symbol);
        let repeats = if self.config.duplicate_width { 2 } else { 1 };
        for _ in 0..repeats {
            if self.config.use_color {
                out.push_str(&style.color.solid_sgr());
                out.push(style.glyph);
                out.push_str(SGR_RESET);
            } else {
                out.push(style.glyph);
            }
        }
    }

    /// One symbol as drawn in the picture.
    pub fn symbol_str(&self, symbol: Symbol) -> String {
        let mut s = String::new();
        self.push_symbol(&mut s, symbol);
        s
    }

    /// The grid picture: one line per row, no newline after the last row.
    pub fn draw(&self, grid: &Grid) -> String {
        let mut pic = String::new();
        for (y, row) in grid.rows().enumerate() {
            if y > 0 {
                pic.push('\n');
            }
            for cell in row {
                self.push_symbol(&mut pic, Symbol::of(cell));
            }
        }
        debug!(
            "Drew {}x{} grid ({} marked cells)",
            grid.size(),
            grid.size(),
            grid.marked_cells()
        );
        pic
    }

    /// Legend lines, each newline-terminated.
    pub fn legend(&self) -> String {
        let mut out = String::new();
        for (symbol, meaning) in LEGEND {
            self.push_symbol(&mut out, symbol);
            out.push_str(" - ");
            out.push_str(meaning);
            out.push('\n');
        }
        out
    }

    /// Complete output: picture, a blank line, then the legend.
    pub fn render(&self, grid: &Grid) -> String {
        let mut out = self.draw(grid);
        out.push_str("\n\n");
        out.push_str(&self.legend());
        out
    }
}
