// src/cell.rs

//! Defines the `Cell` type and its layer markers (`Layers`).
//!
//! A `Cell` is one square of the routing grid. It records which kinds of
//! routing objects cover it; several markers can be set at once (a pin
//! sitting on top of a metal2 run, for example).

use bitflags::bitflags;

bitflags! {
    /// Independent layer markers a cell can carry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Layers: u8 {
        const PIN    = 1 << 0; // Terminal of the net.
        const VIA    = 1 << 1; // Inter-layer connection.
        const METAL2 = 1 << 2;
        const METAL3 = 1 << 3;
    }
}

/// A single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    layers: Layers,
}

/// A cell with no markers; used to fill a fresh grid.
pub const EMPTY_CELL: Cell = Cell {
    layers: Layers::empty(),
};

impl Cell {
    /// Sets the given markers. Markers are never cleared once set.
    pub fn mark(&mut self, layers: Layers) {
        self.layers.insert(layers);
    }

    pub fn layers(&self) -> Layers {
        self.layers
    }

    pub fn contains(&self, layers: Layers) -> bool {
        self.layers.contains(layers)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
