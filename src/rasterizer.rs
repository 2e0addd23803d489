// src/rasterizer.rs

//! Maps parsed primitives onto grid cells.
//!
//! A point covers exactly its own cell. A segment covers the whole
//! axis-aligned bounding rectangle of its endpoints, inclusive. For the
//! rectilinear runs a router produces that is exactly the wire; a diagonal
//! segment fills its full bounding box and is reported in the log.

use crate::cell::Layers;
use crate::error::NetError;
use crate::grid::Grid;
use crate::net::{MetalLayer, PointKind, Primitive};
use log::{trace, warn};

impl PointKind {
    pub fn layers(self) -> Layers {
        match self {
            PointKind::Pin => Layers::PIN,
            PointKind::Via => Layers::VIA,
            PointKind::None => Layers::empty(),
        }
    }
}

impl MetalLayer {
    pub fn layers(self) -> Layers {
        match self {
            MetalLayer::Metal2 => Layers::METAL2,
            MetalLayer::Metal3 => Layers::METAL3,
            MetalLayer::None => Layers::empty(),
        }
    }
}

/// Applies one primitive. Returns how many cells it covers, including
/// when its kind carries no marker.
///
/// Both endpoints are checked before anything is written, so a failing
/// primitive leaves the grid untouched.
pub fn rasterize(grid: &mut Grid, primitive: &Primitive) -> Result<usize, NetError> {
    match *primitive {
        Primitive::Point { x, y, kind, origin } => {
            let cell = grid.get_mut(x, y).map_err(|e| e.at(origin))?;
            cell.mark(kind.layers());
            trace!("{}: marked ({}, {}) as {:?}", origin, x, y, kind);
            Ok(1)
        }
        Primitive::Segment {
            x1,
            y1,
            x2,
            y2,
            layer,
            origin,
        } => {
            grid.index_of(x1, y1).map_err(|e| e.at(origin))?;
            grid.index_of(x2, y2).map_err(|e| e.at(origin))?;

            if x1 != x2 && y1 != y2 {
                warn!(
                    "{} is diagonal ({}, {})-({}, {}); filling its bounding rectangle",
                    origin, x1, y1, x2, y2
                );
            }

            let (x_min, x_max) = (x1.min(x2), x1.max(x2));
            let (y_min, y_max) = (y1.min(y2), y1.max(y2));
            let flags = layer.layers();
            let mut covered = 0;
            for y in y_min..=y_max {
                for x in x_min..=x_max {
                    grid.get_mut(x, y).map_err(|e| e.at(origin))?.mark(flags);
                    covered += 1;
                }
            }
            trace!("{}: covered {} cells with {:?}", origin, covered, layer);
            Ok(covered)
        }
    }
}

/// Applies primitives in document order, stopping at the first error.
pub fn rasterize_all(grid: &mut Grid, primitives: &[Primitive]) -> Result<usize, NetError> {
    primitives
        .iter()
        .try_fold(0, |total, p| Ok(total + rasterize(grid, p)?))
}
