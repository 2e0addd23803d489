// src/net.rs

//! Net descriptor parser.
//!
//! Reads the XML emitted by the router, e.g.
//!
//! ```xml
//! <net grid_size="3" pin_count="2">
//!     <point x="0" y="0" layer="pins" type="pin" />
//!     <segment x1="0" y1="0" x2="2" y2="0" layer="m2" />
//! </net>
//! ```
//!
//! into a grid size and a flat list of [`Primitive`]s. Only `grid_size` on
//! the root is read; the root tag and its other attributes are ignored, as
//! are child elements other than `point` and `segment`.
//!
//! Unknown `type` / `layer` values are not errors. They parse into the
//! explicit `None` variants and later cover cells without marking them.

use crate::error::{NetError, Origin};
use log::{debug, trace};
use roxmltree::{Document, Node};
use std::num::IntErrorKind;

const GRID_SIZE_ATTR: &str = "grid_size";
const POINT_TAG: &str = "point";
const SEGMENT_TAG: &str = "segment";

/// What a point element stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointKind {
    Pin,
    Via,
    /// Any other `type` value: present in the document, contributes no marker.
    None,
}

impl PointKind {
    fn from_attr(value: &str) -> Self {
        match value {
            "pin" => PointKind::Pin,
            "via" => PointKind::Via,
            _ => PointKind::None,
        }
    }
}

/// Routing layer of a segment element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetalLayer {
    Metal2,
    Metal3,
    /// Any other `layer` value, including the router's `undef`.
    None,
}

impl MetalLayer {
    fn from_attr(value: &str) -> Self {
        match value {
            "m2" => MetalLayer::Metal2,
            "m3" => MetalLayer::Metal3,
            _ => MetalLayer::None,
        }
    }
}

/// One geometric element of the net, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Point {
        x: i64,
        y: i64,
        kind: PointKind,
        origin: Origin,
    },
    Segment {
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        layer: MetalLayer,
        origin: Origin,
    },
}

/// A parsed document: the grid size plus every primitive in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetDescriptor {
    pub size: usize,
    pub primitives: Vec<Primitive>,
}

/// Parses a whole net document. Fails on the first problem found; no
/// partial descriptor is ever returned.
pub fn parse_net(text: &str) -> Result<NetDescriptor, NetError> {
    let doc = Document::parse(text)
        .map_err(|e| NetError::malformed(format!("not a valid XML document: {}", e)))?;
    let root = doc.root_element();
    let size = parse_grid_size(root)?;

    let mut primitives = Vec::new();
    for child in root.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            POINT_TAG => primitives.push(parse_point(&doc, child)?),
            SEGMENT_TAG => primitives.push(parse_segment(&doc, child)?),
            other => debug!(
                "Ignoring unknown element <{}> at {}",
                other,
                describe_pos(&doc, child)
            ),
        }
    }

    debug!(
        "Parsed net: grid_size={}, {} primitives",
        size,
        primitives.len()
    );
    Ok(NetDescriptor { size, primitives })
}

fn parse_grid_size(root: Node) -> Result<usize, NetError> {
    let tag = root.tag_name().name();
    let raw = root.attribute(GRID_SIZE_ATTR).ok_or_else(|| {
        NetError::malformed(format!(
            "root <{}> lacks the `{}` attribute",
            tag, GRID_SIZE_ATTR
        ))
    })?;
    let value: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
        let problem = match e.kind() {
            IntErrorKind::PosOverflow => "is too large",
            IntErrorKind::NegOverflow => "must be positive",
            _ => "must be an integer",
        };
        NetError::malformed(format!(
            "root <{}> attribute `{}` {}, found {:?}",
            tag, GRID_SIZE_ATTR, problem, raw
        ))
    })?;
    if value <= 0 {
        return Err(NetError::malformed(format!(
            "root <{}> attribute `{}` must be positive, found {}",
            tag, GRID_SIZE_ATTR, value
        )));
    }
    usize::try_from(value).map_err(|_| {
        NetError::malformed(format!(
            "root <{}> attribute `{}` is too large: {}",
            tag, GRID_SIZE_ATTR, value
        ))
    })
}

fn parse_point(doc: &Document, node: Node) -> Result<Primitive, NetError> {
    let origin = origin_of(doc, node, POINT_TAG);
    let x = int_attr(node, origin, "x")?;
    let y = int_attr(node, origin, "y")?;
    let kind = PointKind::from_attr(required_attr(node, origin, "type")?);
    trace!("{}: ({}, {}) {:?}", origin, x, y, kind);
    Ok(Primitive::Point { x, y, kind, origin })
}

fn parse_segment(doc: &Document, node: Node) -> Result<Primitive, NetError> {
    let origin = origin_of(doc, node, SEGMENT_TAG);
    let x1 = int_attr(node, origin, "x1")?;
    let y1 = int_attr(node, origin, "y1")?;
    let x2 = int_attr(node, origin, "x2")?;
    let y2 = int_attr(node, origin, "y2")?;
    let layer = MetalLayer::from_attr(required_attr(node, origin, "layer")?);
    trace!(
        "{}: ({}, {})-({}, {}) {:?}",
        origin,
        x1,
        y1,
        x2,
        y2,
        layer
    );
    Ok(Primitive::Segment {
        x1,
        y1,
        x2,
        y2,
        layer,
        origin,
    })
}

fn required_attr<'a>(
    node: Node<'a, '_>,
    origin: Origin,
    attribute: &'static str,
) -> Result<&'a str, NetError> {
    node.attribute(attribute)
        .ok_or(NetError::MissingAttribute { origin, attribute })
}

fn int_attr(node: Node, origin: Origin, attribute: &'static str) -> Result<i64, NetError> {
    let raw = required_attr(node, origin, attribute)?;
    raw.trim().parse().map_err(|e: std::num::ParseIntError| {
        let problem = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "is out of range",
            _ => "must be an integer",
        };
        NetError::malformed(format!(
            "{}: attribute `{}` {}, found {:?}",
            origin, attribute, problem, raw
        ))
    })
}

fn origin_of(doc: &Document, node: Node, tag: &'static str) -> Origin {
    let pos = doc.text_pos_at(node.range().start);
    Origin {
        tag,
        line: pos.row,
        column: pos.col,
    }
}

fn describe_pos(doc: &Document, node: Node) -> String {
    let pos = doc.text_pos_at(node.range().start);
    format!("{}:{}", pos.row, pos.col)
}

#[cfg(test)]
mod tests;
