// src/error.rs

//! Error taxonomy for the read-then-render pipeline.
//!
//! Every variant is fatal for the current invocation: nothing is rendered
//! once one of these has been produced.

use std::fmt;
use thiserror::Error;

/// Where a primitive came from in the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    /// Element tag, `point` or `segment`.
    pub tag: &'static str,
    /// 1-based line of the element's start tag.
    pub line: u32,
    /// 1-based column of the element's start tag.
    pub column: u32,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> at {}:{}", self.tag, self.line, self.column)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetError {
    /// The document is not XML, or the root / an attribute value is unusable.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// A primitive references a cell outside `[0, size)`.
    #[error("{}coordinate ({x}, {y}) is outside the {size}x{size} grid", located(.origin))]
    OutOfBounds {
        origin: Option<Origin>,
        x: i64,
        y: i64,
        size: usize,
    },

    /// A point or segment lacks an attribute it needs.
    #[error("{origin}: missing required attribute `{attribute}`")]
    MissingAttribute {
        origin: Origin,
        attribute: &'static str,
    },
}

impl NetError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        NetError::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Attaches the offending element to an `OutOfBounds` raised by the grid.
    pub(crate) fn at(self, at: Origin) -> Self {
        match self {
            NetError::OutOfBounds { x, y, size, .. } => NetError::OutOfBounds {
                origin: Some(at),
                x,
                y,
                size,
            },
            other => other,
        }
    }
}

fn located(origin: &Option<Origin>) -> String {
    match origin {
        Some(o) => format!("{}: ", o),
        None => String::new(),
    }
}
