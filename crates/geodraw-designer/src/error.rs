//! Error types for the designer crate.
//!
//! Placement rejections are ordinary outcomes of pointer input: the vertex
//! list is left untouched and the caller may retry with another position.
//! Degenerate metrics are not errors at all; they surface as NaN values.

use crate::model::ShapeKind;
use geodraw_core::Point;
use thiserror::Error;

/// Why a candidate vertex was not committed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// The second vertex lies too close to the anchor.
    #[error("Too close to point: {distance:.2} is below the minimum spacing of {min}")]
    TooCloseToVertex { distance: f64, min: f64 },

    /// The candidate lies too close to a committed edge.
    ///
    /// `edge` is the index of the edge's first vertex.
    #[error("Too close to edge {edge}: {candidate} is {distance:.2} away, minimum is {min}")]
    TooCloseToEdge {
        edge: usize,
        candidate: Point,
        distance: f64,
        min: f64,
    },

    /// Every vertex of the shape is already placed.
    #[error("Shape is finalized, all {vertices} vertices are placed")]
    ShapeFinalized { vertices: usize },
}

impl PlacementError {
    /// Short machine-readable reason tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TooCloseToVertex { .. } => "too_close_to_vertex",
            Self::TooCloseToEdge { .. } => "too_close_to_edge",
            Self::ShapeFinalized { .. } => "shape_finalized",
        }
    }
}

/// Errors raised by the drawing collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawingError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("No shape is under construction")]
    NoShapeInConstruction,

    #[error("A {kind} is already under construction")]
    ConstructionInProgress { kind: ShapeKind },

    #[error("Shape index {index} out of range, the drawing has {len} shapes")]
    ShapeIndexOutOfRange { index: usize, len: usize },

    #[error("Offset ({dx}, {dy}) would move a vertex outside the coordinate range")]
    OffsetOutOfRange { dx: i32, dy: i32 },
}

/// A shape kind name or menu number that matches nothing in the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown shape kind '{0}'")]
pub struct UnknownShapeKind(pub String);

/// A persisted shape that cannot be turned back into a live one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("{kind} record has {field} = {found}, expected {expected}")]
    RegistryMismatch {
        kind: ShapeKind,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind} record has {count} vertices, at most {max} allowed")]
    TooManyVertices {
        kind: ShapeKind,
        count: usize,
        max: usize,
    },

    /// Drawings hold finished shapes only; a half-built one cannot be
    /// resumed from a file.
    #[error("{kind} record is unfinished, {count} of {max} vertices")]
    Unfinished {
        kind: ShapeKind,
        count: usize,
        max: usize,
    },

    #[error("{kind} record carries metrics of another shape family")]
    MetricsFamilyMismatch { kind: ShapeKind },
}
