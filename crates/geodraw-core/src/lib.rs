//! # GeoDraw Core
//!
//! Core types shared by the GeoDraw crates: integer lattice points, the
//! planar geometry helpers the constraint resolvers are built from, and the
//! placement rules that decide whether a vertex may be committed.

pub mod error;
pub mod geometry;
pub mod point;
pub mod rules;

pub use error::{Error, Result};
pub use geometry::{
    angle, dominant_axis, edge_length, midpoint, point_to_line_distance,
    point_to_segment_distance, rescale_from, slope, x_on_line, y_on_line, Axis,
};
pub use point::Point;
pub use rules::{EdgeClearance, PlacementRules};
