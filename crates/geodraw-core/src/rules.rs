//! Placement rules
//!
//! Thresholds applied by the vertex placement protocol before a point is
//! committed. They are plain data so the settings crate can persist them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the distance between a candidate vertex and an existing edge is
/// measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeClearance {
    /// Distance to the finite edge segment
    #[default]
    Segment,
    /// Distance to the infinite line carrying the edge; also refuses points
    /// on an edge's extension
    Line,
}

impl fmt::Display for EdgeClearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Segment => write!(f, "segment"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// Minimum spacing rules for vertex placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRules {
    /// Minimum distance between the anchor and the second vertex (exclusive)
    #[serde(default = "default_min_vertex_spacing")]
    pub min_vertex_spacing: f64,
    /// Minimum distance between a new vertex and any committed edge
    #[serde(default = "default_min_edge_clearance")]
    pub min_edge_clearance: f64,
    /// Distance measure used for the edge clearance test
    #[serde(default)]
    pub edge_clearance: EdgeClearance,
}

fn default_min_vertex_spacing() -> f64 {
    10.0
}
fn default_min_edge_clearance() -> f64 {
    5.0
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self {
            min_vertex_spacing: default_min_vertex_spacing(),
            min_edge_clearance: default_min_edge_clearance(),
            edge_clearance: EdgeClearance::default(),
        }
    }
}

impl PlacementRules {
    /// Validate the thresholds
    pub fn validate(&self) -> Result<()> {
        check_threshold("min_vertex_spacing", self.min_vertex_spacing)?;
        check_threshold("min_edge_clearance", self.min_edge_clearance)?;
        Ok(())
    }
}

fn check_threshold(rule: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidRule {
            rule,
            reason: format!("must be a finite, non-negative distance (got {value})"),
        });
    }
    Ok(())
}
