//! Serialization and deserialization for drawing files.
//!
//! Drawings are stored as pretty-printed JSON. Each shape record carries its
//! kind, the registry counts it was built with, its vertices and, once
//! finalized, the metrics frozen at that moment. Loading never re-derives
//! stored metrics.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use geodraw_core::{PlacementRules, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::RecordError;
use crate::metrics::Metrics;
use crate::model::ShapeKind;
use crate::shape::Shape;

/// Drawing file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete drawing file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingFile {
    pub version: String,
    pub metadata: DrawingMetadata,
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

/// Drawing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub kind: ShapeKind,
    pub free_points: usize,
    pub max_vertices: usize,
    #[serde(default)]
    pub vertices: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

impl DrawingFile {
    /// Create an empty drawing file
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DrawingMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            shapes: Vec::new(),
        }
    }

    /// Save drawing to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize drawing")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write drawing file {}", path.display()))?;
        info!("Saved {} shapes to {}", self.shapes.len(), path.display());
        Ok(())
    }

    /// Load drawing from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drawing file {}", path.display()))?;
        let mut drawing: DrawingFile =
            serde_json::from_str(&content).context("Failed to parse drawing file")?;

        // Update modified timestamp
        drawing.metadata.modified = Utc::now();
        info!("Loaded {} shape records from {}", drawing.shapes.len(), path.display());
        Ok(drawing)
    }

    /// Convert a live shape to its record
    pub fn from_shape(shape: &Shape) -> ShapeRecord {
        ShapeRecord {
            kind: shape.kind(),
            free_points: shape.free_points(),
            max_vertices: shape.max_vertices(),
            vertices: shape.vertices().to_vec(),
            metrics: shape.metrics().copied(),
        }
    }

    /// Convert a record back to a live shape placed under `rules`.
    ///
    /// The record must agree with the registry for its kind, hold exactly
    /// `max_vertices` vertices and carry metrics of its own family, if any.
    /// A record saved without metrics gets them computed from its vertices.
    pub fn to_shape(record: &ShapeRecord, rules: PlacementRules) -> Result<Shape, RecordError> {
        let kind = record.kind;
        check_count(kind, "free_points", kind.free_points(), record.free_points)?;
        check_count(kind, "max_vertices", kind.max_vertices(), record.max_vertices)?;

        let count = record.vertices.len();
        let max = kind.max_vertices();
        if count > max {
            return Err(RecordError::TooManyVertices { kind, count, max });
        }
        if count < max {
            return Err(RecordError::Unfinished { kind, count, max });
        }

        let metrics = match record.metrics {
            Some(m) if m.lengths.family() != kind.family() => {
                return Err(RecordError::MetricsFamilyMismatch { kind });
            }
            Some(m) => m,
            None => Metrics::compute(kind.family(), &record.vertices),
        };

        Ok(Shape::from_parts(kind, record.vertices.clone(), Some(metrics), rules))
    }
}

fn check_count(
    kind: ShapeKind,
    field: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), RecordError> {
    if expected != found {
        return Err(RecordError::RegistryMismatch {
            kind,
            field,
            expected,
            found,
        });
    }
    Ok(())
}
