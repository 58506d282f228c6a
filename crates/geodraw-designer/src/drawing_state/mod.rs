//! Drawing state manager.
//!
//! Owns the finished shapes of one drawing and the single shape under
//! construction. Callers feed pointer positions through
//! [`DrawingState::append_point`]; the shape moves into the collection the
//! moment its last vertex is placed.
//!
//! This module is split into submodules:
//! - `shapes`: construction, removal, translation, summaries
//! - `file_io`: save/load operations

mod file_io;
mod shapes;

use geodraw_core::PlacementRules;
use std::path::PathBuf;

use crate::error::DrawingError;
use crate::shape::Shape;

/// The construction slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Construction {
    /// No shape is being built
    #[default]
    Idle,
    /// A shape is collecting vertices
    Building(Shape),
}

impl Construction {
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Construction::Idle => None,
            Construction::Building(shape) => Some(shape),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Construction::Idle)
    }
}

/// A drawing: finished shapes plus the construction slot.
#[derive(Debug, Clone)]
pub struct DrawingState {
    pub(crate) shapes: Vec<Shape>,
    pub(crate) construction: Construction,
    rules: PlacementRules,
    pub decimal_places: usize,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub drawing_name: String,
}

impl DrawingState {
    /// Creates an empty drawing with default placement rules.
    pub fn new() -> Self {
        Self::with_rules(PlacementRules::default())
    }

    pub fn with_rules(rules: PlacementRules) -> Self {
        Self {
            shapes: Vec::new(),
            construction: Construction::Idle,
            rules,
            decimal_places: 2,
            current_file_path: None,
            is_modified: false,
            drawing_name: "Untitled".to_string(),
        }
    }

    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    /// Replaces the placement rules, including for a shape already being
    /// built.
    pub fn set_rules(&mut self, rules: PlacementRules) {
        self.rules = rules;
        if let Construction::Building(shape) = &mut self.construction {
            shape.set_rules(rules);
        }
    }

    pub fn construction(&self) -> &Construction {
        &self.construction
    }

    /// The shape under construction, if any.
    pub fn current_shape(&self) -> Option<&Shape> {
        self.construction.shape()
    }

    pub fn is_building(&self) -> bool {
        !self.construction.is_idle()
    }

    /// Finished shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Result<&Shape, DrawingError> {
        self.shapes
            .get(index)
            .ok_or(DrawingError::ShapeIndexOutOfRange {
                index,
                len: self.shapes.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub(crate) fn shape_mut(&mut self, index: usize) -> Result<&mut Shape, DrawingError> {
        let len = self.shapes.len();
        self.shapes
            .get_mut(index)
            .ok_or(DrawingError::ShapeIndexOutOfRange { index, len })
    }
}

impl Default for DrawingState {
    fn default() -> Self {
        Self::new()
    }
}
