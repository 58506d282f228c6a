//! Shape operations (construct, remove, translate, describe) for drawing state.

use geodraw_core::Point;
use tracing::{debug, info};

use super::{Construction, DrawingState};
use crate::error::DrawingError;
use crate::model::ShapeKind;
use crate::preview::Preview;
use crate::shape::Shape;

impl DrawingState {
    /// Starts building a new shape of `kind`.
    pub fn begin_shape(&mut self, kind: ShapeKind) -> Result<(), DrawingError> {
        if let Construction::Building(current) = &self.construction {
            return Err(DrawingError::ConstructionInProgress {
                kind: current.kind(),
            });
        }
        debug!("Shape selected: {}", kind);
        self.construction = Construction::Building(Shape::with_rules(kind, *self.rules()));
        Ok(())
    }

    /// Offers a pointer position to the shape under construction.
    ///
    /// Returns `Ok(true)` when the shape was completed by this point and has
    /// joined the drawing.
    pub fn append_point(&mut self, cursor: Point) -> Result<bool, DrawingError> {
        let Construction::Building(shape) = &mut self.construction else {
            return Err(DrawingError::NoShapeInConstruction);
        };

        if !shape.append_point(cursor)? {
            return Ok(false);
        }

        if let Construction::Building(done) = std::mem::take(&mut self.construction) {
            info!("{} added as shape {}", done.kind(), self.shapes.len());
            self.shapes.push(done);
            self.is_modified = true;
        }
        Ok(true)
    }

    /// Ghost preview of the shape under construction.
    pub fn preview(&self, cursor: Point) -> Preview {
        self.current_shape()
            .map_or(Preview::Empty, |shape| shape.preview(cursor))
    }

    /// Discards the shape under construction, returning it.
    pub fn cancel_shape(&mut self) -> Option<Shape> {
        match std::mem::take(&mut self.construction) {
            Construction::Idle => None,
            Construction::Building(shape) => {
                debug!("{} construction cancelled", shape.kind());
                Some(shape)
            }
        }
    }

    /// Removes the finished shape at `index`.
    pub fn remove_shape(&mut self, index: usize) -> Result<Shape, DrawingError> {
        if index >= self.shapes.len() {
            return Err(DrawingError::ShapeIndexOutOfRange {
                index,
                len: self.shapes.len(),
            });
        }
        let shape = self.shapes.remove(index);
        info!("{} removed", shape.kind());
        self.is_modified = true;
        Ok(shape)
    }

    /// Moves the finished shape at `index` by `(dx, dy)`.
    ///
    /// An offset that would push a vertex outside the coordinate range is
    /// refused and the shape stays put.
    pub fn translate_shape(&mut self, index: usize, dx: i32, dy: i32) -> Result<(), DrawingError> {
        self.shape_mut(index)?.translate(dx, dy)?;
        self.is_modified = true;
        Ok(())
    }

    /// Moves every finished shape by `(dx, dy)`. The shape under
    /// construction stays where it is.
    ///
    /// All or nothing: if any shape would leave the coordinate range, no
    /// shape moves.
    pub fn translate_all(&mut self, dx: i32, dy: i32) -> Result<usize, DrawingError> {
        let moved = self
            .shapes
            .iter()
            .map(|shape| shape.translated_vertices(dx, dy))
            .collect::<Result<Vec<_>, _>>()?;
        for (shape, vertices) in self.shapes.iter_mut().zip(moved) {
            shape.vertices = vertices;
        }
        if !self.shapes.is_empty() {
            self.is_modified = true;
        }
        debug!("{} shapes translated by ({}, {})", self.shapes.len(), dx, dy);
        Ok(self.shapes.len())
    }

    /// One indexed summary per finished shape, e.g. `"0: Square\n..."`.
    pub fn summaries(&self) -> Vec<String> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| format!("{}: {}", i, shape.summary(self.decimal_places)))
            .collect()
    }

    /// Removes every shape and abandons any construction.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.construction = Construction::Idle;
    }
}
