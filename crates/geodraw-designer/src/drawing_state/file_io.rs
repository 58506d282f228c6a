//! File I/O operations (save, load, new) for drawing state.

use std::path::Path;
use tracing::warn;

use super::{Construction, DrawingState};
use crate::serialization::DrawingFile;

impl DrawingState {
    /// Save the finished shapes to a drawing file.
    ///
    /// A shape still under construction is not part of the drawing and is
    /// not written.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let mut drawing = DrawingFile::new(&self.drawing_name);
        drawing.shapes = self.shapes.iter().map(DrawingFile::from_shape).collect();

        drawing.save_to_file(&path)?;

        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Replace the drawing with the contents of a file.
    ///
    /// Records that fail validation, unfinished ones included, are skipped
    /// with a warning; returns the number of shapes restored. On error the
    /// current drawing is untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let drawing = DrawingFile::load_from_file(&path)?;

        let mut shapes = Vec::with_capacity(drawing.shapes.len());
        for (index, record) in drawing.shapes.iter().enumerate() {
            match DrawingFile::to_shape(record, *self.rules()) {
                Ok(shape) => shapes.push(shape),
                Err(e) => warn!("Skipping shape record {}: {}", index, e),
            }
        }

        let restored = shapes.len();
        self.shapes = shapes;
        self.construction = Construction::Idle;
        self.drawing_name = drawing.metadata.name;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(restored)
    }

    /// Start a new, empty drawing.
    pub fn new_drawing(&mut self) {
        self.clear();
        self.current_file_path = None;
        self.is_modified = false;
        self.drawing_name = "Untitled".to_string();
    }

    /// Mark drawing as modified.
    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Display name for the drawing, with `*` when there are unsaved changes.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(&self.drawing_name);

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
