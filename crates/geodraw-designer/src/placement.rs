//! Vertex placement protocol.
//!
//! Each accepted pointer position commits exactly one vertex. The first
//! `free_points` vertices are the cursor itself; later ones come from the
//! kind's resolver. Before committing, the candidate is checked against the
//! committed vertices only:
//!
//! - the second vertex must be at least `min_vertex_spacing` from the anchor;
//! - any later vertex must keep `min_edge_clearance` from every committed
//!   edge `v[i] v[i + 1]` (the closing edge does not exist yet).
//!
//! A rejection leaves the shape untouched.

use geodraw_core::{point_to_line_distance, point_to_segment_distance, EdgeClearance, Point};
use tracing::{debug, info};

use crate::error::PlacementError;
use crate::metrics::Metrics;
use crate::shape::Shape;

impl Shape {
    /// Offers one pointer position to the shape.
    ///
    /// Returns `Ok(true)` when this call placed the last vertex, in which
    /// case the metrics are now available, and `Ok(false)` for any other
    /// accepted vertex.
    pub fn append_point(&mut self, cursor: Point) -> Result<bool, PlacementError> {
        let count = self.vertices.len();
        let max = self.max_vertices();
        if count >= max {
            return Err(PlacementError::ShapeFinalized { vertices: max });
        }

        let vertex = if count == 0 {
            cursor
        } else if count < self.free_points() {
            if count == 1 {
                self.check_spacing(cursor)?;
            } else {
                self.check_clearance(cursor)?;
            }
            cursor
        } else {
            let candidate = self.next_candidate(cursor).unwrap_or(cursor);
            self.check_clearance(candidate)?;
            candidate
        };

        self.vertices.push(vertex);
        debug!(
            "{}: vertex #{} placed at {}",
            self.kind(),
            self.vertices.len(),
            vertex
        );

        if self.vertices.len() == max {
            self.finalize();
            return Ok(true);
        }
        Ok(false)
    }

    /// The vertex the next append would try to commit for `cursor`.
    ///
    /// `None` once the shape is finalized. The candidate may still be
    /// rejected by the spacing and clearance rules.
    pub fn next_candidate(&self, cursor: Point) -> Option<Point> {
        let count = self.vertices.len();
        if count >= self.max_vertices() {
            None
        } else if count < self.free_points() {
            Some(cursor)
        } else {
            self.kind().resolve(&self.vertices, cursor)
        }
    }

    fn check_spacing(&self, candidate: Point) -> Result<(), PlacementError> {
        let min = self.rules().min_vertex_spacing;
        let distance = self.vertices[0].distance_to(&candidate);
        if distance < min {
            debug!("{}: rejected {}, {:.2} from anchor", self.kind(), candidate, distance);
            return Err(PlacementError::TooCloseToVertex { distance, min });
        }
        Ok(())
    }

    fn check_clearance(&self, candidate: Point) -> Result<(), PlacementError> {
        let rules = self.rules();
        let measure = match rules.edge_clearance {
            EdgeClearance::Segment => point_to_segment_distance,
            EdgeClearance::Line => point_to_line_distance,
        };

        for (edge, pair) in self.vertices.windows(2).enumerate() {
            let distance = measure(candidate, pair[0], pair[1]);
            if distance < rules.min_edge_clearance {
                debug!(
                    "{}: rejected {}, {:.2} from edge {}",
                    self.kind(),
                    candidate,
                    distance,
                    edge
                );
                return Err(PlacementError::TooCloseToEdge {
                    edge,
                    candidate,
                    distance,
                    min: rules.min_edge_clearance,
                });
            }
        }
        Ok(())
    }

    fn finalize(&mut self) {
        let metrics = Metrics::compute(self.family(), &self.vertices);
        info!(
            "{} finalized: area {:.2}, perimeter {:.2}",
            self.kind(),
            metrics.area,
            metrics.perimeter
        );
        self.metrics = Some(metrics);
    }
}
