//! # GeoDraw Designer
//!
//! Interactive construction of triangles, quadrilaterals and ellipses from a
//! stream of pointer positions. Some vertices are placed freely; the rest are
//! derived so the shape keeps its geometric law (equal sides, parallel sides,
//! right angles, axis symmetry).
//!
//! ## Architecture
//!
//! ```text
//! DrawingState (collection + the one shape under construction)
//!   └── Shape (vertex list, phase, frozen metrics)
//!         ├── placement  (spacing / clearance checks, completion)
//!         ├── model      (shape registry + one resolver per kind)
//!         ├── metrics    (lengths, area, perimeter at finalization)
//!         └── preview    (ghost geometry for the live cursor)
//!
//! serialization (versioned JSON drawing files)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geodraw_designer::{Point, Shape, ShapeKind};
//!
//! let mut square = Shape::new(ShapeKind::Square);
//! square.append_point(Point::new(0, 0)).unwrap();
//! square.append_point(Point::new(100, 0)).unwrap();
//! square.append_point(Point::new(60, 40)).unwrap();
//! let finished = square.append_point(Point::new(0, 0)).unwrap();
//!
//! assert!(finished);
//! assert_eq!(square.vertices()[3], Point::new(0, 100));
//! assert_eq!(square.area(), Some(10000.0));
//! ```

pub mod drawing_state;
pub mod error;
pub mod metrics;
pub mod model;
pub mod placement;
pub mod preview;
pub mod serialization;
pub mod shape;

pub use geodraw_core::{EdgeClearance, PlacementRules, Point};

pub use drawing_state::{Construction, DrawingState};
pub use error::{DrawingError, PlacementError, RecordError, UnknownShapeKind};
pub use metrics::{FamilyLengths, Metrics};
pub use model::{Resolver, ShapeFamily, ShapeKind};
pub use preview::{EllipseOutline, Preview, Segment};
pub use serialization::{DrawingFile, DrawingMetadata, ShapeRecord};
pub use shape::{format_decimal, Shape, ShapePhase};
