//! Metrics engine
//!
//! Turns the final vertex set of a shape into its family lengths, area and
//! perimeter. Runs exactly once, when the last vertex is committed.
//!
//! Degenerate inputs are not rejected: a collinear triangle or an impossible
//! quadrilateral height yields NaN, which callers display as-is.

use geodraw_core::{edge_length, midpoint, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::model::ShapeFamily;

/// Family-specific lengths frozen at finalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyLengths {
    /// Sides `v0 v1`, `v1 v2`, `v2 v0`.
    Triangle {
        #[serde(with = "nan_as_null")]
        a: f64,
        #[serde(with = "nan_as_null")]
        b: f64,
        #[serde(with = "nan_as_null")]
        c: f64,
    },
    /// Opposite sides `v0 v1` and `v2 v3`, and the height between them.
    Quadrilateral {
        #[serde(with = "nan_as_null")]
        a: f64,
        #[serde(with = "nan_as_null")]
        b: f64,
        #[serde(with = "nan_as_null")]
        h: f64,
    },
    /// Full lengths of both axes.
    Ellipse {
        #[serde(with = "nan_as_null")]
        axis1: f64,
        #[serde(with = "nan_as_null")]
        axis2: f64,
    },
}

impl FamilyLengths {
    pub fn family(&self) -> ShapeFamily {
        match self {
            Self::Triangle { .. } => ShapeFamily::Triangle,
            Self::Quadrilateral { .. } => ShapeFamily::Quadrilateral,
            Self::Ellipse { .. } => ShapeFamily::Ellipse,
        }
    }

    /// Labelled lengths in summary order.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Triangle { a, b, c } => vec![("A", a), ("B", b), ("C", c)],
            Self::Quadrilateral { a, b, h } => vec![("A", a), ("B", b), ("H", h)],
            Self::Ellipse { axis1, axis2 } => vec![("Axis 1", axis1), ("Axis 2", axis2)],
        }
    }
}

/// Area, perimeter and lengths of a finalized shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(with = "nan_as_null")]
    pub area: f64,
    #[serde(with = "nan_as_null")]
    pub perimeter: f64,
    pub lengths: FamilyLengths,
}

impl Metrics {
    /// Computes the metrics of a complete vertex set.
    ///
    /// `vertices` must hold `family.max_vertices()` points in placement order.
    pub fn compute(family: ShapeFamily, vertices: &[Point]) -> Self {
        debug_assert_eq!(vertices.len(), family.max_vertices());
        match family {
            ShapeFamily::Triangle => triangle(vertices),
            ShapeFamily::Quadrilateral => quadrilateral(vertices),
            ShapeFamily::Ellipse => ellipse(vertices),
        }
    }

    /// True when any value came out NaN.
    pub fn is_degenerate(&self) -> bool {
        self.area.is_nan()
            || self.perimeter.is_nan()
            || self.lengths.labelled().iter().any(|(_, v)| v.is_nan())
    }
}

/// Heron's formula over the three sides.
fn triangle(v: &[Point]) -> Metrics {
    let a = edge_length(v[0], v[1]);
    let b = edge_length(v[1], v[2]);
    let c = edge_length(v[2], v[0]);
    let perimeter = a + b + c;
    let s = perimeter / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).sqrt();

    Metrics {
        area,
        perimeter,
        lengths: FamilyLengths::Triangle { a, b, c },
    }
}

/// Trapezoid area `(a + b) * h / 2` with `a = |v0 v1|`, `b = |v2 v3|` and
/// the height recovered from the side `v0 v3`.
fn quadrilateral(v: &[Point]) -> Metrics {
    let a = edge_length(v[0], v[1]);
    let b = edge_length(v[2], v[3]);
    let h = (edge_length(v[0], v[3]).powi(2) - (a - b).abs().powi(2)).sqrt();
    let perimeter = closed_perimeter(v);

    Metrics {
        area: (a + b) * h * 0.5,
        perimeter,
        lengths: FamilyLengths::Quadrilateral { a, b, h },
    }
}

/// Axis lengths from the axis ends; perimeter by the quadratic-mean
/// approximation `2 * pi * sqrt((axis1^2 + axis2^2) / 2)`.
fn ellipse(v: &[Point]) -> Metrics {
    let mid = midpoint(v[0], v[1]);
    let axis1 = edge_length(v[0], v[1]);
    let axis2 = edge_length(mid, v[3]) * 2.0;

    Metrics {
        // Full axes, not semi-axes; kept without the 1/4 factor.
        area: PI * axis1 * axis2,
        perimeter: 2.0 * PI * ((axis1 * axis1 + axis2 * axis2) / 2.0).sqrt(),
        lengths: FamilyLengths::Ellipse { axis1, axis2 },
    }
}

fn closed_perimeter(v: &[Point]) -> f64 {
    v.iter()
        .zip(v.iter().cycle().skip(1))
        .map(|(p, q)| edge_length(*p, *q))
        .sum()
}

/// JSON has no NaN; degenerate values travel as `null`.
pub(crate) mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
