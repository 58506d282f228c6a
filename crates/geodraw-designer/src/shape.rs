//! The shape under construction and, once complete, the finished shape.
//!
//! A shape owns its vertex list privately. Vertices only ever change
//! through [`Shape::append_point`](crate::placement) and
//! [`Shape::translate`], so the count never exceeds the registry maximum and
//! metrics are computed once, from the final vertex set.

use geodraw_core::{PlacementRules, Point};
use std::fmt;

use crate::error::DrawingError;
use crate::metrics::Metrics;
use crate::model::{ShapeFamily, ShapeKind};

/// Construction phase, derived from the vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePhase {
    Empty,
    InProgress,
    Finalized,
}

/// One geometric shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    pub(crate) vertices: Vec<Point>,
    pub(crate) metrics: Option<Metrics>,
    rules: PlacementRules,
}

impl Shape {
    /// An empty shape using the default placement rules.
    pub fn new(kind: ShapeKind) -> Self {
        Self::with_rules(kind, PlacementRules::default())
    }

    pub fn with_rules(kind: ShapeKind, rules: PlacementRules) -> Self {
        Self {
            kind,
            vertices: Vec::with_capacity(kind.max_vertices()),
            metrics: None,
            rules,
        }
    }

    /// Rebuilds a shape from validated persisted parts.
    pub(crate) fn from_parts(
        kind: ShapeKind,
        vertices: Vec<Point>,
        metrics: Option<Metrics>,
        rules: PlacementRules,
    ) -> Self {
        Self {
            kind,
            vertices,
            metrics,
            rules,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn family(&self) -> ShapeFamily {
        self.kind.family()
    }

    pub fn free_points(&self) -> usize {
        self.kind.free_points()
    }

    pub fn max_vertices(&self) -> usize {
        self.kind.max_vertices()
    }

    /// Committed vertices in placement order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn phase(&self) -> ShapePhase {
        match self.vertices.len() {
            0 => ShapePhase::Empty,
            n if n >= self.max_vertices() => ShapePhase::Finalized,
            _ => ShapePhase::InProgress,
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.phase() == ShapePhase::Finalized
    }

    /// Frozen metrics; `None` until the last vertex is placed.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    pub fn area(&self) -> Option<f64> {
        self.metrics.map(|m| m.area)
    }

    pub fn perimeter(&self) -> Option<f64> {
        self.metrics.map(|m| m.perimeter)
    }

    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    /// Replaces the rules used for subsequent placements.
    pub fn set_rules(&mut self, rules: PlacementRules) {
        self.rules = rules;
    }

    /// Moves every vertex by `(dx, dy)`. Metrics are left untouched since
    /// translation preserves every length.
    ///
    /// Fails without moving anything if a vertex would leave the `i32`
    /// coordinate range.
    pub fn translate(&mut self, dx: i32, dy: i32) -> Result<(), DrawingError> {
        self.vertices = self.translated_vertices(dx, dy)?;
        Ok(())
    }

    /// The vertex list `translate` would produce, leaving `self` as is.
    pub(crate) fn translated_vertices(
        &self,
        dx: i32,
        dy: i32,
    ) -> Result<Vec<Point>, DrawingError> {
        self.vertices
            .iter()
            .map(|v| v.checked_offset(dx, dy))
            .collect::<Option<Vec<_>>>()
            .ok_or(DrawingError::OffsetOutOfRange { dx, dy })
    }

    /// Multi-line description: kind, vertices, area, perimeter and lengths.
    ///
    /// Values are rounded to `decimals` places with trailing zeros trimmed;
    /// an unfinished shape shows `-` in place of its metrics.
    pub fn summary(&self, decimals: usize) -> String {
        let fmt_value = |value: Option<f64>| match value {
            Some(v) => format_decimal(v, decimals),
            None => "-".to_string(),
        };

        let vertices: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();

        let mut out = String::new();
        out.push_str(self.kind.name());
        out.push_str("\nVertices: ");
        out.push_str(&vertices.join(" "));
        out.push_str("\nArea: ");
        out.push_str(&fmt_value(self.area()));
        out.push_str("\nPerimeter: ");
        out.push_str(&fmt_value(self.perimeter()));
        out.push_str("\nLengths:");

        if let Some(metrics) = &self.metrics {
            for (label, value) in metrics.lengths.labelled() {
                out.push_str(&format!("\n{label}: {}", format_decimal(value, decimals)));
            }
        } else {
            out.push_str(" -");
        }
        out
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(2))
    }
}

/// Formats `value` with at most `decimals` places, dropping trailing zeros
/// and a dangling decimal point. NaN prints as `NaN`, infinities as `∞`.
pub fn format_decimal(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
