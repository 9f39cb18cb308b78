//! Line segment shape.

use super::{round, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{distance, distance_to_segment, translate_point};
use kurbo::{Line as KurboLine, Point};
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line.
    pub fn new(id: impl Into<ShapeId>, start: Point, end: Point, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            style,
        }
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        distance_to_segment(point, self.start, self.end) <= tolerance
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            start: translate_point(self.start, dx, dy),
            end: translate_point(self.end, dx, dy),
            ..self.clone()
        }
    }

    fn position(&self) -> Option<Point> {
        Some(self.midpoint())
    }

    fn label(&self) -> &'static str {
        "Line"
    }

    fn sub_label(&self) -> String {
        format!(
            "Start({},{}) → End({},{})",
            round(self.start.x),
            round(self.start.y),
            round(self.end.x),
            round(self.end.y)
        )
    }
}
