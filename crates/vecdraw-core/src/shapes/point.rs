//! Point marker shape.

use super::{round, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{distance, translate_point};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A dot drawn at a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointShape {
    pub(crate) id: ShapeId,
    /// Center of the dot.
    pub position: Point,
    /// Dot radius.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl PointShape {
    /// Create a new point marker.
    pub fn new(id: impl Into<ShapeId>, position: Point, radius: f64, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            position,
            radius,
            style,
        }
    }

    /// Marker radius used by the point tool for a given stroke width.
    pub fn radius_for_line_width(line_width: f64) -> f64 {
        (line_width + 1.0).max(2.0)
    }
}

impl ShapeTrait for PointShape {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        distance(point, self.position) <= self.radius + tolerance
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            position: translate_point(self.position, dx, dy),
            ..self.clone()
        }
    }

    fn position(&self) -> Option<Point> {
        Some(self.position)
    }

    fn label(&self) -> &'static str {
        "Point"
    }

    fn sub_label(&self) -> String {
        format!("({}, {})", round(self.position.x), round(self.position.y))
    }
}
