//! Circle shape.

use super::{round, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{distance, translate_point};
use kurbo::{Circle as KurboCircle, Point};
use serde::{Deserialize, Serialize};

/// A circle defined by center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle.
    pub fn new(id: impl Into<ShapeId>, center: Point, radius: f64, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            center,
            radius,
            style,
        }
    }

    /// Set the radius so the edge passes through `point`.
    pub fn set_edge_point(&mut self, point: Point) {
        self.radius = distance(self.center, point);
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let center_dist = distance(point, self.center);
        if (center_dist - self.radius).abs() <= tolerance {
            return true;
        }
        self.style.fill_enabled && center_dist <= self.radius
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            center: translate_point(self.center, dx, dy),
            ..self.clone()
        }
    }

    fn position(&self) -> Option<Point> {
        Some(self.center)
    }

    fn label(&self) -> &'static str {
        "Circle"
    }

    fn sub_label(&self) -> String {
        format!(
            "Center({},{}), r={}",
            round(self.center.x),
            round(self.center.y),
            round(self.radius)
        )
    }
}
