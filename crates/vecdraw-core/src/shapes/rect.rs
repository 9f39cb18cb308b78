//! Axis-aligned rectangle shape.

use super::{round, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{distance_to_segment, is_point_inside_rect, rect_from_points, translate_point};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle spanned by two opposite corners.
///
/// Corners are stored exactly as drawn; normalization happens on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub(crate) id: ShapeId,
    /// Corner where the drag started.
    pub corner1: Point,
    /// Opposite corner.
    pub corner2: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl RectShape {
    /// Create a new rectangle.
    pub fn new(id: impl Into<ShapeId>, corner1: Point, corner2: Point, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            corner1,
            corner2,
            style,
        }
    }

    /// Normalized bounds (non-negative width and height).
    pub fn as_rect(&self) -> Rect {
        rect_from_points(self.corner1, self.corner2)
    }

    /// The four edges as `(start, end)` pairs: top, bottom, left, right.
    fn edges(&self) -> [(Point, Point); 4] {
        let r = self.as_rect();
        let tl = Point::new(r.x0, r.y0);
        let tr = Point::new(r.x1, r.y0);
        let bl = Point::new(r.x0, r.y1);
        let br = Point::new(r.x1, r.y1);
        [(tl, tr), (bl, br), (tl, bl), (tr, br)]
    }
}

impl ShapeTrait for RectShape {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rect
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.style.fill_enabled && is_point_inside_rect(point, self.as_rect()) {
            return true;
        }
        self.edges()
            .iter()
            .any(|&(a, b)| distance_to_segment(point, a, b) <= tolerance)
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            corner1: translate_point(self.corner1, dx, dy),
            corner2: translate_point(self.corner2, dx, dy),
            ..self.clone()
        }
    }

    fn position(&self) -> Option<Point> {
        Some(self.as_rect().center())
    }

    fn label(&self) -> &'static str {
        "Rectangle"
    }

    fn sub_label(&self) -> String {
        let r = self.as_rect();
        format!(
            "x={}, y={}, w={}, h={}",
            round(r.x0),
            round(r.y0),
            round(r.width()),
            round(r.height())
        )
    }
}
