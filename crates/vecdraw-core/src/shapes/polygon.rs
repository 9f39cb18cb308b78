//! Polygon shape, open while being drafted and closed once finalized.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{
    distance_to_polyline, distance_to_segment, is_point_inside_polygon, translate_point,
};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A polygon built click by click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    /// Vertices in drawing order.
    pub vertices: Vec<Point>,
    /// `false` while drafting, `true` once finalized.
    pub is_closed: bool,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Polygon {
    /// Minimum vertex count for a closed polygon.
    pub const MIN_CLOSED_VERTICES: usize = 3;

    /// Start an open draft with a single vertex.
    pub fn draft(id: impl Into<ShapeId>, first: Point, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            vertices: vec![first],
            is_closed: false,
            style,
        }
    }

    /// Build a closed polygon directly (seed data and tests).
    pub fn closed(id: impl Into<ShapeId>, vertices: Vec<Point>, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            vertices,
            is_closed: true,
            style,
        }
    }

    /// Append a vertex to an open draft.
    pub fn push_vertex(&mut self, point: Point) {
        self.vertices.push(point);
    }

    /// Closed copy of this draft, or `None` with too few vertices.
    pub fn to_closed(&self) -> Option<Polygon> {
        (self.vertices.len() >= Self::MIN_CLOSED_VERTICES).then(|| Polygon {
            is_closed: true,
            ..self.clone()
        })
    }

    /// Outline path; closed only when the polygon is finalized.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.vertices.split_first() else {
            return path;
        };
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        if self.is_closed {
            path.close_path();
        }
        path
    }
}

impl ShapeTrait for Polygon {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        if self.vertices.len() < 2 {
            return false;
        }
        if distance_to_polyline(point, &self.vertices) <= tolerance {
            return true;
        }
        if self.is_closed && self.vertices.len() >= Self::MIN_CLOSED_VERTICES {
            let first = self.vertices[0];
            let last = self.vertices[self.vertices.len() - 1];
            if distance_to_segment(point, last, first) <= tolerance {
                return true;
            }
            return self.style.fill_enabled && is_point_inside_polygon(point, &self.vertices);
        }
        false
    }

    fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|&p| translate_point(p, dx, dy))
                .collect(),
            ..self.clone()
        }
    }

    fn position(&self) -> Option<Point> {
        self.vertices.first().copied()
    }

    fn label(&self) -> &'static str {
        if self.is_closed {
            "Polygon"
        } else {
            "Polygon (drafting)"
        }
    }

    fn sub_label(&self) -> String {
        format!("{} points", self.vertices.len())
    }
}
