//! Freehand drawing shape.

use super::{ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::{distance, distance_to_polyline, translate_point};
use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A freehand stroke sampled from pointer motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ShapeId,
    /// Sampled points in the stroke.
    pub vertices: Vec<Point>,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Freehand {
    /// Start a stroke at `first`.
    pub fn new(id: impl Into<ShapeId>, first: Point, style: ShapeStyle) -> Self {
        Self::from_points(id, vec![first], style)
    }

    /// Create from existing points.
    pub fn from_points(id: impl Into<ShapeId>, vertices: Vec<Point>, style: ShapeStyle) -> Self {
        Self {
            id: id.into(),
            vertices,
            style,
        }
    }

    /// Append `point` if it lies at least `min_spacing` from the last sample.
    ///
    /// Pointer moves arrive at display rate; gating on distance bounds the
    /// number of stored samples. Returns whether the point was kept.
    pub fn add_sample(&mut self, point: Point, min_spacing: f64) -> bool {
        match self.vertices.last() {
            Some(&last) if distance(last, point) < min_spacing => false,
            _ => {
                self.vertices.push(point);
                true
            }
        }
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the stroke has no samples.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Distance between the first and last sample (0 when fewer than two).
    pub fn span(&self) -> f64 {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(&a), Some(&b)) => distance(a, b),
            _ => 0.0,
        }
    }

    /// Open polyline path through the samples.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        if let Some((first, rest)) = self.vertices.split_first() {
            path.move_to(*first);
            for point in rest {
                path.line_to(*point);
            }
        }
        path
    }
}

impl ShapeTrait for Freehand {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Freehand
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        distance_to_polyline(point, &self.vertices) <= tolerance
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
        "Freehand"
    }

    fn sub_label(&self) -> String {
        format!("{} points", self.vertices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sample_gates_on_spacing() {
        let mut stroke = Freehand::new("fh_1", Point::new(0.0, 0.0), ShapeStyle::default());
        assert!(!stroke.add_sample(Point::new(1.0, 1.0), 1.5));
        assert!(stroke.add_sample(Point::new(1.5, 0.0), 1.5));
        assert!(!stroke.add_sample(Point::new(2.0, 0.0), 1.5));
        assert_eq!(stroke.len(), 2);
    }

    #[test]
    fn test_span() {
        let stroke = Freehand::from_points(
            "fh_1",
            vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0), Point::new(3.0, 4.0)],
            ShapeStyle::default(),
        );
        assert!((stroke.span() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test() {
        let stroke = Freehand::from_points(
            "fh_1",
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
            ShapeStyle::default(),
        );
        assert!(stroke.hit_test(Point::new(50.0, 5.0), 6.0));
        assert!(!stroke.hit_test(Point::new(50.0, 20.0), 6.0));
    }

    #[test]
    fn test_single_sample_never_hit() {
        let stroke = Freehand::new("fh_1", Point::new(0.0, 0.0), ShapeStyle::default());
        assert!(!stroke.hit_test(Point::new(0.0, 0.0), 6.0));
    }

    #[test]
    fn test_no_interior_even_when_filled() {
        let stroke = Freehand::from_points(
            "fh_1",
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
                Point::new(0.0, 100.0),
                Point::new(0.0, 0.0),
            ],
            ShapeStyle::default(),
        );
        assert!(!stroke.hit_test(Point::new(50.0, 50.0), 6.0));
    }
}
