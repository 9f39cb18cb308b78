//! Drag-to-move scratch state for the select tool.

use crate::shapes::Shape;
use kurbo::Point;

/// State captured when a select-tool press lands on a shape.
///
/// Moves are always computed from `original`, so a drag never accumulates
/// per-event rounding error no matter how many move events arrive.
#[derive(Debug, Clone)]
pub struct DragState {
    /// Pointer position at press time.
    pub anchor: Point,
    /// The dragged shape as it was at press time.
    pub original: Shape,
    /// The whole shape list at press time, pushed to undo if the drag moved anything.
    pub shapes_before: Vec<Shape>,
}

impl DragState {
    /// Start a drag of `original` anchored at `anchor`.
    pub fn new(anchor: Point, original: Shape, shapes_before: Vec<Shape>) -> Self {
        Self {
            anchor,
            original,
            shapes_before,
        }
    }

    /// Identifier of the dragged shape.
    pub fn shape_id(&self) -> &str {
        self.original.id()
    }

    /// Offset from the anchor to `pointer`.
    pub fn delta(&self, pointer: Point) -> (f64, f64) {
        (pointer.x - self.anchor.x, pointer.y - self.anchor.y)
    }

    /// Pose of the dragged shape with the pointer at `pointer`.
    pub fn moved_to(&self, pointer: Point) -> Shape {
        let (dx, dy) = self.delta(pointer);
        self.original.translate(dx, dy)
    }

    /// Whether `current` differs from the pose at press time.
    pub fn has_moved(&self, current: &Shape) -> bool {
        *current != self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Line, ShapeStyle};

    fn drag() -> DragState {
        let style = ShapeStyle::default();
        let line: Shape =
            Line::new("ln_1", Point::new(0.0, 0.0), Point::new(10.0, 0.0), style).into();
        DragState::new(Point::new(5.0, 0.0), line.clone(), vec![line])
    }

    #[test]
    fn test_moves_relative_to_original() {
        let d = drag();
        // Many intermediate moves do not compound
        let mut last = d.original.clone();
        for i in 0..100 {
            last = d.moved_to(Point::new(5.0 + i as f64 * 0.1, 0.0));
        }
        let Shape::Line(line) = &last else { panic!("line") };
        assert!((line.start.x - 9.9).abs() < 1e-9);
        assert_eq!(d.shape_id(), "ln_1");
    }

    #[test]
    fn test_has_moved() {
        let d = drag();
        assert!(!d.has_moved(&d.moved_to(Point::new(5.0, 0.0))));
        assert!(d.has_moved(&d.moved_to(Point::new(6.0, 0.0))));
    }
}
