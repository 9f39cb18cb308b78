//! Geometry helpers shared by hit-testing and the editing engine.
//!
//! Everything here is a total function over finite inputs: no state, no errors.

use kurbo::{Point, Rect, Vec2};

/// Denominator guard for the ray-casting intersection formula.
const RAY_CAST_EPSILON: f64 = 1e-7;

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Vector from `b` to `a`.
pub fn subtract(a: Point, b: Point) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Distance from `point` to the closest point on segment `a`–`b`.
///
/// A zero-length segment degrades to the distance to `a`.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    let seg = subtract(b, a);
    let pv = subtract(point, a);
    let len_sq = seg.hypot2();
    let t = if len_sq > 0.0 {
        clamp(pv.dot(seg) / len_sq, 0.0, 1.0)
    } else {
        0.0
    };
    let proj = Point::new(a.x + seg.x * t, a.y + seg.y * t);
    distance(point, proj)
}

/// Inclusive containment test against a normalized rectangle.
///
/// `kurbo::Rect::contains` excludes the far edges, which would make the
/// right and bottom borders of a filled rectangle unpickable.
pub fn is_point_inside_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Ray-casting parity test over a (possibly non-convex) vertex ring.
///
/// Points lying exactly on a horizontal edge or vertex row get whatever
/// answer the formula produces; callers pair this with an edge-distance test.
pub fn is_point_inside_polygon(point: Point, vertices: &[Point]) -> bool {
    let mut inside = false;
    let Some(mut prev) = vertices.last().copied() else {
        return false;
    };
    for &current in vertices {
        let crosses = (current.y > point.y) != (prev.y > point.y);
        if crosses {
            let x_at = (prev.x - current.x) * (point.y - current.y)
                / (prev.y - current.y + RAY_CAST_EPSILON)
                + current.x;
            if point.x < x_at {
                inside = !inside;
            }
        }
        prev = current;
    }
    inside
}

/// Normalize two arbitrary corners into a non-negative-size rectangle.
pub fn rect_from_points(corner1: Point, corner2: Point) -> Rect {
    Rect::from_points(corner1, corner2)
}

/// Shift a point by `(dx, dy)`.
pub fn translate_point(point: Point, dx: f64, dy: f64) -> Point {
    Point::new(point.x + dx, point.y + dy)
}

/// Minimum distance from `point` to any segment of an open polyline.
///
/// Returns infinity when there are fewer than two vertices.
pub fn distance_to_polyline(point: Point, vertices: &[Point]) -> f64 {
    vertices
        .windows(2)
        .map(|w| distance_to_segment(point, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}
