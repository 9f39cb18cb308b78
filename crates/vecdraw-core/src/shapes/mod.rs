//! Shape definitions for the editor.

mod circle;
mod freehand;
mod line;
mod point;
mod polygon;
mod rect;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use point::PointShape;
pub use polygon::Polygon;
pub use rect::RectShape;

use crate::geometry::clamp;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Smallest stroke width the style controls allow.
pub const MIN_LINE_WIDTH: f64 = 1.0;
/// Largest stroke width the style controls allow.
pub const MAX_LINE_WIDTH: f64 = 50.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a color picker value.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgba(r, g, b, a)` with a
    /// fractional alpha, and `transparent`. Anything else is opaque black.
    pub fn parse(color: &str) -> Self {
        let color = color.trim();
        if color.eq_ignore_ascii_case("transparent") {
            return Self::transparent();
        }

        if let Some(hex) = color.strip_prefix('#') {
            if !hex.is_ascii() {
                return Self::black();
            }
            let channel = |s: &str| u8::from_str_radix(s, 16).ok();
            let parsed = match hex.len() {
                3 => (|| {
                    Some(Self::new(
                        channel(&hex[0..1])? * 17,
                        channel(&hex[1..2])? * 17,
                        channel(&hex[2..3])? * 17,
                        255,
                    ))
                })(),
                6 | 8 => (|| {
                    let a = if hex.len() == 8 { channel(&hex[6..8])? } else { 255 };
                    Some(Self::new(
                        channel(&hex[0..2])?,
                        channel(&hex[2..4])?,
                        channel(&hex[4..6])?,
                        a,
                    ))
                })(),
                _ => None,
            };
            return parsed.unwrap_or_else(Self::black);
        }

        if let Some(body) = color
            .strip_prefix("rgba(")
            .or_else(|| color.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            let rgb = |s: &str| s.parse::<f64>().ok().map(|v| clamp(v, 0.0, 255.0).round() as u8);
            let parsed = match parts.as_slice() {
                [r, g, b] => rgb(*r)
                    .zip(rgb(*g))
                    .zip(rgb(*b))
                    .map(|((r, g), b)| Self::new(r, g, b, 255)),
                [r, g, b, a] => {
                    let alpha = a
                        .parse::<f64>()
                        .ok()
                        .map(|v| (clamp(v, 0.0, 1.0) * 255.0).round() as u8);
                    rgb(*r)
                        .zip(rgb(*g))
                        .zip(rgb(*b))
                        .zip(alpha)
                        .map(|(((r, g), b), a)| Self::new(r, g, b, a))
                }
                _ => None,
            };
            return parsed.unwrap_or_else(Self::black);
        }

        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties captured when a shape is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Stroke width, within `[MIN_LINE_WIDTH, MAX_LINE_WIDTH]`.
    pub line_width: f64,
    /// Whether the interior is filled (and therefore pickable).
    pub fill_enabled: bool,
    /// Fill color, used only when `fill_enabled` is set.
    pub fill_color: SerializableColor,
}

impl ShapeStyle {
    /// Build a style from raw control values, clamping the line width.
    pub fn from_controls(stroke: &str, line_width: f64, fill_enabled: bool, fill: &str) -> Self {
        Self {
            stroke_color: SerializableColor::parse(stroke),
            line_width: clamp(line_width, MIN_LINE_WIDTH, MAX_LINE_WIDTH),
            fill_enabled,
            fill_color: SerializableColor::parse(fill),
        }
    }

    /// Replace the line width, clamped to the allowed range.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = clamp(line_width, MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        self
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.stroke_color.into()
    }

    /// Get the fill color as a peniko Color, if filling is enabled.
    pub fn fill(&self) -> Option<Color> {
        self.fill_enabled.then(|| self.fill_color.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::new(0x2f, 0x6d, 0xf6, 255),
            line_width: 3.0,
            fill_enabled: true,
            fill_color: SerializableColor::new(47, 109, 246, 51),
        }
    }
}

/// Unique identifier for shapes, formatted `<prefix>_<unique>`.
pub type ShapeId = String;

/// Kind discriminator for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Point,
    Line,
    Circle,
    Rect,
    Polygon,
    Freehand,
}

impl ShapeKind {
    /// Prefix used when generating identifiers for this kind.
    pub fn id_prefix(self) -> &'static str {
        match self {
            ShapeKind::Point => "pt",
            ShapeKind::Line => "ln",
            ShapeKind::Circle => "ci",
            ShapeKind::Rect => "rc",
            ShapeKind::Polygon => "poly",
            ShapeKind::Freehand => "fh",
        }
    }
}

/// Behaviour every shape kind provides.
pub trait ShapeTrait: Clone {
    /// Get the unique identifier.
    fn id(&self) -> &str;

    /// Get the kind discriminator.
    fn kind(&self) -> ShapeKind;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut ShapeStyle;

    /// Check if a point (in document coordinates) hits this shape.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;

    /// Copy of this shape with every point shifted by `(dx, dy)`.
    fn translate(&self, dx: f64, dy: f64) -> Self;

    /// Representative anchor point, if the shape has any geometry.
    fn position(&self) -> Option<Point>;

    /// Short display name.
    fn label(&self) -> &'static str;

    /// Geometry summary for list views.
    fn sub_label(&self) -> String;
}

/// Closed set of shapes the editor can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(PointShape),
    Line(Line),
    Circle(Circle),
    Rect(RectShape),
    Polygon(Polygon),
    Freehand(Freehand),
}

macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Shape::Point($s) => $body,
            Shape::Line($s) => $body,
            Shape::Circle($s) => $body,
            Shape::Rect($s) => $body,
            Shape::Polygon($s) => $body,
            Shape::Freehand($s) => $body,
        }
    };
}

impl Shape {
    pub fn id(&self) -> &str {
        dispatch!(self, s => s.id())
    }

    pub fn kind(&self) -> ShapeKind {
        dispatch!(self, s => s.kind())
    }

    pub fn style(&self) -> &ShapeStyle {
        dispatch!(self, s => s.style())
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        dispatch!(self, s => s.style_mut())
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        dispatch!(self, s => s.hit_test(point, tolerance))
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Shape {
        match self {
            Shape::Point(s) => Shape::Point(s.translate(dx, dy)),
            Shape::Line(s) => Shape::Line(s.translate(dx, dy)),
            Shape::Circle(s) => Shape::Circle(s.translate(dx, dy)),
            Shape::Rect(s) => Shape::Rect(s.translate(dx, dy)),
            Shape::Polygon(s) => Shape::Polygon(s.translate(dx, dy)),
            Shape::Freehand(s) => Shape::Freehand(s.translate(dx, dy)),
        }
    }

    pub fn position(&self) -> Option<Point> {
        dispatch!(self, s => s.position())
    }

    pub fn label(&self) -> &'static str {
        dispatch!(self, s => s.label())
    }

    pub fn sub_label(&self) -> String {
        dispatch!(self, s => s.sub_label())
    }

    /// Get the polygon if this shape is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<PointShape> for Shape {
    fn from(s: PointShape) -> Self {
        Shape::Point(s)
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<RectShape> for Shape {
    fn from(s: RectShape) -> Self {
        Shape::Rect(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Freehand> for Shape {
    fn from(s: Freehand) -> Self {
        Shape::Freehand(s)
    }
}

/// Format a coordinate for labels. Halves round towards positive infinity.
pub(crate) fn round(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
