//! Tool system: which tool is active and how drafts are built.

use crate::config::EditorConfig;
use crate::geometry::distance;
use crate::id::IdGenerator;
use crate::shapes::{
    Circle, Freehand, Line, PointShape, Polygon, RectShape, Shape, ShapeKind, ShapeStyle,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    Select,
    Point,
    #[default]
    Line,
    Circle,
    Rect,
    Polygon,
    Freehand,
}

impl ToolKind {
    /// Every tool, in toolbar order.
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Select,
        ToolKind::Point,
        ToolKind::Line,
        ToolKind::Circle,
        ToolKind::Rect,
        ToolKind::Polygon,
        ToolKind::Freehand,
    ];

    /// Keyboard shortcut (upper case).
    pub fn shortcut(self) -> char {
        match self {
            ToolKind::Select => 'V',
            ToolKind::Point => 'P',
            ToolKind::Line => 'L',
            ToolKind::Circle => 'C',
            ToolKind::Rect => 'R',
            ToolKind::Polygon => 'G',
            ToolKind::Freehand => 'F',
        }
    }

    /// Tool bound to a shortcut key, case-insensitive.
    pub fn from_shortcut(key: char) -> Option<ToolKind> {
        let key = key.to_ascii_uppercase();
        Self::ALL.into_iter().find(|tool| tool.shortcut() == key)
    }

    /// Toolbar caption.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select/Move",
            ToolKind::Point => "Point",
            ToolKind::Line => "Line",
            ToolKind::Circle => "Circle",
            ToolKind::Rect => "Rectangle",
            ToolKind::Polygon => "Polygon",
            ToolKind::Freehand => "Freehand",
        }
    }

    /// Shape kind this tool produces, if any.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Point => Some(ShapeKind::Point),
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Circle => Some(ShapeKind::Circle),
            ToolKind::Rect => Some(ShapeKind::Rect),
            ToolKind::Polygon => Some(ShapeKind::Polygon),
            ToolKind::Freehand => Some(ShapeKind::Freehand),
        }
    }

    /// Whether the tool drafts through a press-drag-release gesture.
    pub fn is_drag_drafting(self) -> bool {
        matches!(
            self,
            ToolKind::Line | ToolKind::Circle | ToolKind::Rect | ToolKind::Freehand
        )
    }
}

/// Create the draft a drag-drafting tool starts at `start`.
///
/// Returns `None` for select, point and polygon, which do not draft by drag.
pub fn create_draft(
    tool: ToolKind,
    start: Point,
    style: &ShapeStyle,
    ids: &dyn IdGenerator,
) -> Option<Shape> {
    if !tool.is_drag_drafting() {
        return None;
    }
    let kind = tool.shape_kind()?;
    let id = ids.uid(kind.id_prefix());
    let style = style.clone();
    let shape: Shape = match tool {
        ToolKind::Line => Line::new(id, start, start, style).into(),
        ToolKind::Circle => Circle::new(id, start, 0.0, style).into(),
        ToolKind::Rect => RectShape::new(id, start, start, style).into(),
        ToolKind::Freehand => Freehand::new(id, start, style).into(),
        ToolKind::Select | ToolKind::Point | ToolKind::Polygon => return None,
    };
    Some(shape)
}

/// Build the one-shot point marker committed by the point tool.
pub fn create_point(position: Point, style: &ShapeStyle, ids: &dyn IdGenerator) -> Shape {
    PointShape::new(
        ids.uid(ShapeKind::Point.id_prefix()),
        position,
        PointShape::radius_for_line_width(style.line_width),
        style.clone(),
    )
    .into()
}

/// Start an open polygon draft at `first`.
pub fn create_polygon_draft(first: Point, style: &ShapeStyle, ids: &dyn IdGenerator) -> Polygon {
    Polygon::draft(ids.uid(ShapeKind::Polygon.id_prefix()), first, style.clone())
}

/// Update a draft in place for a pointer move to `point`.
///
/// Lines and rectangles follow the pointer with their second point, circles
/// take the pointer distance as radius, and freehand strokes append a sample
/// only when it is at least `sample_spacing` away from the previous one.
pub fn update_draft(draft: &mut Shape, point: Point, sample_spacing: f64) {
    match draft {
        Shape::Line(line) => line.end = point,
        Shape::Rect(rect) => rect.corner2 = point,
        Shape::Circle(circle) => circle.set_edge_point(point),
        Shape::Freehand(stroke) => {
            stroke.add_sample(point, sample_spacing);
        }
        Shape::Point(_) | Shape::Polygon(_) => {}
    }
}

/// Whether a drag draft is large enough to commit.
pub fn is_draft_valid(draft: &Shape, config: &EditorConfig) -> bool {
    let min = config.min_draft_size;
    match draft {
        Shape::Line(line) => distance(line.start, line.end) >= min,
        Shape::Rect(rect) => {
            let r = rect.as_rect();
            r.width() >= min && r.height() >= min
        }
        Shape::Circle(circle) => circle.radius >= min,
        Shape::Freehand(stroke) => stroke.len() >= 2 && stroke.span() >= config.min_freehand_span,
        Shape::Point(_) | Shape::Polygon(_) => true,
    }
}
