//! Canvas document and the editing state machine.

use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::id::{IdGenerator, UuidIdGenerator};
use crate::selection::DragState;
use crate::shapes::{
    Circle, Line, PointShape, Polygon, RectShape, SerializableColor, Shape, ShapeId, ShapeStyle,
};
use crate::tools::{self, ToolKind};
use kurbo::Point;
use std::collections::VecDeque;

/// The committed shapes plus their undo history.
///
/// Undo entries are full deep copies of the shape list. That costs O(n)
/// per entry but makes every rollback exact.
#[derive(Debug, Clone)]
pub struct CanvasDocument {
    /// Committed shapes, back to front.
    shapes: Vec<Shape>,
    /// Snapshots of `shapes`, oldest first.
    undo_stack: VecDeque<Vec<Shape>>,
    /// Maximum number of undo states to keep.
    max_undo: usize,
}

impl CanvasDocument {
    /// Create an empty document keeping at most `max_undo` snapshots.
    pub fn new(max_undo: usize) -> Self {
        Self::with_shapes(Vec::new(), max_undo)
    }

    /// Create a document pre-populated with `shapes`.
    pub fn with_shapes(shapes: Vec<Shape>, max_undo: usize) -> Self {
        Self {
            shapes,
            undo_stack: VecDeque::new(),
            max_undo,
        }
    }

    /// Push a snapshot onto the undo stack, evicting the oldest past the limit.
    ///
    /// `None` snapshots the current shape list.
    pub fn push_undo_snapshot(&mut self, snapshot: Option<Vec<Shape>>) {
        let snapshot = snapshot.unwrap_or_else(|| self.shapes.clone());
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
        }
    }

    /// Restore the most recent snapshot.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop_back() {
            Some(snapshot) => {
                self.shapes = snapshot;
                true
            }
            None => false,
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Number of stored undo snapshots.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Append a shape on top.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a shape from the document.
    pub fn remove_shape(&mut self, id: &str) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Replace the shape at `index`.
    pub fn replace_at(&mut self, index: usize, shape: Shape) {
        if let Some(slot) = self.shapes.get_mut(index) {
            *slot = shape;
        }
    }

    /// Clear all shapes from the document.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Position of a shape in z-order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    /// Get a shape by ID.
    pub fn get_shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Shapes back to front.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the document has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// One editing session: document, tool, drafts, selection and view.
///
/// All mutation goes through the methods below; each runs to completion
/// before the next input event is handled.
#[derive(Debug)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// View scale.
    pub camera: Camera,
    config: EditorConfig,
    ids: Box<dyn IdGenerator>,
    current_tool: ToolKind,
    selected_id: Option<ShapeId>,
    draft_shape: Option<Shape>,
    draft_polygon: Option<Polygon>,
    drag: Option<DragState>,
    is_pointer_down: bool,
    pointer_position: Option<Point>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::build(EditorConfig::default(), Box::new(UuidIdGenerator), Vec::new())
    }
}

impl Canvas {
    /// Create an empty canvas.
    ///
    /// Fails if `config` is not usable.
    pub fn new(config: EditorConfig, ids: Box<dyn IdGenerator>) -> EditorResult<Self> {
        Self::with_shapes(config, ids, Vec::new())
    }

    /// Create a canvas pre-populated with `shapes`.
    ///
    /// The shapes' ids must not collide with anything `ids` will produce.
    pub fn with_shapes(
        config: EditorConfig,
        ids: Box<dyn IdGenerator>,
        shapes: Vec<Shape>,
    ) -> EditorResult<Self> {
        config.validate()?;
        Ok(Self::build(config, ids, shapes))
    }

    /// Create a canvas holding the demo scene, with ids drawn from `ids`.
    pub fn with_seed_scene(config: EditorConfig, ids: Box<dyn IdGenerator>) -> EditorResult<Self> {
        let shapes = seed_shapes(ids.as_ref());
        Self::with_shapes(config, ids, shapes)
    }

    fn build(config: EditorConfig, ids: Box<dyn IdGenerator>, shapes: Vec<Shape>) -> Self {
        Self {
            document: CanvasDocument::with_shapes(shapes, config.max_undo_history),
            camera: Camera::from_config(&config),
            current_tool: config.default_tool,
            config,
            ids,
            selected_id: None,
            draft_shape: None,
            draft_polygon: None,
            drag: None,
            is_pointer_down: false,
            pointer_position: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Committed shapes, back to front.
    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    pub fn current_tool(&self) -> ToolKind {
        self.current_tool
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected shape, if the selection still exists.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.document.get_shape(id))
    }

    /// In-progress drag draft (line, circle, rect or freehand).
    pub fn draft_shape(&self) -> Option<&Shape> {
        self.draft_shape.as_ref()
    }

    /// In-progress open polygon.
    pub fn draft_polygon(&self) -> Option<&Polygon> {
        self.draft_polygon.as_ref()
    }

    pub fn view_scale(&self) -> f64 {
        self.camera.view_scale
    }

    /// Whether a select-tool drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.is_pointer_down
    }

    /// Last pointer position seen, in document coordinates.
    pub fn pointer_position(&self) -> Option<Point> {
        self.pointer_position
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    /// Number of stored undo snapshots.
    pub fn undo_depth(&self) -> usize {
        self.document.undo_depth()
    }

    /// Switch tools, finalizing any polygon draft when leaving the polygon tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        if self.draft_polygon.is_some() && tool != ToolKind::Polygon {
            self.finalize_polygon();
        }
    }

    /// Select a shape from a list view; switches to the select tool.
    pub fn select(&mut self, id: &str) {
        if self.document.get_shape(id).is_none() {
            return;
        }
        self.set_tool(ToolKind::Select);
        self.selected_id = Some(id.to_string());
    }

    /// Clear selection.
    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Pointer pressed at `point` (document coordinates).
    ///
    /// `style` is read fresh from the style controls for every press.
    pub fn pointer_down(&mut self, point: Point, style: &ShapeStyle) {
        self.is_pointer_down = true;
        self.pointer_position = Some(point);

        match self.current_tool {
            ToolKind::Select => self.begin_drag(point),
            ToolKind::Point => {
                let shape = tools::create_point(point, style, self.ids.as_ref());
                self.add_shape(shape);
            }
            ToolKind::Polygon => match &mut self.draft_polygon {
                Some(draft) => draft.push_vertex(point),
                None => {
                    self.draft_polygon =
                        Some(tools::create_polygon_draft(point, style, self.ids.as_ref()));
                }
            },
            tool => self.draft_shape = self.create_draft(tool, point, style),
        }
    }

    /// Pointer moved to `point`.
    pub fn pointer_move(&mut self, point: Point) {
        self.pointer_position = Some(point);
        if !self.is_pointer_down {
            return;
        }

        if self.current_tool == ToolKind::Select {
            self.continue_drag(point);
            return;
        }

        let spacing = self.config.freehand_sample_spacing;
        if let Some(draft) = &mut self.draft_shape {
            tools::update_draft(draft, point, spacing);
        }
    }

    /// Pointer released at `point`. Records the position only; geometry is
    /// left as the last move put it.
    pub fn pointer_up_at(&mut self, point: Point) {
        self.pointer_position = Some(point);
        self.pointer_up();
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) {
        self.is_pointer_down = false;

        if self.current_tool == ToolKind::Select {
            self.end_drag();
            return;
        }

        if let Some(draft) = self.draft_shape.take() {
            self.commit_draft_if_valid(draft);
        }
    }

    /// Create a draft for a drag-drafting tool.
    pub fn create_draft(&self, tool: ToolKind, start: Point, style: &ShapeStyle) -> Option<Shape> {
        tools::create_draft(tool, start, style, self.ids.as_ref())
    }

    /// Update a draft for a pointer move, using this session's sample spacing.
    pub fn update_draft(&self, draft: &mut Shape, point: Point) {
        tools::update_draft(draft, point, self.config.freehand_sample_spacing);
    }

    /// Commit `draft` unless it is degenerate. Returns whether it was committed.
    pub fn commit_draft_if_valid(&mut self, draft: Shape) -> bool {
        if !tools::is_draft_valid(&draft, &self.config) {
            log::debug!("Discarded degenerate {:?} draft {}", draft.kind(), draft.id());
            return false;
        }
        self.add_shape(draft);
        true
    }

    /// Push an undo snapshot, append `shape` on top and select it.
    pub fn add_shape(&mut self, shape: Shape) {
        self.document.push_undo_snapshot(None);
        log::debug!("Committed {:?} {}", shape.kind(), shape.id());
        self.selected_id = Some(shape.id().to_string());
        self.document.add_shape(shape);
    }

    /// Topmost shape hit at `point`, using each shape's own tolerance.
    pub fn pick_shape(&self, point: Point) -> Option<&Shape> {
        self.document.shapes().iter().rev().find(|shape| {
            let tolerance = self.config.hit_tolerance(shape.style().line_width);
            shape.hit_test(point, tolerance)
        })
    }

    /// Copy of `original` moved by `(dx, dy)`.
    pub fn move_shape(original: &Shape, dx: f64, dy: f64) -> Shape {
        original.translate(dx, dy)
    }

    /// Close the polygon draft if it has enough vertices; discard it otherwise.
    pub fn finalize_polygon(&mut self) {
        let Some(draft) = self.draft_polygon.take() else {
            return;
        };
        match draft.to_closed() {
            Some(closed) => {
                self.add_shape(closed.into());
            }
            None => {
                log::debug!(
                    "Abandoned polygon draft with {} vertices",
                    draft.vertices.len()
                );
            }
        }
    }

    /// Delete the selected shape. No-op without a (live) selection.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id.clone() else {
            return;
        };
        if self.document.index_of(&id).is_none() {
            return;
        }
        self.document.push_undo_snapshot(None);
        self.document.remove_shape(&id);
        self.selected_id = None;
        log::debug!("Deleted {}", id);
    }

    /// Roll back to the previous snapshot. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        if !self.document.undo() {
            return false;
        }
        self.selected_id = None;
        self.draft_shape = None;
        self.draft_polygon = None;
        self.drag = None;
        log::debug!("Undo, {} snapshots left", self.document.undo_depth());
        true
    }

    /// Remove every shape (undoable).
    pub fn clear_all(&mut self) {
        self.document.push_undo_snapshot(None);
        self.document.clear();
        self.selected_id = None;
        self.draft_shape = None;
        self.draft_polygon = None;
    }

    /// Push an undo snapshot; `None` snapshots the current shapes.
    pub fn push_undo_snapshot(&mut self, snapshot: Option<Vec<Shape>>) {
        self.document.push_undo_snapshot(snapshot);
    }

    fn begin_drag(&mut self, point: Point) {
        let hit = self.pick_shape(point).cloned();
        self.selected_id = hit.as_ref().map(|s| s.id().to_string());
        self.drag = hit.map(|original| {
            DragState::new(point, original, self.document.shapes().to_vec())
        });
    }

    fn continue_drag(&mut self, point: Point) {
        let Some(drag) = &self.drag else {
            return;
        };
        match self.document.index_of(drag.shape_id()) {
            Some(index) => {
                let moved = drag.moved_to(point);
                self.document.replace_at(index, moved);
            }
            None => log::warn!("Dragged shape {} no longer exists", drag.shape_id()),
        }
    }

    fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let moved = self
            .document
            .get_shape(drag.shape_id())
            .is_some_and(|current| drag.has_moved(current));
        if moved {
            self.document.push_undo_snapshot(Some(drag.shapes_before));
        }
    }
}

/// Demo scene shown when a session starts.
fn seed_shapes(ids: &dyn IdGenerator) -> Vec<Shape> {
    let blue = ShapeStyle {
        stroke_color: SerializableColor::parse("#2f6df6"),
        line_width: 3.0,
        fill_enabled: true,
        fill_color: SerializableColor::parse("rgba(47,109,246,0.20)"),
    };
    let green = ShapeStyle {
        stroke_color: SerializableColor::parse("#32d583"),
        line_width: 4.0,
        fill_enabled: true,
        fill_color: SerializableColor::parse("rgba(50,213,131,0.20)"),
    };
    let amber = ShapeStyle {
        stroke_color: SerializableColor::parse("#ffb020"),
        line_width: 3.0,
        fill_enabled: false,
        fill_color: SerializableColor::transparent(),
    };
    let red = ShapeStyle {
        stroke_color: SerializableColor::parse("#ff4d4d"),
        ..amber.clone()
    };
    let violet = ShapeStyle {
        stroke_color: SerializableColor::parse("#c084fc"),
        line_width: 3.0,
        fill_enabled: true,
        fill_color: SerializableColor::parse("rgba(192,132,252,0.22)"),
    };

    vec![
        RectShape::new(ids.uid("rc"), Point::new(120.0, 100.0), Point::new(420.0, 280.0), blue)
            .into(),
        Circle::new(ids.uid("ci"), Point::new(650.0, 220.0), 90.0, green).into(),
        Line::new(ids.uid("ln"), Point::new(160.0, 420.0), Point::new(520.0, 540.0), amber).into(),
        PointShape::new(ids.uid("pt"), Point::new(820.0, 420.0), 6.0, red).into(),
        Polygon::closed(
            ids.uid("poly"),
            vec![
                Point::new(880.0, 120.0),
                Point::new(1030.0, 150.0),
                Point::new(1080.0, 260.0),
                Point::new(960.0, 300.0),
                Point::new(860.0, 220.0),
            ],
            violet,
        )
        .into(),
    ]
}
