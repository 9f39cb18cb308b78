//! Platform-agnostic input events and their routing onto the canvas.
//!
//! Hosts translate their native pointer/keyboard events into [`InputEvent`]
//! (positions already in document coordinates) and feed them to
//! [`InputController::handle`].

use crate::canvas::Canvas;
use crate::shapes::ShapeStyle;
use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Input event delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    DoubleClick(Point),
    /// `key` is the host's key name, e.g. `"z"`, `"Delete"`, `"Enter"`.
    KeyDown {
        key: String,
        modifiers: Modifiers,
    },
    /// Toolbar zoom buttons.
    ZoomIn,
    ZoomOut,
}

/// Routes input events onto canvas operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    /// Apply `event` to `canvas`. `style` is the current style-control state
    /// and is only read by events that create shapes.
    ///
    /// Returns whether the canvas needs a redraw.
    pub fn handle(&mut self, canvas: &mut Canvas, event: InputEvent, style: &ShapeStyle) -> bool {
        match event {
            InputEvent::PointerDown(point) => {
                canvas.pointer_down(point, style);
                true
            }
            InputEvent::PointerMove(point) => {
                canvas.pointer_move(point);
                true
            }
            InputEvent::PointerUp(point) => {
                canvas.pointer_up_at(point);
                true
            }
            InputEvent::DoubleClick(_) => {
                if canvas.current_tool() != ToolKind::Polygon {
                    return false;
                }
                canvas.finalize_polygon();
                true
            }
            InputEvent::KeyDown { key, modifiers } => Self::handle_key(canvas, &key, modifiers),
            InputEvent::ZoomIn => {
                canvas.camera.zoom_in();
                true
            }
            InputEvent::ZoomOut => {
                canvas.camera.zoom_out();
                true
            }
        }
    }

    fn handle_key(canvas: &mut Canvas, key: &str, modifiers: Modifiers) -> bool {
        let key = key.to_lowercase();

        if modifiers.command() && key == "z" {
            return canvas.undo();
        }

        match key.as_str() {
            "delete" | "backspace" => {
                if canvas.current_tool() != ToolKind::Select {
                    return false;
                }
                let had_selection = canvas.selected_shape().is_some();
                canvas.delete_selected();
                had_selection
            }
            "enter" if canvas.current_tool() == ToolKind::Polygon => {
                canvas.finalize_polygon();
                true
            }
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => match ToolKind::from_shortcut(c) {
                        Some(tool) => {
                            canvas.set_tool(tool);
                            true
                        }
                        None => false,
                    },
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::id::SequentialIdGenerator;

    fn setup() -> (InputController, Canvas, ShapeStyle) {
        let canvas = Canvas::new(EditorConfig::default(), Box::new(SequentialIdGenerator::new()))
            .expect("default config is valid");
        (InputController::new(), canvas, ShapeStyle::default())
    }

    fn key(key: &str) -> InputEvent {
        InputEvent::KeyDown {
            key: key.to_string(),
            modifiers: Modifiers::default(),
        }
    }

    fn ctrl(key: &str) -> InputEvent {
        InputEvent::KeyDown {
            key: key.to_string(),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }

    fn click(input: &mut InputController, canvas: &mut Canvas, style: &ShapeStyle, at: Point) {
        input.handle(canvas, InputEvent::PointerDown(at), style);
        input.handle(canvas, InputEvent::PointerUp(at), style);
    }

    #[test]
    fn test_tool_shortcuts() {
        let (mut input, mut canvas, style) = setup();
        let expected = [
            ("v", ToolKind::Select),
            ("P", ToolKind::Point),
            ("l", ToolKind::Line),
            ("c", ToolKind::Circle),
            ("R", ToolKind::Rect),
            ("g", ToolKind::Polygon),
            ("f", ToolKind::Freehand),
        ];
        for (k, tool) in expected {
            assert!(input.handle(&mut canvas, key(k), &style));
            assert_eq!(canvas.current_tool(), tool);
        }
        assert!(!input.handle(&mut canvas, key("x"), &style));
        assert!(!input.handle(&mut canvas, key("Escape"), &style));
        assert_eq!(canvas.current_tool(), ToolKind::Freehand);
    }

    #[test]
    fn test_drag_draws_line() {
        let (mut input, mut canvas, style) = setup();
        input.handle(&mut canvas, InputEvent::PointerDown(Point::new(0.0, 0.0)), &style);
        input.handle(&mut canvas, InputEvent::PointerMove(Point::new(30.0, 0.0)), &style);
        input.handle(&mut canvas, InputEvent::PointerUp(Point::new(40.0, 0.0)), &style);

        assert_eq!(canvas.shapes().len(), 1);
        let crate::shapes::Shape::Line(line) = &canvas.shapes()[0] else {
            panic!("expected a line");
        };
        // The release position is recorded but does not stretch the draft
        assert_eq!(line.end, Point::new(30.0, 0.0));
        assert_eq!(canvas.pointer_position(), Some(Point::new(40.0, 0.0)));
        assert!(!canvas.is_pointer_down());
    }

    #[test]
    fn test_release_without_move_keeps_shape_in_place() {
        let (mut input, mut canvas, style) = setup();
        input.handle(&mut canvas, key("r"), &style);
        input.handle(&mut canvas, InputEvent::PointerDown(Point::new(0.0, 0.0)), &style);
        input.handle(&mut canvas, InputEvent::PointerMove(Point::new(100.0, 50.0)), &style);
        input.handle(&mut canvas, InputEvent::PointerUp(Point::new(100.0, 50.0)), &style);
        let before = canvas.shapes().to_vec();
        let depth = canvas.undo_depth();

        input.handle(&mut canvas, key("v"), &style);
        input.handle(&mut canvas, InputEvent::PointerDown(Point::new(50.0, 25.0)), &style);
        input.handle(&mut canvas, InputEvent::PointerUp(Point::new(53.0, 25.0)), &style);

        assert_eq!(canvas.shapes(), before.as_slice());
        assert_eq!(canvas.undo_depth(), depth);
        assert!(canvas.selected_id().is_some());
    }

    #[test]
    fn test_ctrl_z_undoes() {
        let (mut input, mut canvas, style) = setup();
        input.handle(&mut canvas, key("p"), &style);
        click(&mut input, &mut canvas, &style, Point::new(10.0, 10.0));
        assert_eq!(canvas.shapes().len(), 1);

        // Plain "z" is not bound
        assert!(!input.handle(&mut canvas, key("z"), &style));
        assert_eq!(canvas.shapes().len(), 1);

        assert!(input.handle(&mut canvas, ctrl("Z"), &style));
        assert!(canvas.shapes().is_empty());
        assert!(!input.handle(&mut canvas, ctrl("z"), &style));

        let meta = InputEvent::KeyDown {
            key: "z".to_string(),
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::default()
            },
        };
        click(&mut input, &mut canvas, &style, Point::new(10.0, 10.0));
        assert!(input.handle(&mut canvas, meta, &style));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_delete_only_with_select_tool() {
        let (mut input, mut canvas, style) = setup();
        input.handle(&mut canvas, key("p"), &style);
        click(&mut input, &mut canvas, &style, Point::new(10.0, 10.0));
        assert!(canvas.selected_id().is_some());

        assert!(!input.handle(&mut canvas, key("Delete"), &style));
        assert_eq!(canvas.shapes().len(), 1);

        input.handle(&mut canvas, key("v"), &style);
        click(&mut input, &mut canvas, &style, Point::new(10.0, 10.0));
        assert!(input.handle(&mut canvas, key("Backspace"), &style));
        assert!(canvas.shapes().is_empty());
        assert!(!input.handle(&mut canvas, key("Delete"), &style));
    }

    #[test]
    fn test_enter_and_double_click_finalize_polygon() {
        let (mut input, mut canvas, style) = setup();
        input.handle(&mut canvas, key("g"), &style);
        for p in [Point::new(0.0, 0.0), Point::new(40.0, 0.0), Point::new(20.0, 30.0)] {
            click(&mut input, &mut canvas, &style, p);
        }
        assert!(input.handle(&mut canvas, key("Enter"), &style));
        assert_eq!(canvas.shapes().len(), 1);

        for p in [Point::new(100.0, 0.0), Point::new(140.0, 0.0), Point::new(120.0, 30.0)] {
            click(&mut input, &mut canvas, &style, p);
        }
        let double_click = InputEvent::DoubleClick(Point::new(120.0, 30.0));
        assert!(input.handle(&mut canvas, double_click, &style));
        assert_eq!(canvas.shapes().len(), 2);
    }

    #[test]
    fn test_enter_and_double_click_ignored_outside_polygon_tool() {
        let (mut input, mut canvas, style) = setup();
        assert!(!input.handle(&mut canvas, InputEvent::DoubleClick(Point::ZERO), &style));
        assert!(!input.handle(&mut canvas, key("Enter"), &style));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_zoom_events() {
        let (mut input, mut canvas, style) = setup();
        assert!(input.handle(&mut canvas, InputEvent::ZoomIn, &style));
        assert!((canvas.view_scale() - 1.1).abs() < f64::EPSILON);
        assert!(input.handle(&mut canvas, InputEvent::ZoomOut, &style));
        assert!((canvas.view_scale() - 1.0).abs() < f64::EPSILON);
    }
}
