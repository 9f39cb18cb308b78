//! vecdraw core library
//!
//! Platform-agnostic shape model, hit-testing and editing engine for the
//! vecdraw vector editor. Rendering and widget wiring live in the host.

pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use camera::Camera;
pub use canvas::{Canvas, CanvasDocument};
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use id::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use input::{InputController, InputEvent, Modifiers};
pub use selection::DragState;
pub use shapes::{SerializableColor, Shape, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
pub use tools::ToolKind;
