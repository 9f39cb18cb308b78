//! View scale for the drawing surface.

use crate::config::EditorConfig;
use crate::geometry::clamp;
use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Zoom-only view transform.
///
/// Input adapters use it to convert pointer positions into document
/// coordinates before calling the engine; the engine itself never scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Current zoom factor (1.0 = 100%).
    pub view_scale: f64,
    /// Minimum allowed zoom level.
    pub min_zoom: f64,
    /// Maximum allowed zoom level.
    pub max_zoom: f64,
    /// Factor applied per zoom step.
    pub zoom_step: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera using the zoom limits of `config`.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            view_scale: 1.0,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Document-to-screen transform.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.view_scale)
    }

    /// Screen-to-document transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.view_scale)
    }

    /// Convert a screen point to document coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a document point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.transform() * world_point
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.view_scale * self.zoom_step);
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.view_scale / self.zoom_step);
    }

    /// Set the scale, clamped to the zoom range and rounded to two decimals.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = clamp(scale, self.min_zoom, self.max_zoom);
        self.view_scale = (clamped * 100.0).round() / 100.0;
    }

    /// Reset to 100%.
    pub fn reset(&mut self) {
        self.view_scale = 1.0;
    }

    /// Zoom as a whole percentage, for display.
    pub fn zoom_percent(&self) -> i64 {
        (self.view_scale * 100.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera::new();
        assert!((camera.view_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(camera.zoom_percent(), 100);
    }

    #[test]
    fn test_zoom_steps_round_to_two_decimals() {
        let mut camera = Camera::new();
        camera.zoom_in();
        assert!((camera.view_scale - 1.1).abs() < 1e-12);
        camera.zoom_in();
        assert!((camera.view_scale - 1.21).abs() < 1e-12);
        camera.zoom_out();
        assert!((camera.view_scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_out();
        }
        assert!((camera.view_scale - camera.min_zoom).abs() < f64::EPSILON);

        for _ in 0..100 {
            camera.zoom_in();
        }
        assert!((camera.view_scale - camera.max_zoom).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_in_leaves_smallest_allowed_scale() {
        let config = EditorConfig {
            min_zoom: crate::config::MIN_ZOOM_FLOOR,
            ..EditorConfig::default()
        };
        let mut camera = Camera::from_config(&config);
        for _ in 0..100 {
            camera.zoom_out();
        }
        assert!((camera.view_scale - 0.05).abs() < f64::EPSILON);
        camera.zoom_in();
        assert!(camera.view_scale > 0.05);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let mut camera = Camera::new();
        camera.set_scale(1.5);

        let original = Point::new(123.0, 456.0);
        let world = camera.screen_to_world(original);
        assert!((world.x - 82.0).abs() < 1e-10);
        let back = camera.world_to_screen(world);
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }
}
