// src/layout/viewport.rs
//! Pan/zoom transform over the rendered scene.
//!
//! The transform maps simulation space to screen space and never feeds back
//! into the physics.

use serde::Serialize;

use super::node::Point;

pub const ZOOM_STEP: f64 = 1.5;

/// `screen = translate + scale * world`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { k: 1.0, x: 0.0, y: 0.0 };

    #[must_use]
    pub fn apply(&self, world: Point) -> Point {
        Point::new(self.x + self.k * world.x, self.y + self.k * world.y)
    }

    #[must_use]
    pub fn invert(&self, screen: Point) -> Point {
        Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    min_zoom: f64,
    max_zoom: f64,
    transform: Transform,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            width,
            height,
            min_zoom,
            max_zoom,
            transform: Transform::IDENTITY,
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replaces the transform, clamping the scale.
    pub fn set_transform(&mut self, k: f64, x: f64, y: f64) {
        self.transform = Transform {
            k: self.clamp(k),
            x,
            y,
        };
    }

    /// Scales by `factor` keeping `anchor` (screen space) fixed.
    pub fn scale_by(&mut self, factor: f64, anchor: Point) {
        let world = self.transform.invert(anchor);
        let k = self.clamp(self.transform.k * factor);
        self.transform = Transform {
            k,
            x: anchor.x - world.x * k,
            y: anchor.y - world.y * k,
        };
    }

    pub fn zoom_in(&mut self) {
        self.scale_by(ZOOM_STEP, self.screen_center());
    }

    pub fn zoom_out(&mut self) {
        self.scale_by(1.0 / ZOOM_STEP, self.screen_center());
    }

    /// Translate to the canvas center at scale 1.
    pub fn center(&mut self) {
        self.transform = Transform {
            k: 1.0,
            x: self.width / 2.0,
            y: self.height / 2.0,
        };
    }

    /// Zoom level as a rounded percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_percent(&self) -> i64 {
        (self.transform.k * 100.0).round() as i64
    }

    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        self.transform.invert(screen)
    }

    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        self.transform.apply(world)
    }

    fn screen_center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    fn clamp(&self, k: f64) -> f64 {
        if k.is_nan() {
            return 1.0_f64.clamp(self.min_zoom, self.max_zoom);
        }
        k.clamp(self.min_zoom, self.max_zoom)
    }
}
