//! Immediate-mode 2D drawing
//!
//! The simulation draws through the [`Surface`] trait so it can run against
//! a browser canvas or a recording surface (tests, native headless runs).

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};

use glam::Vec2;

use crate::color::Color;

/// Stroke parameters for outlines and curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// A color stop at `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Radial gradient between two concentric circles
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, inner_radius: f32, outer_radius: f32) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            stops: Vec::with_capacity(3),
        }
    }

    /// Builder-style color stop
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push(GradientStop { offset, color });
        self
    }
}

/// A 2D drawing target sized to the viewport.
///
/// `alpha` arguments are the global alpha for that one draw call; surfaces
/// clamp them to [0, 1].
pub trait Surface {
    /// Current backing size in pixels
    fn size(&self) -> (u32, u32);

    /// Resize the backing store; takes effect for the next draw call
    fn resize(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill a circle with a radial gradient
    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient, alpha: f32);

    /// Stroke a closed polygon, optionally filling its interior with a gradient
    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        stroke: Stroke,
        fill: Option<&RadialGradient>,
        alpha: f32,
    );

    /// Stroke a quadratic Bézier curve
    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke, alpha: f32);
}
