//! Surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{RadialGradient, Stroke, Surface};
use crate::color::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        gradient: RadialGradient,
        alpha: f32,
    },
    Polygon {
        points: Vec<Vec2>,
        stroke: Stroke,
        fill: Option<RadialGradient>,
        alpha: f32,
    },
    Curve {
        from: Vec2,
        control: Vec2,
        to: Vec2,
        stroke: Stroke,
        alpha: f32,
    },
}

/// Headless surface used by tests and the native binary
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Take the commands recorded so far, leaving the surface empty
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn curves(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Curve { .. }))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient, alpha: f32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            gradient: gradient.clone(),
            alpha: alpha.clamp(0.0, 1.0),
        });
    }

    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        stroke: Stroke,
        fill: Option<&RadialGradient>,
        alpha: f32,
    ) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke,
            fill: fill.cloned(),
            alpha: alpha.clamp(0.0, 1.0),
        });
    }

    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke, alpha: f32) {
        self.commands.push(DrawCommand::Curve {
            from,
            control,
            to,
            stroke,
            alpha: alpha.clamp(0.0, 1.0),
        });
    }
}
