//! Canvas 2D backend

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{RadialGradient, Stroke, Surface};
use crate::color::Color;

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn gradient(&self, g: &RadialGradient) -> Result<CanvasGradient, JsValue> {
        let c = g.center.as_dvec2();
        let gradient = self.ctx.create_radial_gradient(
            c.x,
            c.y,
            g.inner_radius.max(0.0) as f64,
            c.x,
            c.y,
            g.outer_radius.max(0.0) as f64,
        )?;
        for stop in &g.stops {
            gradient.add_color_stop(stop.offset, &stop.color.to_css())?;
        }
        Ok(gradient)
    }

    fn begin(&self, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn apply_stroke(&self, stroke: Stroke) {
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient, alpha: f32) {
        let gradient = match self.gradient(gradient) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("Skipping circle, gradient failed: {:?}", e);
                return;
            }
        };

        self.begin(alpha);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        match self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
        {
            Ok(()) => self.ctx.fill(),
            Err(e) => log::warn!("Skipping circle, arc failed: {:?}", e),
        }
        self.ctx.restore();
    }

    fn stroke_polygon(
        &mut self,
        points: &[Vec2],
        stroke: Stroke,
        fill: Option<&RadialGradient>,
        alpha: f32,
    ) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.begin(alpha);
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.stroke();

        if let Some(fill) = fill {
            match self.gradient(fill) {
                Ok(g) => {
                    self.ctx.set_fill_style_canvas_gradient(&g);
                    self.ctx.fill();
                }
                Err(e) => log::warn!("Skipping polygon fill: {:?}", e),
            }
        }
        self.ctx.restore();
    }

    fn stroke_curve(&mut self, from: Vec2, control: Vec2, to: Vec2, stroke: Stroke, alpha: f32) {
        self.begin(alpha);
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.quadratic_curve_to(
            control.x as f64,
            control.y as f64,
            to.x as f64,
            to.y as f64,
        );
        self.ctx.stroke();
        self.ctx.restore();
    }
}
