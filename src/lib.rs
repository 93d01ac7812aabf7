//! Liquid Folio - portfolio page with a liquid wave backdrop
//!
//! Core modules:
//! - `sim`: Wave/droplet simulation (entities, store, per-frame step, input)
//! - `renderer`: 2D drawing surface abstraction and backends
//! - `page`: DOM interaction effects around the canvas
//! - `settings`: Tunable parameters, parsed from the page

pub mod color;
pub mod page;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{FluidState, FrameStats};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Ring growth per frame (pixels)
    pub const RING_SPEED: f32 = 3.0;
    /// Ring opacity at spawn
    pub const RING_START_OPACITY: f32 = 0.7;
    /// Ring opacity lost every frame
    pub const RING_FADE: f32 = 0.01;
    /// Max radius as a multiple of the spawn radius
    pub const RING_GROWTH_LIMIT: f32 = 4.0;
    /// Ring hues are drawn from [base, base + spread)
    pub const RING_HUE_BASE: f32 = 180.0;
    pub const RING_HUE_SPREAD: f32 = 180.0;
    /// Spawn radius of the ring a click produces
    pub const CLICK_RING_RADIUS: f32 = 120.0;

    /// Extra decay once an entity outgrows its max radius
    pub const OVERGROWN_FADE: f32 = 0.02;

    /// Droplet max radius in [min, min + spread)
    pub const DROPLET_MIN_MAX_RADIUS: f32 = 40.0;
    pub const DROPLET_MAX_RADIUS_SPREAD: f32 = 80.0;
    /// Droplet growth in [min, min + spread)
    pub const DROPLET_MIN_SPEED: f32 = 1.0;
    pub const DROPLET_SPEED_SPREAD: f32 = 2.0;
    /// Droplet life lost per frame in [min, min + spread)
    pub const DROPLET_MIN_DECAY: f32 = 0.005;
    pub const DROPLET_DECAY_SPREAD: f32 = 0.015;
    /// Perimeter resolution and wobble
    pub const DROPLET_SEGMENTS: usize = 32;
    pub const DROPLET_LOBES: f32 = 4.0;
    pub const DROPLET_WAVE_HEIGHT: f32 = 8.0;
    pub const DROPLET_PHASE_STEP: f32 = 0.1;
    /// Alpha at full life
    pub const DROPLET_ALPHA: f32 = 0.6;
    pub const DROPLET_LINE_WIDTH: f32 = 3.0;
    pub const DROPLET_GLOW_ALPHA: f32 = 0.1;

    /// Entities closer than this get linked
    pub const LINK_DISTANCE: f32 = 150.0;
    /// Both ends must be brighter than this to link
    pub const LINK_MIN_INTENSITY: f32 = 0.2;
    /// Link alpha = (a + b) * scale
    pub const LINK_ALPHA_SCALE: f32 = 0.3;
    /// Control point jitter, full width (±half)
    pub const LINK_JITTER: f32 = 50.0;
    pub const LINK_LINE_WIDTH: f32 = 2.0;

    /// Chance a pointer move spawns a droplet
    pub const MOVE_SPAWN_CHANCE: f64 = 0.3;
    /// Droplets scattered around a click
    pub const CLICK_DROPLETS: usize = 8;
    /// Upper bound for a configured click burst
    pub const MAX_CLICK_DROPLETS: usize = 64;
    /// Scatter distance in [min, min + spread)
    pub const CLICK_SCATTER_MIN: f32 = 30.0;
    pub const CLICK_SCATTER_SPREAD: f32 = 20.0;

    /// Alpha of the black overlay painted each frame
    pub const TRAIL_ALPHA: f32 = 0.05;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
