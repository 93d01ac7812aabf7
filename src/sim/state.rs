//! Simulation state
//!
//! Everything the frame loop and the input handlers share lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::store::EntityStore;
use crate::settings::Settings;

/// Complete animation state
#[derive(Debug, Clone)]
pub struct FluidState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub settings: Settings,
    /// Live entities
    pub store: EntityStore,
    /// Drawable area in pixels
    pub viewport: Vec2,
    /// Frames stepped so far
    pub frame_count: u64,
    pub(super) rng: Pcg32,
}

impl FluidState {
    /// Create an empty state for a `width`×`height` viewport
    pub fn new(seed: u64, settings: Settings, width: u32, height: u32) -> Self {
        Self {
            seed,
            settings: settings.sanitized(),
            store: EntityStore::new(),
            viewport: Vec2::new(width as f32, height as f32),
            frame_count: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn entity_count(&self) -> usize {
        self.store.len()
    }
}
