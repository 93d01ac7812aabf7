//! Animation settings
//!
//! Read from the canvas's `data-fluid-settings` attribute when present.
//! Never persisted.

use serde::Deserialize;

use crate::consts::*;

/// Tunable animation parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Background ===
    /// Alpha of the black overlay painted every frame (lower = longer trails)
    pub trail_alpha: f32,

    // === Spawning ===
    /// Probability that a pointer move spawns a droplet
    pub move_spawn_chance: f64,
    /// Droplets scattered around each click
    pub click_droplets: usize,

    // === Links ===
    /// Draw curves between nearby entities
    pub links: bool,
    /// Maximum center distance for a link
    pub link_distance: f32,
    /// Minimum decay metric on both ends of a link
    pub link_min_intensity: f32,

    // === Accessibility ===
    /// Reduced motion (no droplets trailing the pointer)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trail_alpha: TRAIL_ALPHA,

            move_spawn_chance: MOVE_SPAWN_CHANCE,
            click_droplets: CLICK_DROPLETS,

            links: true,
            link_distance: LINK_DISTANCE,
            link_min_intensity: LINK_MIN_INTENSITY,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Parse from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded fluid settings");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed fluid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Clamp values into usable ranges
    pub fn sanitized(mut self) -> Self {
        self.trail_alpha = finite_or(self.trail_alpha, TRAIL_ALPHA).clamp(0.0, 1.0);
        self.move_spawn_chance = if self.move_spawn_chance.is_finite() {
            self.move_spawn_chance.clamp(0.0, 1.0)
        } else {
            MOVE_SPAWN_CHANCE
        };
        self.click_droplets = self.click_droplets.min(MAX_CLICK_DROPLETS);
        self.link_distance = finite_or(self.link_distance, LINK_DISTANCE).max(0.0);
        self.link_min_intensity = finite_or(self.link_min_intensity, LINK_MIN_INTENSITY);
        self
    }

    /// Effective pointer-move spawn chance (respects reduced_motion)
    pub fn effective_move_spawn_chance(&self) -> f64 {
        if self.reduced_motion || !self.move_spawn_chance.is_finite() {
            0.0
        } else {
            self.move_spawn_chance.clamp(0.0, 1.0)
        }
    }

    /// Droplets per click, bounded even when fields were set directly
    pub fn effective_click_droplets(&self) -> usize {
        self.click_droplets.min(MAX_CLICK_DROPLETS)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
