//! Pointer and viewport input
//!
//! Handlers mutate the store synchronously; there is no queue or debounce.

use glam::Vec2;
use rand::Rng;

use super::entity::{Droplet, Ring};
use super::state::FluidState;
use crate::consts::{CLICK_RING_RADIUS, CLICK_SCATTER_MIN, CLICK_SCATTER_SPREAD};
use crate::renderer::Surface;
use crate::renderer::shapes::scatter_ring;

/// Input the page forwards to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a client position
    PointerMove(Vec2),
    /// Click at a client position
    Click(Vec2),
    /// Viewport changed size (or the page finished loading)
    Resize { width: u32, height: u32 },
}

impl FluidState {
    /// Dispatch one input event. Returns the number of entities spawned.
    pub fn handle_input<S: Surface + ?Sized>(&mut self, event: InputEvent, surface: &mut S) -> usize {
        match event {
            InputEvent::PointerMove(pos) => self.pointer_moved(pos) as usize,
            InputEvent::Click(pos) => self.clicked(pos),
            InputEvent::Resize { width, height } => {
                self.resize(surface, width, height);
                0
            }
        }
    }

    /// Maybe drop a droplet at the pointer. Returns whether one was spawned.
    pub fn pointer_moved(&mut self, pos: Vec2) -> bool {
        let chance = self.settings.effective_move_spawn_chance();
        if chance > 0.0 && self.rng.random_bool(chance) {
            let droplet = Droplet::new(pos, &mut self.rng);
            self.store.push(droplet);
            true
        } else {
            false
        }
    }

    /// Spawn a ring at `pos` plus droplets scattered around it.
    /// Returns the number of entities spawned.
    pub fn clicked(&mut self, pos: Vec2) -> usize {
        let ring = Ring::new(pos, CLICK_RING_RADIUS, &mut self.rng);
        self.store.push(ring);

        let distances: Vec<f32> = (0..self.settings.effective_click_droplets())
            .map(|_| CLICK_SCATTER_MIN + self.rng.random::<f32>() * CLICK_SCATTER_SPREAD)
            .collect();
        for spot in scatter_ring(pos, &distances) {
            let droplet = Droplet::new(spot, &mut self.rng);
            self.store.push(droplet);
        }

        1 + distances.len()
    }

    /// Fit the viewport and surface to `width`×`height`; the next frame
    /// paints the new area.
    pub fn resize<S: Surface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        surface.resize(width, height);
        self.viewport = Vec2::new(width as f32, height as f32);
        log::info!("Viewport resized to {}x{}", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::settings::Settings;
    use crate::sim::entity::Entity;

    fn state(seed: u64) -> FluidState {
        FluidState::new(seed, Settings::default(), 800, 600)
    }

    #[test]
    fn test_click_spawns_ring_and_eight_droplets() {
        let mut state = state(42);
        let p = Vec2::new(400.0, 300.0);
        assert_eq!(state.clicked(p), 9);
        assert_eq!(state.entity_count(), 9);

        let entities = state.store.as_slice();
        assert!(matches!(&entities[0], Entity::Ring(r) if r.pos == p && r.radius == CLICK_RING_RADIUS));
        for e in &entities[1..] {
            assert!(matches!(e, Entity::Droplet(_)));
            let d = e.pos().distance(p);
            assert!((30.0 - 1e-3..50.0 + 1e-3).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn test_click_droplets_evenly_spaced() {
        let mut state = state(5);
        let p = Vec2::new(100.0, 100.0);
        state.clicked(p);
        for (i, e) in state.store.as_slice()[1..].iter().enumerate() {
            let offset = e.pos() - p;
            let expected = std::f32::consts::TAU * i as f32 / 8.0;
            let angle = offset.y.atan2(offset.x).rem_euclid(std::f32::consts::TAU);
            let diff = (angle - expected).abs();
            assert!(diff < 1e-3 || (diff - std::f32::consts::TAU).abs() < 1e-3);
        }
    }

    #[test]
    fn test_move_spawn_rate_near_thirty_percent() {
        let mut state = state(1234);
        let samples = 20_000;
        let spawned = (0..samples)
            .filter(|i| state.pointer_moved(Vec2::new(*i as f32 % 800.0, 10.0)))
            .count();
        let rate = spawned as f64 / samples as f64;
        assert!((rate - 0.3).abs() < 0.02, "rate {rate}");
        assert_eq!(state.entity_count(), spawned);
    }

    #[test]
    fn test_reduced_motion_suppresses_move_spawns() {
        let mut state = FluidState::new(
            3,
            Settings {
                reduced_motion: true,
                ..Default::default()
            },
            800,
            600,
        );
        for _ in 0..1000 {
            assert!(!state.pointer_moved(Vec2::ZERO));
        }
        // Clicks still work
        assert_eq!(state.clicked(Vec2::ZERO), 9);
    }

    #[test]
    fn test_oversized_settings_do_not_panic() {
        let mut state = FluidState::new(
            8,
            Settings {
                move_spawn_chance: 3.0,
                click_droplets: usize::MAX,
                ..Default::default()
            },
            800,
            600,
        );
        assert_eq!(state.settings.click_droplets, crate::consts::MAX_CLICK_DROPLETS);
        assert!(state.pointer_moved(Vec2::ZERO));
        assert_eq!(state.clicked(Vec2::ZERO), 1 + crate::consts::MAX_CLICK_DROPLETS);

        // Fields changed after construction are bounded too
        state.settings.click_droplets = usize::MAX;
        state.settings.move_spawn_chance = 9.0;
        assert!(state.pointer_moved(Vec2::ZERO));
        assert_eq!(state.clicked(Vec2::ZERO), 1 + crate::consts::MAX_CLICK_DROPLETS);
    }

    #[test]
    fn test_handle_input_resize() {
        let mut state = state(0);
        let mut surface = RecordingSurface::new(800, 600);
        let spawned = state.handle_input(
            InputEvent::Resize {
                width: 1024,
                height: 768,
            },
            &mut surface,
        );
        assert_eq!(spawned, 0);
        assert_eq!(state.viewport, Vec2::new(1024.0, 768.0));
        assert_eq!(surface.size(), (1024, 768));
    }
}
