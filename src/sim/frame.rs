//! Per-frame simulation step
//!
//! Called once per display refresh. There is no fixed timestep: every
//! entity advances by one step per call.

use glam::Vec2;

use super::links::{draw_links, find_links};
use super::state::FluidState;
use crate::color::Color;
use crate::renderer::Surface;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Entities alive after the frame
    pub live: usize,
    /// Entities that expired this frame
    pub removed: usize,
    /// Links drawn
    pub links: usize,
}

/// Advance and render one frame
pub fn frame<S: Surface + ?Sized>(state: &mut FluidState, surface: &mut S) -> FrameStats {
    // Fade previous frames instead of clearing, which leaves trails
    surface.fill_rect(
        Vec2::ZERO,
        state.viewport,
        Color::rgba(0, 0, 0, state.settings.trail_alpha),
    );

    let removed = state.store.advance(surface, &mut state.rng);

    let links = if state.settings.links {
        let links = find_links(
            state.store.as_slice(),
            state.settings.link_distance,
            state.settings.link_min_intensity,
        );
        draw_links(surface, &links, &mut state.rng);
        links.len()
    } else {
        0
    };

    state.frame_count += 1;

    let stats = FrameStats {
        live: state.store.len(),
        removed,
        links,
    };
    if state.frame_count % 600 == 0 {
        log::debug!(
            "frame {}: {} live, {} removed, {} links",
            state.frame_count,
            stats.live,
            stats.removed,
            stats.links
        );
    }
    stats
}
