//! Curved links between nearby entities

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use crate::color::Color;
use crate::consts::{LINK_ALPHA_SCALE, LINK_JITTER, LINK_LINE_WIDTH};
use crate::renderer::{Stroke, Surface};

/// Link stroke color; per-link alpha is applied on top
pub const LINK_COLOR: Color = Color::rgba(100, 150, 200, 0.1);

/// A pair of entities close and bright enough to be joined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    /// Sum of both decay metrics
    pub intensity: f32,
}

impl Link {
    pub fn alpha(&self) -> f32 {
        self.intensity * LINK_ALPHA_SCALE
    }
}

/// Every unordered pair closer than `max_distance` whose decay metrics both
/// exceed `min_intensity`, in (i, j > i) order
pub fn find_links(entities: &[Entity], max_distance: f32, min_intensity: f32) -> Vec<Link> {
    let mut links = Vec::new();

    for (i, a) in entities.iter().enumerate() {
        let ia = a.decay_metric();
        if ia <= min_intensity {
            continue;
        }
        for b in &entities[i + 1..] {
            let ib = b.decay_metric();
            if ib <= min_intensity {
                continue;
            }
            if a.pos().distance(b.pos()) < max_distance {
                links.push(Link {
                    from: a.pos(),
                    to: b.pos(),
                    intensity: ia + ib,
                });
            }
        }
    }

    links
}

/// Draw links as quadratic curves bent through a jittered midpoint
pub fn draw_links<S, R>(surface: &mut S, links: &[Link], rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let stroke = Stroke {
        color: LINK_COLOR,
        width: LINK_LINE_WIDTH,
    };

    for link in links {
        let jitter = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5) * LINK_JITTER;
        let control = (link.from + link.to) * 0.5 + jitter;
        surface.stroke_curve(link.from, control, link.to, stroke, link.alpha());
    }
}
