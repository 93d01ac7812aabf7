//! Ring and droplet entities
//!
//! Both variants grow every frame and fade out; the fade value is their
//! decay metric and never increases.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::color::Color;
use crate::consts::*;
use crate::renderer::shapes::wavy_outline;
use crate::renderer::{RadialGradient, Stroke, Surface};

/// Expanding gradient disc spawned by clicks
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub opacity: f32,
    /// Hue in degrees
    pub hue: f32,
}

impl Ring {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, radius: f32, rng: &mut R) -> Self {
        Self {
            pos,
            radius,
            max_radius: radius * RING_GROWTH_LIMIT,
            speed: RING_SPEED,
            opacity: RING_START_OPACITY,
            hue: RING_HUE_BASE + rng.random::<f32>() * RING_HUE_SPREAD,
        }
    }

    pub fn update(&mut self) {
        self.radius += self.speed;
        self.opacity -= RING_FADE;
        if self.radius > self.max_radius {
            self.opacity -= OVERGROWN_FADE;
        }
    }

    /// The mid stop picks a fresh hue every draw, which makes rings shimmer
    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        if self.is_dead() {
            return;
        }

        let mid_hue = RING_HUE_BASE + rng.random::<f32>() * RING_HUE_SPREAD;
        let gradient = RadialGradient::new(self.pos, 0.0, self.radius)
            .stop(0.0, Color::hsl(self.hue, 80.0, 60.0))
            .stop(0.5, Color::hsla(mid_hue, 80.0, 60.0, 0.4))
            .stop(1.0, Color::Transparent);

        surface.fill_circle(self.pos, self.radius, &gradient, self.opacity);
    }

    pub fn is_dead(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// Small wobbling outline left behind by pointer movement
#[derive(Debug, Clone, PartialEq)]
pub struct Droplet {
    pub pos: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    /// 1 at spawn, dead at 0
    pub life: f32,
    /// Life lost per frame
    pub decay: f32,
    pub hue: f32,
    /// Perimeter wave phase (radians)
    pub phase: f32,
}

impl Droplet {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, rng: &mut R) -> Self {
        Self {
            pos,
            radius: 0.0,
            max_radius: DROPLET_MIN_MAX_RADIUS + rng.random::<f32>() * DROPLET_MAX_RADIUS_SPREAD,
            speed: DROPLET_MIN_SPEED + rng.random::<f32>() * DROPLET_SPEED_SPREAD,
            life: 1.0,
            decay: DROPLET_MIN_DECAY + rng.random::<f32>() * DROPLET_DECAY_SPREAD,
            hue: rng.random::<f32>() * 360.0,
            phase: rng.random::<f32>() * TAU,
        }
    }

    /// Also advances the perimeter phase, once per frame
    pub fn update(&mut self) {
        self.radius += self.speed;
        self.life -= self.decay;
        if self.radius > self.max_radius {
            self.life -= OVERGROWN_FADE;
        }
        self.phase = (self.phase + DROPLET_PHASE_STEP) % TAU;
    }

    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        if self.is_dead() {
            return;
        }

        let outline = self.outline();
        let glow = RadialGradient::new(self.pos, 0.0, self.radius)
            .stop(
                0.0,
                Color::hsla(rng.random::<f32>() * 360.0, 80.0, 70.0, DROPLET_GLOW_ALPHA),
            )
            .stop(1.0, Color::Transparent);
        let stroke = Stroke {
            color: Color::hsl(self.hue, 80.0, 70.0),
            width: DROPLET_LINE_WIDTH,
        };

        surface.stroke_polygon(&outline, stroke, Some(&glow), self.life * DROPLET_ALPHA);
    }

    /// Perimeter points for the current radius and phase
    pub fn outline(&self) -> Vec<Vec2> {
        wavy_outline(
            self.pos,
            self.radius,
            DROPLET_SEGMENTS,
            DROPLET_LOBES,
            DROPLET_WAVE_HEIGHT,
            self.phase,
        )
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Either entity variant, as kept in the store
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Ring(Ring),
    Droplet(Droplet),
}

impl Entity {
    pub fn pos(&self) -> Vec2 {
        match self {
            Entity::Ring(r) => r.pos,
            Entity::Droplet(d) => d.pos,
        }
    }

    /// Opacity for rings, life for droplets
    pub fn decay_metric(&self) -> f32 {
        match self {
            Entity::Ring(r) => r.opacity,
            Entity::Droplet(d) => d.life,
        }
    }

    pub fn update(&mut self) {
        match self {
            Entity::Ring(r) => r.update(),
            Entity::Droplet(d) => d.update(),
        }
    }

    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        match self {
            Entity::Ring(r) => r.draw(surface, rng),
            Entity::Droplet(d) => d.draw(surface, rng),
        }
    }

    pub fn is_dead(&self) -> bool {
        match self {
            Entity::Ring(r) => r.is_dead(),
            Entity::Droplet(d) => d.is_dead(),
        }
    }
}

impl From<Ring> for Entity {
    fn from(ring: Ring) -> Self {
        Entity::Ring(ring)
    }
}

impl From<Droplet> for Entity {
    fn from(droplet: Droplet) -> Self {
        Entity::Droplet(droplet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_ring_spawn() {
        let ring = Ring::new(Vec2::new(10.0, 20.0), CLICK_RING_RADIUS, &mut rng());
        assert_eq!(ring.max_radius, 480.0);
        assert_eq!(ring.opacity, RING_START_OPACITY);
        assert!((180.0..=360.0).contains(&ring.hue));
    }

    #[test]
    fn test_ring_update() {
        let mut ring = Ring::new(Vec2::ZERO, 120.0, &mut rng());
        ring.update();
        assert_eq!(ring.radius, 123.0);
        assert!((ring.opacity - 0.69).abs() < 1e-6);
    }

    #[test]
    fn test_ring_fades_faster_when_overgrown() {
        let mut ring = Ring::new(Vec2::ZERO, 10.0, &mut rng());
        ring.radius = ring.max_radius;
        let before = ring.opacity;
        ring.update();
        assert!((before - ring.opacity - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_ring_dies() {
        let mut ring = Ring::new(Vec2::ZERO, 120.0, &mut rng());
        // 0.7 / 0.01 = 70 frames at most, radius stays under 480 that long
        let mut frames = 0;
        while !ring.is_dead() {
            ring.update();
            frames += 1;
            assert!(frames <= 71);
        }
        assert!(frames >= 69);
    }

    #[test]
    fn test_droplet_spawn_ranges() {
        let mut rng = rng();
        for _ in 0..200 {
            let d = Droplet::new(Vec2::ZERO, &mut rng);
            assert_eq!(d.radius, 0.0);
            assert_eq!(d.life, 1.0);
            assert!((40.0..=120.0).contains(&d.max_radius));
            assert!((1.0..=3.0).contains(&d.speed));
            assert!((0.005..=0.02).contains(&d.decay));
            assert!((0.0..=360.0).contains(&d.hue));
            assert!((0.0..=TAU).contains(&d.phase));
        }
    }

    #[test]
    fn test_droplet_update() {
        let mut d = Droplet::new(Vec2::ZERO, &mut rng());
        d.speed = 2.0;
        d.decay = 0.01;
        d.phase = 0.0;
        d.update();
        assert_eq!(d.radius, 2.0);
        assert!((d.life - 0.99).abs() < 1e-6);
        assert!((d.phase - DROPLET_PHASE_STEP).abs() < 1e-6);

        d.radius = d.max_radius + 1.0;
        d.update();
        assert!((d.life - 0.96).abs() < 1e-5);
    }

    #[test]
    fn test_droplet_draw() {
        let mut d = Droplet::new(Vec2::new(50.0, 50.0), &mut rng());
        d.update();
        let mut surface = RecordingSurface::new(100, 100);
        d.draw(&mut surface, &mut rng());

        assert_eq!(surface.commands.len(), 1);
        match &surface.commands[0] {
            DrawCommand::Polygon {
                points,
                stroke,
                fill,
                alpha,
            } => {
                assert_eq!(points.len(), DROPLET_SEGMENTS + 1);
                assert_eq!(stroke.width, DROPLET_LINE_WIDTH);
                assert!(fill.is_some());
                assert!((alpha - d.life * DROPLET_ALPHA).abs() < 1e-6);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_dead_entities_draw_nothing() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut d = Droplet::new(Vec2::ZERO, &mut rng());
        d.life = 0.0;
        d.draw(&mut surface, &mut rng());
        let mut r = Ring::new(Vec2::ZERO, 120.0, &mut rng());
        r.opacity = -0.01;
        r.draw(&mut surface, &mut rng());
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_ring_draw_gradient() {
        let ring = Ring::new(Vec2::new(5.0, 5.0), 120.0, &mut rng());
        let mut surface = RecordingSurface::new(100, 100);
        ring.draw(&mut surface, &mut rng());
        let DrawCommand::FillCircle {
            radius,
            gradient,
            alpha,
            ..
        } = &surface.commands[0]
        else {
            panic!("expected a circle");
        };
        assert_eq!(*radius, 120.0);
        assert_eq!(*alpha, RING_START_OPACITY);
        assert_eq!(gradient.stops.len(), 3);
        assert_eq!(gradient.stops[2].color, Color::Transparent);
    }

    proptest! {
        #[test]
        fn decay_never_increases(seed in any::<u64>(), frames in 1usize..400, ring in any::<bool>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut entity: Entity = if ring {
                Ring::new(Vec2::ZERO, CLICK_RING_RADIUS, &mut rng).into()
            } else {
                Droplet::new(Vec2::ZERO, &mut rng).into()
            };

            let mut last = entity.decay_metric();
            for _ in 0..frames {
                entity.update();
                let now = entity.decay_metric();
                prop_assert!(now <= last);
                last = now;
            }
        }
    }
}
