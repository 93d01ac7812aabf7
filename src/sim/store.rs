//! Insertion-ordered collection of live entities

use rand::Rng;

use super::entity::Entity;
use crate::renderer::Surface;

/// Live entities in spawn order. Nothing but expiry removes them.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Update and draw every entity, newest first, removing the ones that
    /// die this frame. Returns how many were removed.
    ///
    /// Survivors keep their spawn order.
    pub fn advance<S, R>(&mut self, surface: &mut S, rng: &mut R) -> usize
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let mut removed = 0;
        for i in (0..self.entities.len()).rev() {
            let entity = &mut self.entities[i];
            entity.update();
            entity.draw(surface, rng);
            if entity.is_dead() {
                self.entities.remove(i);
                removed += 1;
            }
        }
        removed
    }
}

impl<'a> IntoIterator for &'a EntityStore {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::entity::{Droplet, Ring};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn droplet(rng: &mut Pcg32, x: f32, life: f32) -> Droplet {
        let mut d = Droplet::new(Vec2::new(x, 0.0), rng);
        d.life = life;
        d.decay = 0.01;
        d
    }

    #[test]
    fn test_advance_removes_dead_same_frame() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut store = EntityStore::new();
        store.push(droplet(&mut rng, 0.0, 0.5));
        store.push(droplet(&mut rng, 1.0, 0.005)); // dies on this update
        store.push(droplet(&mut rng, 2.0, 0.5));

        let mut surface = RecordingSurface::new(10, 10);
        let removed = store.advance(&mut surface, &mut rng);

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|e| !e.is_dead()));
        // Survivors keep spawn order
        let xs: Vec<f32> = store.iter().map(|e| e.pos().x).collect();
        assert_eq!(xs, vec![0.0, 2.0]);
        // The dying droplet is not drawn
        assert_eq!(surface.commands.len(), 2);
    }

    #[test]
    fn test_store_drains_naturally() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut store = EntityStore::new();
        store.push(Ring::new(Vec2::ZERO, 120.0, &mut rng));
        for i in 0..8 {
            store.push(Droplet::new(Vec2::new(i as f32, 0.0), &mut rng));
        }

        let mut surface = RecordingSurface::new(10, 10);
        let mut frames = 0;
        while !store.is_empty() {
            store.advance(&mut surface, &mut rng);
            frames += 1;
            assert!(frames < 500, "entities never expired");
        }
    }

    #[test]
    fn test_all_dead_in_one_frame() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut store = EntityStore::new();
        for i in 0..5 {
            store.push(droplet(&mut rng, i as f32, 0.001));
        }
        let mut surface = RecordingSurface::new(10, 10);
        assert_eq!(store.advance(&mut surface, &mut rng), 5);
        assert!(store.is_empty());
        assert!(surface.commands.is_empty());
    }
}
