//! Outline generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use crate::polar_to_cartesian;

/// Closed outline of a circle whose radius is perturbed by a sine wave.
///
/// Returns `segments + 1` points; the last one lands on the first so the
/// outline can be drawn as a polyline.
pub fn wavy_outline(
    center: Vec2,
    radius: f32,
    segments: usize,
    lobes: f32,
    amplitude: f32,
    phase: f32,
) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(segments + 1);

    for i in 0..=segments {
        let theta = (i as f32 / segments as f32) * TAU;
        let r = radius + (theta * lobes + phase).sin() * amplitude;
        points.push(center + polar_to_cartesian(r, theta));
    }

    points
}

/// Points evenly spaced around `center`, each at its own distance
pub fn scatter_ring(center: Vec2, distances: &[f32]) -> Vec<Vec2> {
    let count = distances.len() as f32;
    distances
        .iter()
        .enumerate()
        .map(|(i, &d)| center + polar_to_cartesian(d, TAU * i as f32 / count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wavy_outline_closes() {
        let pts = wavy_outline(Vec2::new(10.0, 20.0), 50.0, 32, 4.0, 8.0, 0.7);
        assert_eq!(pts.len(), 33);
        assert!(pts[0].distance(pts[32]) < 1e-3);
    }

    #[test]
    fn test_wavy_outline_stays_within_amplitude() {
        let center = Vec2::new(-5.0, 3.0);
        for p in wavy_outline(center, 40.0, 32, 4.0, 8.0, 1.3) {
            let d = p.distance(center);
            assert!((32.0 - 1e-3..=48.0 + 1e-3).contains(&d), "distance {d}");
        }
    }

    #[test]
    fn test_zero_amplitude_is_circle() {
        for p in wavy_outline(Vec2::ZERO, 25.0, 16, 4.0, 0.0, 0.0) {
            assert!((p.length() - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_scatter_ring_distances() {
        let center = Vec2::new(100.0, 100.0);
        let pts = scatter_ring(center, &[30.0, 40.0, 49.0, 35.0]);
        assert_eq!(pts.len(), 4);
        assert!((pts[0] - Vec2::new(130.0, 100.0)).length() < 1e-3);
        assert!((pts[1] - Vec2::new(100.0, 140.0)).length() < 1e-3);
        assert!((pts[2].distance(center) - 49.0).abs() < 1e-3);
    }
}
