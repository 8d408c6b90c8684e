//! Shape generation for 2D outlines

use glam::Vec2;
use std::f32::consts::PI;

use crate::sim::{EntityId, Ship};

/// Vertices in every asteroid outline
pub const ASTEROID_SEGMENTS: u32 = 11;

/// Jagged closed outline for an asteroid
///
/// The jitter is derived from the id, so an asteroid keeps its silhouette
/// from frame to frame.
pub fn asteroid_outline(id: EntityId, center: Vec2, radius: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(ASTEROID_SEGMENTS as usize);

    for i in 0..ASTEROID_SEGMENTS {
        let theta = (i as f32 / ASTEROID_SEGMENTS as f32) * 2.0 * PI;
        // Deterministic "random" spread using hash
        let hash = id.0.wrapping_mul(2654435761).wrapping_add(i * 7919);
        let jitter = 0.75 + (hash % 1000) as f32 / 1000.0 * 0.25;
        let r = radius * jitter;
        points.push(Vec2::new(center.x + r * theta.cos(), center.y + r * theta.sin()));
    }

    points
}

/// Vertices for a regular polygon approximating a circle
pub fn circle(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            Vec2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
        })
        .collect()
}

/// Exhaust flame behind the ship (tip, left base, right base)
pub fn thrust_flame(ship: &Ship) -> [Vec2; 3] {
    let back = -ship.forward();
    let side = Vec2::new(-back.y, back.x);
    let r = ship.body.radius();
    let base = ship.body.pos + back * r * 0.6;
    [
        ship.body.pos + back * r * 1.4,
        base + side * r * 0.3,
        base - side * r * 0.3,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asteroid_outline_stays_within_radius() {
        let center = Vec2::new(50.0, 60.0);
        let points = asteroid_outline(EntityId(42), center, 20.0);
        assert_eq!(points.len(), ASTEROID_SEGMENTS as usize);
        for p in &points {
            let d = p.distance(center);
            assert!(d <= 20.0 + 1e-3);
            assert!(d >= 15.0 - 1e-3);
        }
    }

    #[test]
    fn test_asteroid_outline_is_stable_per_id() {
        let a = asteroid_outline(EntityId(7), Vec2::ZERO, 30.0);
        let b = asteroid_outline(EntityId(7), Vec2::ZERO, 30.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_vertices() {
        let points = circle(Vec2::ZERO, 3.0, 8);
        assert_eq!(points.len(), 8);
        assert!(points.iter().all(|p| (p.length() - 3.0).abs() < 1e-4));
    }

    #[test]
    fn test_flame_points_backwards() {
        let ship = Ship::new(EntityId(1), Vec2::new(100.0, 100.0), 20.0);
        let flame = thrust_flame(&ship);
        // Ship points up, so the flame tip is below it
        assert!(flame[0].y > ship.body.pos.y + 20.0);
    }
}
