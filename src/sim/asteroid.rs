//! Asteroids: edge spawning and breakup rules

use glam::Vec2;
use rand::Rng;

use super::entity::{Body, Entity, EntityId};
use super::projectile::Projectile;
use super::ship::Ship;
use crate::settings::Settings;

/// Playfield boundary an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Up,
    Down,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Up, Edge::Down];

    /// Uniformly random edge
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A drifting hazard
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
}

impl Asteroid {
    pub fn new(id: EntityId, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            body: Body::new(id, pos, vel, radius),
        }
    }

    /// Spawn just outside `edge`, drifting inward
    pub fn spawn_at_edge(id: EntityId, edge: Edge, rng: &mut impl Rng, settings: &Settings) -> Self {
        let offset = settings.max_asteroid_size;
        let max = settings.max_unscaled_asteroid_speed;
        let width = settings.playfield_width;
        let height = settings.playfield_height;

        let (pos, vel) = match edge {
            Edge::Left => (
                Vec2::new(-offset, rng.random_range(0.0..height)),
                Vec2::new(rng.random_range(0.0..max), rng.random_range(-max..max)),
            ),
            Edge::Right => (
                Vec2::new(width + offset, rng.random_range(0.0..height)),
                Vec2::new(-rng.random_range(0.0..max), rng.random_range(-max..max)),
            ),
            Edge::Up => (
                Vec2::new(rng.random_range(0.0..width), -offset),
                Vec2::new(rng.random_range(-max..max), rng.random_range(0.0..max)),
            ),
            Edge::Down => (
                Vec2::new(rng.random_range(0.0..width), height + offset),
                Vec2::new(rng.random_range(-max..max), -rng.random_range(0.0..max)),
            ),
        };
        let radius = rng.random_range(settings.min_asteroid_size..settings.max_asteroid_size);

        Self::new(id, pos, vel * settings.asteroid_speed_scale, radius)
    }

    /// Child of a destroyed parent: same position, new velocity, at most
    /// half the parent's radius
    pub fn fragment(
        id: EntityId,
        parent_pos: Vec2,
        parent_radius: f32,
        rng: &mut impl Rng,
        settings: &Settings,
    ) -> Self {
        let min = settings.min_asteroid_size;
        let half = parent_radius / 2.0;
        // A parent exactly at the threshold leaves an empty range
        let radius = if half > min {
            rng.random_range(min..half)
        } else {
            min
        };
        let max = settings.max_unscaled_asteroid_speed;
        let vel = Vec2::new(rng.random_range(-max..max), rng.random_range(-max..max));

        Self::new(id, parent_pos, vel * settings.asteroid_speed_scale, radius)
    }

    /// Projectile hit test
    #[inline]
    pub fn should_explode(&self, projectile: &Projectile) -> bool {
        self.has_collided(projectile)
    }

    /// Ship hit test
    #[inline]
    pub fn hits_ship(&self, ship: &Ship) -> bool {
        self.has_collided(ship)
    }

    /// True if both children would still meet the minimum size
    #[inline]
    pub fn will_break_apart(&self, settings: &Settings) -> bool {
        self.body.radius() >= settings.breakup_threshold()
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
    }
}

impl Entity for Asteroid {
    fn body(&self) -> &Body {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_edge_spawns_move_inward() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let scaled_max = settings.max_unscaled_asteroid_speed * settings.asteroid_speed_scale;

        for i in 0..200 {
            for edge in Edge::ALL {
                let a = Asteroid::spawn_at_edge(EntityId(i), edge, &mut rng, &settings);
                let p = a.body.pos;
                let v = a.body.vel;
                match edge {
                    Edge::Left => {
                        assert_eq!(p.x, -settings.max_asteroid_size);
                        assert!((0.0..settings.playfield_height).contains(&p.y));
                        assert!(v.x >= 0.0 && v.x < scaled_max);
                    }
                    Edge::Right => {
                        assert_eq!(p.x, settings.playfield_width + settings.max_asteroid_size);
                        assert!(v.x <= 0.0 && v.x > -scaled_max);
                    }
                    Edge::Up => {
                        assert_eq!(p.y, -settings.max_asteroid_size);
                        assert!((0.0..settings.playfield_width).contains(&p.x));
                        assert!(v.y >= 0.0 && v.y < scaled_max);
                    }
                    Edge::Down => {
                        assert_eq!(p.y, settings.playfield_height + settings.max_asteroid_size);
                        assert!(v.y <= 0.0 && v.y > -scaled_max);
                    }
                }
                assert!(a.radius() >= settings.min_asteroid_size);
                assert!(a.radius() < settings.max_asteroid_size);
            }
        }
    }

    #[test]
    fn test_fragment_radius_range() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let parent_pos = Vec2::new(100.0, 200.0);
        for i in 0..500 {
            let f = Asteroid::fragment(EntityId(i), parent_pos, 45.0, &mut rng, &settings);
            assert_eq!(f.body.pos, parent_pos);
            assert!(f.radius() >= settings.min_asteroid_size);
            assert!(f.radius() < 22.5);
        }
    }

    #[test]
    fn test_fragment_at_threshold_uses_minimum() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let f = Asteroid::fragment(
            EntityId(1),
            Vec2::ZERO,
            settings.breakup_threshold(),
            &mut rng,
            &settings,
        );
        assert_eq!(f.radius(), settings.min_asteroid_size);
    }

    #[test]
    fn test_will_break_apart_threshold() {
        let settings = Settings::default();
        let min = settings.min_asteroid_size;
        let big = Asteroid::new(EntityId(1), Vec2::ZERO, Vec2::ZERO, 2.0 * min);
        let small = Asteroid::new(EntityId(2), Vec2::ZERO, Vec2::ZERO, 2.0 * min - 0.01);
        assert!(big.will_break_apart(&settings));
        assert!(!small.will_break_apart(&settings));
    }

    #[test]
    fn test_should_explode_and_hits_ship() {
        let a = Asteroid::new(EntityId(1), Vec2::new(100.0, 100.0), Vec2::ZERO, 20.0);
        let near = Projectile::new(EntityId(2), Vec2::new(118.0, 100.0), Vec2::ZERO, 3.0, 1.0);
        let far = Projectile::new(EntityId(3), Vec2::new(200.0, 100.0), Vec2::ZERO, 3.0, 1.0);
        assert!(a.should_explode(&near));
        assert!(!a.should_explode(&far));

        let ship = Ship::new(EntityId(4), Vec2::new(130.0, 100.0), 20.0);
        assert!(a.hits_ship(&ship));
        assert!(ship.has_collided(&a));
    }

    #[test]
    fn test_random_edge_covers_all() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut seen = [false; 4];
        for _ in 0..100 {
            let edge = Edge::random(&mut rng);
            let idx = Edge::ALL.iter().position(|e| *e == edge).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
