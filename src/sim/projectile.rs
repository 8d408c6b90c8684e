//! Projectiles fired by the ship

use glam::Vec2;

use super::entity::{Body, Entity, EntityId};

/// A short-lived shot
#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Body,
    /// Seconds until expiry
    pub time_to_live: f32,
}

impl Projectile {
    pub fn new(id: EntityId, pos: Vec2, vel: Vec2, radius: f32, time_to_live: f32) -> Self {
        Self {
            body: Body::new(id, pos, vel, radius),
            time_to_live,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_to_live <= 0.0
    }

    /// Integrate position and count down the lifetime
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.time_to_live -= dt;
    }
}

impl Entity for Projectile {
    fn body(&self) -> &Body {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_expires() {
        let mut p = Projectile::new(EntityId(1), Vec2::ZERO, Vec2::new(100.0, 0.0), 3.0, 0.1);
        assert!(!p.is_expired());
        p.update(0.05);
        assert!(!p.is_expired());
        assert!((p.body.pos.x - 5.0).abs() < 1e-5);
        p.update(0.05);
        assert!(p.is_expired());
    }
}
