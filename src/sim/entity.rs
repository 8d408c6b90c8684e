//! Shared entity shape
//!
//! Ships, asteroids and projectiles are all circles with an id, a position
//! and a velocity. Collision tests only ever look at this common body.

use std::fmt;

use glam::Vec2;

use super::collision::circles_overlap;

/// Unique identifier, stable for the entity's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position, velocity and collision extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Body {
    /// Panics on a non-positive or non-finite radius
    pub fn new(id: EntityId, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "entity {id} radius must be positive, got {radius}"
        );
        Self { id, pos, vel, radius }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Integrate position by velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// True once the body is further outside `playfield` than its own radius
    /// plus `margin`
    pub fn is_beyond(&self, playfield: Vec2, margin: f32) -> bool {
        let slack = self.radius + margin;
        self.pos.x < -slack
            || self.pos.y < -slack
            || self.pos.x > playfield.x + slack
            || self.pos.y > playfield.y + slack
    }
}

/// Common capability set of every simulated object
pub trait Entity {
    fn body(&self) -> &Body;

    fn id(&self) -> EntityId {
        self.body().id
    }

    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    fn radius(&self) -> f32 {
        self.body().radius()
    }

    /// Symmetric circle-overlap test
    fn has_collided(&self, other: &dyn Entity) -> bool {
        circles_overlap(self.pos(), self.radius(), other.pos(), other.radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_beyond() {
        let playfield = Vec2::new(800.0, 600.0);
        let body = Body::new(EntityId(1), Vec2::new(-55.0, 300.0), Vec2::ZERO, 10.0);
        // 55 outside, slack 10 + 50
        assert!(!body.is_beyond(playfield, 50.0));
        assert!(body.is_beyond(playfield, 40.0));

        let inside = Body::new(EntityId(2), Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0);
        assert!(!inside.is_beyond(playfield, 0.0));
    }

    #[test]
    fn test_integrate() {
        let mut body = Body::new(EntityId(1), Vec2::ZERO, Vec2::new(10.0, -20.0), 1.0);
        body.integrate(0.5);
        assert_eq!(body.pos, Vec2::new(5.0, -10.0));
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_zero_radius_panics() {
        Body::new(EntityId(1), Vec2::ZERO, Vec2::ZERO, 0.0);
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_nan_radius_panics() {
        Body::new(EntityId(1), Vec2::ZERO, Vec2::ZERO, f32::NAN);
    }

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId(7).to_string(), "#7");
    }
}
