//! Collision detection
//!
//! Everything in the playfield is a circle, so one overlap predicate covers
//! ship/asteroid and asteroid/projectile hits.

use glam::Vec2;

/// True if two circles strictly overlap (touching edges do not count)
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}
