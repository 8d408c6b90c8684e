//! Astro Blast - A minimal asteroids arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, deletion, scoring)
//! - `renderer`: Draw command interface the host renders from
//! - `game`: Session wrapper with the restart protocol
//! - `settings`: Data-driven game balance

pub mod error;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use game::{FrameStatus, Game, RestartPrompt};
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native host (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Asteroid size range (radius, pixels)
    pub const MIN_ASTEROID_SIZE: f32 = 10.0;
    pub const MAX_ASTEROID_SIZE: f32 = 50.0;
    /// Per-axis speed bound before scaling
    pub const MAX_UNSCALED_ASTEROID_SPEED: f32 = 10.0;
    /// Pixels per second per unscaled speed unit
    pub const ASTEROID_SPEED_SCALE: f32 = 6.0;

    /// Chance per frame of an edge spawn once the gate is open
    pub const SPAWN_CHANCE: f32 = 0.10;
    /// Points needed per additional live asteroid
    pub const SPAWN_SCALE_FACTOR: u64 = 1;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 20.0;
    pub const SHIP_THRUST: f32 = 220.0; // pixels/s²
    pub const SHIP_ROTATION_SPEED: f32 = 3.5; // radians/s
    pub const SHIP_DRAG: f32 = 0.6; // fraction of velocity lost per second
    pub const SHIP_MAX_SPEED: f32 = 320.0;
    /// Seconds between shots
    pub const SHOT_COOLDOWN: f32 = 0.25;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 420.0;
    pub const PROJECTILE_TTL: f32 = 1.5;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Score text
    pub const SCORE_TEXT_SIZE: f32 = 24.0;
    pub const SCORE_TEXT_MARGIN: f32 = 12.0;
}

/// Wrap a coordinate into [0, extent)
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Unit vector for a heading angle (radians)
#[inline]
pub fn heading_to_vec(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
