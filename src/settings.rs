//! Game settings and balance
//!
//! Loaded from an optional JSON file; every field falls back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Normal,
    Frantic,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "Relaxed",
            Difficulty::Normal => "Normal",
            Difficulty::Frantic => "Frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" | "easy" => Some(Difficulty::Relaxed),
            "normal" => Some(Difficulty::Normal),
            "frantic" | "hard" => Some(Difficulty::Frantic),
            _ => None,
        }
    }

    /// Per-frame edge spawn chance for this preset
    pub fn spawn_chance(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 0.05,
            Difficulty::Normal => SPAWN_CHANCE,
            Difficulty::Frantic => 0.25,
        }
    }

    /// Points needed per extra live asteroid
    pub fn spawn_scale_factor(&self) -> u64 {
        match self {
            Difficulty::Relaxed => 2,
            Difficulty::Normal => SPAWN_SCALE_FACTOR,
            Difficulty::Frantic => 1,
        }
    }

    /// Asteroid speed multiplier (pixels/s per unscaled unit)
    pub fn asteroid_speed_scale(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 4.0,
            Difficulty::Normal => ASTEROID_SPEED_SCALE,
            Difficulty::Frantic => 9.0,
        }
    }
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Asteroids ===
    pub min_asteroid_size: f32,
    pub max_asteroid_size: f32,
    pub max_unscaled_asteroid_speed: f32,
    pub asteroid_speed_scale: f32,
    /// Chance per frame of an edge spawn (0.0 - 1.0)
    pub spawn_chance: f32,
    /// Live asteroids allowed grows by one every this many points
    pub spawn_scale_factor: u64,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_thrust: f32,
    pub ship_rotation_speed: f32,
    pub ship_drag: f32,
    pub ship_max_speed: f32,
    pub shot_cooldown: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_ttl: f32,
    pub projectile_radius: f32,

    // === HUD ===
    pub score_text_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,

            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            min_asteroid_size: MIN_ASTEROID_SIZE,
            max_asteroid_size: MAX_ASTEROID_SIZE,
            max_unscaled_asteroid_speed: MAX_UNSCALED_ASTEROID_SPEED,
            asteroid_speed_scale: ASTEROID_SPEED_SCALE,
            spawn_chance: SPAWN_CHANCE,
            spawn_scale_factor: SPAWN_SCALE_FACTOR,

            ship_radius: SHIP_RADIUS,
            ship_thrust: SHIP_THRUST,
            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_drag: SHIP_DRAG,
            ship_max_speed: SHIP_MAX_SPEED,
            shot_cooldown: SHOT_COOLDOWN,

            projectile_speed: PROJECTILE_SPEED,
            projectile_ttl: PROJECTILE_TTL,
            projectile_radius: PROJECTILE_RADIUS,

            score_text_size: SCORE_TEXT_SIZE,
        }
    }
}

impl Settings {
    /// Create settings from a difficulty preset (applies preset defaults)
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a difficulty preset (updates spawn-related settings)
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.difficulty = preset;
        self.spawn_chance = preset.spawn_chance();
        self.spawn_scale_factor = preset.spawn_scale_factor();
        self.asteroid_speed_scale = preset.asteroid_speed_scale();
    }

    /// Playfield size as a vector
    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Smallest radius that still splits into two legal fragments
    pub fn breakup_threshold(&self) -> f32 {
        2.0 * self.min_asteroid_size
    }

    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({})",
            path.display(),
            settings.difficulty.as_str()
        );
        Ok(settings)
    }

    /// Reject values that would corrupt collision geometry or spawning
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                })
            }
        }

        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("min_asteroid_size", self.min_asteroid_size)?;
        positive("max_asteroid_size", self.max_asteroid_size)?;
        positive("max_unscaled_asteroid_speed", self.max_unscaled_asteroid_speed)?;
        positive("asteroid_speed_scale", self.asteroid_speed_scale)?;
        positive("ship_radius", self.ship_radius)?;
        positive("ship_max_speed", self.ship_max_speed)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_ttl", self.projectile_ttl)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("score_text_size", self.score_text_size)?;

        if self.min_asteroid_size >= self.max_asteroid_size {
            return Err(ConfigError::Invalid {
                field: "min_asteroid_size",
                reason: format!(
                    "must be below max_asteroid_size ({} >= {})",
                    self.min_asteroid_size, self.max_asteroid_size
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::Invalid {
                field: "spawn_chance",
                reason: format!("must be within [0, 1], got {}", self.spawn_chance),
            });
        }
        if self.spawn_scale_factor == 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_scale_factor",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.ship_drag.is_finite() && self.ship_drag >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "ship_drag",
                reason: format!("must be non-negative, got {}", self.ship_drag),
            });
        }
        if !(self.shot_cooldown.is_finite() && self.shot_cooldown >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "shot_cooldown",
                reason: format!("must be non-negative, got {}", self.shot_cooldown),
            });
        }
        Ok(())
    }
}
