//! Game state and core simulation types
//!
//! The world is owned here and mutated only by [`super::tick`].

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroid::Asteroid;
use super::entity::EntityId;
use super::projectile::Projectile;
use super::ship::Ship;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ship was hit, waiting for the restart acknowledgment
    GameOver,
}

/// Parent of a pending breakup, captured when it was destroyed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakup {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    /// Asteroids destroyed by projectiles
    pub score: u64,
    /// Simulation frame counter (reset on restart)
    pub frame: u64,
    pub ship: Ship,
    /// Live asteroids (ordered by id for deterministic iteration)
    pub asteroids: BTreeMap<EntityId, Asteroid>,
    /// Live projectiles (ordered by id for deterministic iteration)
    pub projectiles: BTreeMap<EntityId, Projectile>,
    /// Marked during collision, removed in the deletion phase
    pub asteroid_deletions: BTreeSet<EntityId>,
    pub projectile_deletions: BTreeSet<EntityId>,
    /// Destroyed asteroids that fragment next frame
    pub broke_apart: BTreeMap<EntityId, Breakup>,
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }

    /// Create a new game state drawing from an existing random source
    pub fn with_rng(settings: Settings, rng: Pcg32) -> Self {
        let mut state = Self {
            ship: Ship::new(EntityId(0), settings.playfield() / 2.0, settings.ship_radius),
            settings,
            phase: GamePhase::Playing,
            score: 0,
            frame: 0,
            asteroids: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            asteroid_deletions: BTreeSet::new(),
            projectile_deletions: BTreeSet::new(),
            broke_apart: BTreeMap::new(),
            rng,
            next_id: 1,
        };
        state.init();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Place a fresh ship at the playfield centre and start playing
    pub fn init(&mut self) {
        let id = self.next_entity_id();
        self.ship = Ship::new(id, self.settings.playfield() / 2.0, self.settings.ship_radius);
        self.phase = GamePhase::Playing;
        log::info!("Round started (ship {id})");
    }

    /// Release every entity and zero the score
    pub fn clean_up(&mut self) {
        self.asteroids.clear();
        self.projectiles.clear();
        self.asteroid_deletions.clear();
        self.projectile_deletions.clear();
        self.broke_apart.clear();
        self.score = 0;
        self.frame = 0;
        self.next_id = 1;
    }

    /// Full re-initialization after a game over
    pub fn restart(&mut self) {
        self.clean_up();
        self.init();
    }

    /// Insert an asteroid built around a freshly allocated id
    pub fn spawn_asteroid(
        &mut self,
        build: impl FnOnce(EntityId, &mut Pcg32, &Settings) -> Asteroid,
    ) -> EntityId {
        let id = self.next_entity_id();
        let asteroid = build(id, &mut self.rng, &self.settings);
        debug_assert_eq!(asteroid.body.id, id);
        self.asteroids.insert(id, asteroid);
        id
    }

    /// Current live-asteroid allowance from the score
    pub fn asteroid_allowance(&self) -> u64 {
        self.score / self.settings.spawn_scale_factor
    }

    /// Text the HUD shows for the score
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
