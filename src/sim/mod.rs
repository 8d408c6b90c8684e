//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod entity;
pub mod projectile;
pub mod ship;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, Edge};
pub use collision::circles_overlap;
pub use entity::{Body, Entity, EntityId};
pub use projectile::Projectile;
pub use ship::{Ship, ShipInput};
pub use state::{Breakup, GamePhase, GameState};
pub use tick::{
    TickInput, TickOutcome, collision_phase, deletion_phase, spawn_from_edge, spawn_phase, tick,
    update_phase,
};
