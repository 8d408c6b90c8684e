//! Per-frame simulation tick
//!
//! Each frame runs spawn, collision, deletion and update strictly in that
//! order. Collision only marks ids; removal happens in the deletion phase so
//! no collection is mutated while it is being scanned.

use rand::Rng;

use super::asteroid::{Asteroid, Edge};
use super::entity::{Entity, EntityId};
use super::ship::ShipInput;
use super::state::{Breakup, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub ship: ShipInput,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// All four phases ran
    Advanced,
    /// An asteroid struck the ship; the round is over
    ShipDestroyed,
    /// Round already over, nothing moved
    Idle,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        return TickOutcome::Idle;
    }

    state.frame += 1;

    spawn_phase(state);

    if let Some(asteroid_id) = collision_phase(state) {
        state.phase = GamePhase::GameOver;
        log::debug!(
            "Ship struck by asteroid {asteroid_id} on frame {} (score {})",
            state.frame,
            state.score
        );
        return TickOutcome::ShipDestroyed;
    }

    deletion_phase(state);
    update_phase(state, &input.ship, dt);

    log::trace!(
        "frame {}: {} asteroids, {} projectiles, score {}",
        state.frame,
        state.asteroids.len(),
        state.projectiles.len(),
        state.score
    );

    TickOutcome::Advanced
}

/// Fragment last frame's broken asteroids, then maybe spawn one at an edge
pub fn spawn_phase(state: &mut GameState) {
    let breakups = std::mem::take(&mut state.broke_apart);
    for (parent, Breakup { pos, radius }) in breakups {
        for _ in 0..2 {
            state.spawn_asteroid(|id, rng, settings| {
                Asteroid::fragment(id, pos, radius, rng, settings)
            });
        }
        log::debug!("Asteroid {parent} broke apart (radius {radius:.1})");
    }

    // Asteroids already marked for despawn no longer count
    let live = state.asteroids.len().saturating_sub(state.asteroid_deletions.len());
    if live as u64 > state.asteroid_allowance() {
        return;
    }

    let roll: f32 = state.rng.random();
    if roll < state.settings.spawn_chance {
        let edge = Edge::random(&mut state.rng);
        spawn_from_edge(state, edge);
    }
}

/// Spawn one asteroid just outside `edge`
pub fn spawn_from_edge(state: &mut GameState, edge: Edge) -> EntityId {
    let id =
        state.spawn_asteroid(|id, rng, settings| Asteroid::spawn_at_edge(id, edge, rng, settings));
    log::debug!(
        "Spawned asteroid {id} at {edge:?} (radius {:.1})",
        state.asteroids[&id].radius()
    );
    id
}

/// Mark hits for deletion and score them
///
/// Returns the asteroid that struck the ship, if any. In that case nothing
/// else is marked or scored. Entities the last update marked for despawn
/// take no part in either test.
pub fn collision_phase(state: &mut GameState) -> Option<EntityId> {
    let despawned_asteroids = state.asteroid_deletions.clone();
    let despawned_projectiles = state.projectile_deletions.clone();

    if let Some(asteroid) = state
        .asteroids
        .values()
        .filter(|a| !despawned_asteroids.contains(&a.id()))
        .find(|a| a.hits_ship(&state.ship))
    {
        return Some(asteroid.id());
    }

    for projectile in state.projectiles.values() {
        if projectile.is_expired() {
            state.projectile_deletions.insert(projectile.id());
        }
    }

    for asteroid in state.asteroids.values() {
        if despawned_asteroids.contains(&asteroid.id()) {
            continue;
        }
        for projectile in state.projectiles.values() {
            if projectile.is_expired()
                || despawned_projectiles.contains(&projectile.id())
                || !asteroid.should_explode(projectile)
            {
                continue;
            }

            state.asteroid_deletions.insert(asteroid.id());
            state.projectile_deletions.insert(projectile.id());
            state.score += 1;

            if asteroid.will_break_apart(&state.settings) {
                state.broke_apart.insert(
                    asteroid.id(),
                    Breakup {
                        pos: asteroid.pos(),
                        radius: asteroid.radius(),
                    },
                );
            }
        }
    }

    None
}

/// Remove every marked id, then clear the marks
pub fn deletion_phase(state: &mut GameState) {
    for id in &state.projectile_deletions {
        let removed = state.projectiles.remove(id);
        debug_assert!(removed.is_some(), "dangling projectile mark {id}");
    }
    for id in &state.asteroid_deletions {
        let removed = state.asteroids.remove(id);
        debug_assert!(removed.is_some(), "dangling asteroid mark {id}");
    }
    state.projectile_deletions.clear();
    state.asteroid_deletions.clear();
}

/// Move the ship (and fire), then integrate everything else
///
/// Entities that drift past the despawn margin are marked here and removed by
/// the next frame's deletion phase.
pub fn update_phase(state: &mut GameState, input: &ShipInput, dt: f32) {
    state.ship.update(dt, input, &state.settings);
    if state.ship.wants_to_shoot && state.ship.is_shot_charged() {
        let id = state.next_entity_id();
        state.ship.shoot(id, &mut state.projectiles, &state.settings);
    }

    let playfield = state.settings.playfield();
    let margin = state.settings.max_asteroid_size;

    for asteroid in state.asteroids.values_mut() {
        asteroid.update(dt);
        if asteroid.body.is_beyond(playfield, margin) {
            state.asteroid_deletions.insert(asteroid.id());
        }
    }
    for projectile in state.projectiles.values_mut() {
        projectile.update(dt);
        if projectile.body.is_beyond(playfield, margin) {
            state.projectile_deletions.insert(projectile.id());
        }
    }
}
