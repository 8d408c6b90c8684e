//! Rendering interface
//!
//! The simulation never touches a GPU or window. Each frame it hands the
//! host a list of [`DrawCommand`]s through a [`Canvas`].

pub mod shapes;

use glam::Vec2;

use crate::consts::SCORE_TEXT_MARGIN;
use crate::sim::{Entity, EntityId, GameState};

/// Segments used for projectile circles
const PROJECTILE_SEGMENTS: u32 = 6;

/// One thing for the host to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Ship hull triangle, plus the flame when thrusting
    Ship {
        hull: [Vec2; 3],
        flame: Option<[Vec2; 3]>,
    },
    Asteroid {
        id: EntityId,
        center: Vec2,
        radius: f32,
        outline: Vec<Vec2>,
    },
    Projectile {
        id: EntityId,
        center: Vec2,
        outline: Vec<Vec2>,
    },
    Text {
        pos: Vec2,
        size: f32,
        text: String,
    },
}

/// Drawable surface supplied by the host
pub trait Canvas {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that keeps every command (for headless hosts and tests)
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub size: Vec2,
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    /// Drop last frame's commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text of the most recent text command, if any
    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for CommandList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// Issue one draw call per live entity, then the score text
///
/// World coordinates are scaled uniformly so the playfield fits the canvas,
/// anchored at the top-left corner. The score text stays in surface pixels.
pub fn draw_world(state: &GameState, canvas: &mut dyn Canvas) {
    let scale = surface_scale(state.settings.playfield(), canvas.size());
    let to_surface = |p: Vec2| p * scale;

    let ship = &state.ship;
    canvas.draw(DrawCommand::Ship {
        hull: ship.hull().map(to_surface),
        flame: ship
            .thrusting
            .then(|| shapes::thrust_flame(ship).map(to_surface)),
    });

    for asteroid in state.asteroids.values() {
        let outline = shapes::asteroid_outline(asteroid.id(), asteroid.pos(), asteroid.radius());
        canvas.draw(DrawCommand::Asteroid {
            id: asteroid.id(),
            center: to_surface(asteroid.pos()),
            radius: asteroid.radius() * scale,
            outline: outline.into_iter().map(to_surface).collect(),
        });
    }

    for projectile in state.projectiles.values() {
        let outline = shapes::circle(projectile.pos(), projectile.radius(), PROJECTILE_SEGMENTS);
        canvas.draw(DrawCommand::Projectile {
            id: projectile.id(),
            center: to_surface(projectile.pos()),
            outline: outline.into_iter().map(to_surface).collect(),
        });
    }

    canvas.draw(DrawCommand::Text {
        pos: Vec2::splat(SCORE_TEXT_MARGIN),
        size: state.settings.score_text_size,
        text: state.score_text(),
    });
}

/// Largest uniform scale that fits `playfield` inside `surface`
fn surface_scale(playfield: Vec2, surface: Vec2) -> f32 {
    let fit = surface / playfield;
    let scale = fit.x.min(fit.y);
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}
