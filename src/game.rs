//! Game session: one simulation plus the restart protocol
//!
//! A ship collision pauses the world, waits for the player to acknowledge,
//! then re-initializes everything.

use crate::renderer::{Canvas, draw_world};
use crate::settings::Settings;
use crate::sim::{GameState, TickInput, TickOutcome, tick};

/// Asks the player to confirm a restart (blocking)
pub trait RestartPrompt {
    /// True to start a new round, false to quit
    fn confirm_restart(&mut self, final_score: u64) -> bool;
}

/// Result of one [`Game::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    /// The ship was destroyed and a fresh round began
    Restarted,
    /// The player declined to restart
    Quit,
}

pub struct Game<P: RestartPrompt> {
    pub state: GameState,
    prompt: P,
    rounds: u32,
}

impl<P: RestartPrompt> Game<P> {
    pub fn new(settings: Settings, seed: u64, prompt: P) -> Self {
        log::info!(
            "Astro Blast session (seed {seed}, {} difficulty)",
            settings.difficulty.as_str()
        );
        Self {
            state: GameState::new(settings, seed),
            prompt,
            rounds: 1,
        }
    }

    /// Rounds played, counting the current one
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Simulate one frame of `dt` seconds and draw it
    pub fn update(&mut self, dt: f32, input: &TickInput, canvas: &mut dyn Canvas) -> FrameStatus {
        match tick(&mut self.state, input, dt) {
            TickOutcome::ShipDestroyed => self.game_over(),
            TickOutcome::Advanced | TickOutcome::Idle => {
                draw_world(&self.state, canvas);
                FrameStatus::Running
            }
        }
    }

    fn game_over(&mut self) -> FrameStatus {
        let score = self.state.score;
        log::info!("Game over after round {} with score {score}", self.rounds);

        if !self.prompt.confirm_restart(score) {
            log::info!("Restart declined, quitting");
            return FrameStatus::Quit;
        }

        self.state.restart();
        self.rounds += 1;
        FrameStatus::Restarted
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }
}
