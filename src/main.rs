//! Astro Blast entry point
//!
//! Headless native host: drives the simulation at a fixed timestep with a
//! simple autopilot and prints the score HUD to the terminal.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use glam::Vec2;

use astro_blast::consts::*;
use astro_blast::renderer::{Canvas, DrawCommand};
use astro_blast::sim::{ShipInput, TickInput};
use astro_blast::{Difficulty, FrameStatus, Game, RestartPrompt, Settings};

/// Keyboard restart confirmation on the terminal
struct StdinPrompt;

fn write_restart_prompt(out: &mut impl Write, final_score: u64) -> std::io::Result<()> {
    writeln!(out, "Your ship was destroyed! Final score: {final_score}")?;
    writeln!(out, "Press enter when you are ready to restart")?;
    out.flush()
}

impl RestartPrompt for StdinPrompt {
    fn confirm_restart(&mut self, final_score: u64) -> bool {
        if let Err(e) = write_restart_prompt(&mut std::io::stdout(), final_score) {
            log::warn!("Failed to show restart prompt: {e}");
        }

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => true,
        }
    }
}

/// Prints the HUD text whenever it changes, ignores geometry
struct TerminalCanvas {
    size: Vec2,
    last_text: String,
}

impl Canvas for TerminalCanvas {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        if let DrawCommand::Text { text, .. } = command {
            if text != self.last_text {
                println!("{text}");
                self.last_text = text;
            }
        }
    }
}

/// Spin, fire constantly, and blip the thruster now and then
fn autopilot(frame: u64) -> ShipInput {
    ShipInput {
        thrust: frame % 240 < 20,
        rotate_left: (frame / 180) % 2 == 0,
        rotate_right: (frame / 180) % 2 == 1,
        shoot: true,
    }
}

#[derive(Parser, Debug)]
#[command(name = "astro-blast")]
#[command(about = "Headless Astro Blast run driven by a built-in autopilot")]
struct Args {
    /// JSON settings file (missing fields use defaults)
    settings_path: Option<PathBuf>,
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Difficulty preset applied on top of the settings file
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s)
        .ok_or_else(|| format!("unknown difficulty '{s}' (expected relaxed, normal or frantic)"))
}

fn load_settings(args: &Args) -> Settings {
    let mut settings = match &args.settings_path {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    if let Some(preset) = args.difficulty {
        settings.apply_preset(preset);
    }
    settings
}

fn main() {
    env_logger::init();
    log::info!("Astro Blast (native) starting...");

    let args = Args::parse();
    let settings = load_settings(&args);
    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut canvas = TerminalCanvas {
        size: settings.playfield(),
        last_text: String::new(),
    };
    let mut game = Game::new(settings, seed, StdinPrompt);

    let step = Duration::from_secs_f32(SIM_DT);
    let mut accumulator = 0.0f32;
    let mut last_time = Instant::now();

    loop {
        let now = Instant::now();
        accumulator += now.duration_since(last_time).as_secs_f32().min(0.1);
        last_time = now;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = TickInput {
                ship: autopilot(game.state.frame),
            };
            match game.update(SIM_DT, &input, &mut canvas) {
                FrameStatus::Running => {}
                FrameStatus::Restarted => {
                    // Time spent at the prompt does not count
                    accumulator = 0.0;
                    last_time = Instant::now();
                    canvas.last_text.clear();
                    break;
                }
                FrameStatus::Quit => {
                    log::info!("Played {} round(s)", game.rounds());
                    return;
                }
            }
            accumulator -= SIM_DT;
            substeps += 1;
        }

        std::thread::sleep(step);
    }
}
