//! Hoop Streak entry point
//!
//! Opens the window and runs the fixed-timestep game loop.

use macroquad::miniquad::date;
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use hoop_streak::Settings;
use hoop_streak::consts::*;
use hoop_streak::input;
use hoop_streak::renderer::Renderer;
use hoop_streak::sim::{GameEvent, GameState, TickInput, tick};

/// Game instance holding all state
struct Game {
    state: GameState,
    renderer: Renderer,
    accumulator: f32,
    /// Presses not yet consumed by a tick
    input: TickInput,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings),
            renderer: Renderer::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Run simulation ticks
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = tick(&mut self.state, &self.input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Presses are one-shot: only the first substep sees them
            self.input.clear();

            for event in &events {
                log_event(event);
            }
            self.renderer.on_tick(&self.state, &events);
        }
    }

    fn render(&mut self) {
        self.renderer.render(&self.state);
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Thrown { power } => {
            log::debug!("Thrown with power ({}, {})", power.x, power.y)
        }
        GameEvent::Scored { score, streak } => {
            log::debug!("Scored! score={} streak={}", score, streak)
        }
        GameEvent::BackboardHit { vel_x } => log::debug!("Backboard hit, vx now {}", vel_x),
        GameEvent::Missed { lost_streak } => log::debug!("Missed, streak {} lost", lost_streak),
        GameEvent::NewBestStreak { streak } => log::info!("New best streak: {}", streak),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("Hoop Streak"),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Hoop Streak starting...");

    input::capture_quit();

    let settings = Settings::default();
    log::debug!("Settings: {:?}", settings);

    let seed = (date::now() * 1000.0) as u64;
    let mut game = Game::new(settings, seed);
    log::info!("Game initialized with seed: {}", seed);

    loop {
        // Leave before updating or drawing the frame the close arrived in
        if input::quit_requested() {
            break;
        }
        input::poll_commands(&mut game.input);
        game.update(get_frame_time());
        game.render();
        next_frame().await;
    }

    let board = &game.state.scoreboard;
    log::info!(
        "Hoop Streak exiting after {} ticks: score={} shots={} best streak={}",
        game.state.time_ticks,
        board.score,
        board.shots,
        board.best_streak
    );
}
