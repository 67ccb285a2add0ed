//! Hoop Streak - a single-screen basketball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic frame pipeline (input, basket, ball physics, collisions, scoring)
//! - `renderer`: Scene building and macroquad drawing
//! - `input`: Edge-triggered keyboard polling
//! - `settings`: Gameplay tuning

pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Where the ball waits before each throw
    pub const START_X: f32 = 100.0;
    pub const START_Y: f32 = HEIGHT - 100.0;
}

/// The launch point as a vector
#[inline]
pub fn start_pos() -> Vec2 {
    Vec2::new(consts::START_X, consts::START_Y)
}
