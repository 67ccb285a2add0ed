//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed tick per call, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use collision::{Rect, ball_backboard_bounce, ball_out_of_bounds, ball_through_rim};
pub use state::{
    AimDir, Ball, BallPhase, Basket, GameEvent, GameState, LaunchPower, Scoreboard,
};
pub use tick::{Command, TickInput, tick};
pub use trajectory::{preview_for, preview_points};
