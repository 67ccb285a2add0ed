//! Aiming preview
//!
//! Runs the same Euler integration the ball uses, on a scratch copy, so the
//! dots line up exactly with the real flight.

use glam::Vec2;

use super::state::{Ball, GameState};

/// Positions the ball would pass through over the next `steps` ticks
pub fn preview_points(start: Vec2, power: Vec2, gravity: f32, steps: u32) -> Vec<Vec2> {
    let mut ghost = Ball::new(0.0);
    ghost.pos = start;
    ghost.throw(power);
    (0..steps)
        .map(|_| {
            ghost.integrate(gravity);
            ghost.pos
        })
        .collect()
}

/// Preview for the current aim, empty once the ball is in flight
pub fn preview_for(state: &GameState) -> Vec<Vec2> {
    if state.ball.is_thrown() {
        return Vec::new();
    }
    preview_points(
        state.ball.pos,
        state.launch.0,
        state.settings.gravity,
        state.settings.preview_steps,
    )
}
