//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is treated as the square that
//! inscribes it, the rim and backboard as plain rectangles.

use super::state::{Ball, Basket};
use crate::consts::{HEIGHT, WIDTH};

/// Gap left between ball and backboard after a bounce
const BOUNCE_CLEARANCE: f32 = 1.0;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True when the interiors overlap; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Ball overlaps the rim while falling
pub fn ball_through_rim(ball: &Ball, basket: &Basket) -> bool {
    ball.vel.y > 0.0 && ball.bounds().intersects(&basket.rim())
}

/// Bounce the ball off the backboard if they overlap.
///
/// Horizontal velocity is reversed, vertical velocity is untouched, and the
/// ball is moved just clear of the board on the side it is now heading to.
/// Returns true when a bounce happened.
pub fn ball_backboard_bounce(ball: &mut Ball, basket: &Basket) -> bool {
    let board = basket.backboard();
    if !ball.bounds().intersects(&board) {
        return false;
    }

    ball.vel.x = -ball.vel.x;
    ball.pos.x = if ball.vel.x < 0.0 {
        board.x - ball.radius - BOUNCE_CLEARANCE
    } else {
        board.right() + ball.radius + BOUNCE_CLEARANCE
    };
    true
}

/// Ball center has left the canvas past the right or bottom edge
pub fn ball_out_of_bounds(ball: &Ball) -> bool {
    ball.pos.x > WIDTH || ball.pos.y > HEIGHT
}
