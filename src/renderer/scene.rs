//! Scene generation
//!
//! Turns a `GameState` into an ordered list of draw commands. Nothing here
//! touches the window, so the frame layout can be tested directly.

use glam::Vec2;
use rand::Rng;

use super::effects::Effects;
use super::palette::{self, Rgba};
use crate::consts::WIDTH;
use crate::sim::{GameState, Rect, preview_for};

const SCORE_FONT: f32 = 30.0;
const HUD_FONT: f32 = 20.0;

const NET_PITCH: usize = 12;
const NET_DEPTH: f32 = 40.0;
const NET_THICKNESS: f32 = 2.0;
const PREVIEW_DOT_RADIUS: f32 = 2.0;

/// Glow rings drawn behind a burning ball (extra radius, color)
const FIRE_GLOW: [(f32, Rgba); 2] = [(8.0, palette::FIRE_OUTER), (4.0, palette::FIRE_INNER)];
const SPARK_COUNT: usize = 3;
const SPARK_RADIUS: f32 = 3.0;

/// One drawing primitive, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Rgba),
    Rect {
        rect: Rect,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Rgba,
    },
    /// `pos` is the top-left corner of the text box
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// Build the full frame, back to front
pub fn build_scene<R: Rng + ?Sized>(
    state: &GameState,
    effects: &Effects,
    rng: &mut R,
) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear(palette::BACKGROUND)];

    hud(state, &mut cmds);
    basket(state, &mut cmds);
    effects.draw(&mut cmds);

    for center in preview_for(state) {
        cmds.push(DrawCmd::Circle {
            center,
            radius: PREVIEW_DOT_RADIUS,
            color: palette::PREVIEW_DOT,
        });
    }

    let ball = &state.ball;
    if state.is_on_fire() && ball.is_thrown() {
        cmds.extend(fire_effect(ball.pos, ball.radius, rng));
    }
    cmds.push(DrawCmd::Circle {
        center: ball.pos,
        radius: ball.radius,
        color: palette::BALL,
    });

    cmds
}

fn text(text: String, x: f32, y: f32, size: f32, color: Rgba) -> DrawCmd {
    DrawCmd::Text {
        text,
        pos: Vec2::new(x, y),
        size,
        color,
    }
}

fn hud(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    let board = &state.scoreboard;
    let on_fire = state.is_on_fire();

    cmds.push(text(
        format!("Score: {}", board.score),
        20.0,
        20.0,
        SCORE_FONT,
        palette::INK,
    ));
    let streak_color = if on_fire {
        palette::STREAK_HOT
    } else {
        palette::MUTED
    };
    cmds.push(text(
        format!("Streak: {}", board.streak),
        20.0,
        60.0,
        HUD_FONT,
        streak_color,
    ));
    if on_fire {
        cmds.push(text(
            "ON FIRE!".to_string(),
            20.0,
            90.0,
            HUD_FONT,
            palette::FIRE_BANNER,
        ));
    }
    cmds.push(text(
        format!("Best: {}  Shots: {}", board.best_streak, board.shots),
        WIDTH - 200.0,
        20.0,
        HUD_FONT,
        palette::MUTED,
    ));
}

fn basket(state: &GameState, cmds: &mut Vec<DrawCmd>) {
    let basket = &state.basket;
    cmds.push(DrawCmd::Rect {
        rect: basket.backboard(),
        color: palette::BACKBOARD,
    });
    let rim = basket.rim();
    cmds.push(DrawCmd::Rect {
        rect: rim,
        color: palette::RIM,
    });

    // Crossed diagonals hanging from the rim
    let top = rim.bottom();
    let bottom = top + NET_DEPTH;
    let pitch = NET_PITCH as f32;
    for i in (0..rim.w.max(0.0) as usize).step_by(NET_PITCH) {
        let x = rim.x + i as f32;
        cmds.push(DrawCmd::Line {
            from: Vec2::new(x, top),
            to: Vec2::new(x + pitch * 2.0 / 3.0, bottom),
            thickness: NET_THICKNESS,
            color: palette::NET,
        });
        cmds.push(DrawCmd::Line {
            from: Vec2::new(x + pitch, top),
            to: Vec2::new(x + pitch / 3.0, bottom),
            thickness: NET_THICKNESS,
            color: palette::NET,
        });
    }
}

/// Layered glow plus sparks trailing behind the ball.
///
/// Spark offsets come from `rng`: x in [-15, 0], y in [-10, 10] whole pixels.
pub fn fire_effect<R: Rng + ?Sized>(center: Vec2, radius: f32, rng: &mut R) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(FIRE_GLOW.len() + SPARK_COUNT);
    for (extra, color) in FIRE_GLOW {
        cmds.push(DrawCmd::Circle {
            center,
            radius: radius + extra,
            color,
        });
    }
    for _ in 0..SPARK_COUNT {
        let jitter = Vec2::new(
            rng.random_range(-15i32..=0) as f32,
            rng.random_range(-10i32..=10) as f32,
        );
        cmds.push(DrawCmd::Circle {
            center: center + jitter,
            radius: SPARK_RADIUS,
            color: palette::SPARK,
        });
    }
    cmds
}
