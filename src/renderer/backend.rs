//! macroquad drawing backend
//!
//! Executes a `DrawCmd` list against the current macroquad frame.

use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::effects::Effects;
use super::palette::Rgba;
use super::scene::{DrawCmd, build_scene};
use crate::sim::{GameEvent, GameState};

#[inline]
fn color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Draw one frame worth of commands, in order
pub fn draw_commands(cmds: &[DrawCmd]) {
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear(c) => clear_background(color(*c)),
            DrawCmd::Rect { rect, color: c } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, color(*c));
            }
            DrawCmd::Circle {
                center,
                radius,
                color: c,
            } => draw_circle(center.x, center.y, *radius, color(*c)),
            DrawCmd::Line {
                from,
                to,
                thickness,
                color: c,
            } => draw_line(from.x, from.y, to.x, to.y, *thickness, color(*c)),
            DrawCmd::Text {
                text,
                pos,
                size,
                color: c,
            } => {
                // macroquad anchors text at the baseline
                let font_size = size.round() as u16;
                let ascent = measure_text(text, None, font_size, 1.0).offset_y;
                draw_text(text, pos.x, pos.y + ascent, *size, color(*c));
            }
        }
    }
}

/// Renders game state; owns live effects and the randomness used for
/// cosmetic jitter
pub struct Renderer {
    rng: Pcg32,
    effects: Effects,
}

impl Renderer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            effects: Effects::default(),
        }
    }

    /// Feed one simulation tick's events to the effects
    pub fn on_tick(&mut self, state: &GameState, events: &[GameEvent]) {
        self.effects.on_tick(state, events, &mut self.rng);
    }

    pub fn render(&mut self, state: &GameState) {
        let cmds = build_scene(state, &self.effects, &mut self.rng);
        draw_commands(&cmds);
    }
}
