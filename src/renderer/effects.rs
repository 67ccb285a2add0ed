//! Short-lived particle effects driven by game events

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::palette;
use super::scene::DrawCmd;
use crate::sim::{GameEvent, GameState};

/// Particles in one score burst, evenly spaced around the circle
pub const BURST_PARTICLES: usize = 20;
/// Burst lifetime in simulation ticks (one second)
pub const BURST_LIFETIME: u32 = 60;
/// Travel distance is drawn from [MIN, MIN + SPREAD)
const BURST_MIN_DISTANCE: f32 = 50.0;
const BURST_SPREAD: f32 = 50.0;
const PARTICLE_RADIUS: f32 = 3.0;

/// Ring of particles flying out from where the ball went in
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBurst {
    origin: Vec2,
    /// Final offset of each particle from `origin`
    offsets: Vec<Vec2>,
    age: u32,
}

impl ScoreBurst {
    pub fn spawn<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        let offsets = (0..BURST_PARTICLES)
            .map(|i| {
                let angle = TAU * i as f32 / BURST_PARTICLES as f32;
                let distance = BURST_MIN_DISTANCE + rng.random_range(0.0..BURST_SPREAD);
                Vec2::from_angle(angle) * distance
            })
            .collect();
        Self {
            origin,
            offsets,
            age: 0,
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Elapsed share of the lifetime, 0 at spawn and 1 when finished
    pub fn progress(&self) -> f32 {
        (self.age as f32 / BURST_LIFETIME as f32).min(1.0)
    }

    pub fn is_done(&self) -> bool {
        self.age >= BURST_LIFETIME
    }

    pub fn advance(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    /// Current particle positions
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        let t = self.progress();
        self.offsets.iter().map(move |offset| self.origin + *offset * t)
    }

    fn draw(&self, cmds: &mut Vec<DrawCmd>) {
        let mut color = palette::BURST;
        color[3] *= 1.0 - self.progress();
        for center in self.positions() {
            cmds.push(DrawCmd::Circle {
                center,
                radius: PARTICLE_RADIUS,
                color,
            });
        }
    }
}

/// Every effect currently on screen
#[derive(Debug, Clone, Default)]
pub struct Effects {
    bursts: Vec<ScoreBurst>,
}

impl Effects {
    /// Age live effects by one tick, then spawn for this tick's events
    pub fn on_tick<R: Rng + ?Sized>(
        &mut self,
        state: &GameState,
        events: &[GameEvent],
        rng: &mut R,
    ) {
        for burst in &mut self.bursts {
            burst.advance();
        }
        self.bursts.retain(|burst| !burst.is_done());

        for event in events {
            if let GameEvent::Scored { .. } = event {
                let basket = &state.basket;
                let origin = Vec2::new(basket.x, basket.y);
                self.bursts.push(ScoreBurst::spawn(origin, rng));
                log::trace!("Score burst at ({}, {})", origin.x, origin.y);
            }
        }
    }

    pub fn bursts(&self) -> &[ScoreBurst] {
        &self.bursts
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn draw(&self, cmds: &mut Vec<DrawCmd>) {
        for burst in &self.bursts {
            burst.draw(cmds);
        }
    }
}
