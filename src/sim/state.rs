//! Game state and core simulation types
//!
//! Everything the frame pipeline mutates lives in `GameState`.

use glam::Vec2;
use super::collision::Rect;
use crate::settings::Settings;
use crate::start_pos;

/// Ball lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallPhase {
    /// Resting at the launch point, aim can still change
    #[default]
    Idle,
    /// Released, physics applies
    Flying,
}

/// Aim adjustment directions (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimDir {
    Up,
    Down,
    Left,
    Right,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub phase: BallPhase,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self {
            pos: start_pos(),
            vel: Vec2::ZERO,
            radius,
            phase: BallPhase::Idle,
        }
    }

    #[inline]
    pub fn is_thrown(&self) -> bool {
        self.phase == BallPhase::Flying
    }

    /// Back to the launch point, at rest
    pub fn reset(&mut self) {
        self.pos = start_pos();
        self.vel = Vec2::ZERO;
        self.phase = BallPhase::Idle;
    }

    /// Release with the given velocity
    pub fn throw(&mut self, power: Vec2) {
        self.vel = power;
        self.phase = BallPhase::Flying;
    }

    /// One explicit Euler step: move, then accelerate
    pub fn integrate(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
    }

    /// Square that inscribes the ball
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Initial velocity applied at throw time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchPower(pub Vec2);

impl LaunchPower {
    /// Nudge one component by one unit, clamped to [-limit, limit]
    pub fn adjust(&mut self, dir: AimDir, limit: f32) {
        let v = &mut self.0;
        match dir {
            AimDir::Up => v.y -= 1.0,
            AimDir::Down => v.y += 1.0,
            AimDir::Right => v.x += 1.0,
            AimDir::Left => v.x -= 1.0,
        }
        *v = v.clamp(Vec2::splat(-limit), Vec2::splat(limit));
    }
}

/// The hoop: rim, backboard and its vertical oscillation
#[derive(Debug, Clone)]
pub struct Basket {
    /// Rim top-left corner
    pub x: f32,
    pub y: f32,
    /// +1 moving down, -1 moving up
    pub direction: f32,
    pub speed: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub rim_width: f32,
    pub rim_height: f32,
    pub backboard_width: f32,
    pub backboard_height: f32,
    pub backboard_rise: f32,
}

impl Basket {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            x: settings.basket_x,
            y: settings.basket_start_y,
            direction: 1.0,
            speed: settings.basket_speed,
            min_y: settings.basket_min_y,
            max_y: settings.basket_max_y,
            rim_width: settings.rim_width,
            rim_height: settings.rim_height,
            backboard_width: settings.backboard_width,
            backboard_height: settings.backboard_height,
            backboard_rise: settings.backboard_rise,
        }
    }

    /// Move one step, then reverse if a bound was crossed.
    ///
    /// The check runs after the move, so the basket may overshoot a bound
    /// by up to one step before turning back.
    pub fn step(&mut self) {
        self.y += self.speed * self.direction;
        if self.y > self.max_y || self.y < self.min_y {
            self.direction = -self.direction;
        }
    }

    pub fn rim(&self) -> Rect {
        Rect::new(self.x, self.y, self.rim_width, self.rim_height)
    }

    /// Thin strip at the rim's far edge, reaching above it
    pub fn backboard(&self) -> Rect {
        Rect::new(
            self.x + self.rim_width - self.backboard_width,
            self.y - self.backboard_rise,
            self.backboard_width,
            self.backboard_height,
        )
    }
}

/// Score bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u64,
    /// Consecutive makes since the last miss
    pub streak: u32,
    /// Longest streak this session
    pub best_streak: u32,
    /// Throws released this session
    pub shots: u32,
}

impl Scoreboard {
    /// Record a make; returns true when it set a new best streak
    pub fn record_make(&mut self) -> bool {
        self.score += 1;
        self.streak += 1;
        if self.streak > self.best_streak {
            self.best_streak = self.streak;
            true
        } else {
            false
        }
    }

    pub fn record_miss(&mut self) {
        self.streak = 0;
    }

    pub fn is_on_fire(&self, threshold: u32) -> bool {
        self.streak >= threshold
    }
}

/// Things that happened during a tick, for logging and effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Thrown { power: Vec2 },
    Scored { score: u64, streak: u32 },
    BackboardHit { vel_x: f32 },
    Missed { lost_streak: u32 },
    NewBestStreak { streak: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub ball: Ball,
    pub launch: LaunchPower,
    pub basket: Basket,
    pub scoreboard: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        Self {
            ball: Ball::new(settings.ball_radius),
            launch: LaunchPower(settings.base_launch),
            basket: Basket::from_settings(&settings),
            scoreboard: Scoreboard::default(),
            time_ticks: 0,
            settings,
        }
    }

    /// Ball and launch power back to their initial values
    pub fn reset_ball(&mut self) {
        self.ball.reset();
        self.launch = LaunchPower(self.settings.base_launch);
    }

    pub fn is_on_fire(&self) -> bool {
        self.scoreboard.is_on_fire(self.settings.fire_streak)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
