//! Gameplay tuning
//!
//! Every tunable of the frame pipeline lives here. Defaults reproduce the
//! classic feel; tests build variants through `from_json`.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{HEIGHT, WIDTH};

/// Why a settings document was rejected
#[derive(Debug)]
pub enum SettingsError {
    /// Not valid JSON, or fields of the wrong type
    Parse(serde_json::Error),
    /// Parsed, but the values are inconsistent
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "malformed settings: {}", e),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {}", reason),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Gameplay tuning, in pixels and pixels-per-tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ball ===
    /// Downward acceleration added to vy every tick
    pub gravity: f32,
    pub ball_radius: f32,
    /// Launch power the ball starts with and returns to on every reset
    pub base_launch: Vec2,
    /// Each launch power component is clamped to [-limit, limit]
    pub launch_limit: f32,

    // === Basket ===
    pub basket_x: f32,
    pub basket_start_y: f32,
    pub basket_speed: f32,
    pub rim_width: f32,
    pub rim_height: f32,
    /// Basket reverses once it moves above/below these
    pub basket_min_y: f32,
    pub basket_max_y: f32,
    pub backboard_width: f32,
    pub backboard_height: f32,
    /// How far the backboard reaches above the rim top
    pub backboard_rise: f32,

    // === Presentation ===
    /// Dots in the aiming preview
    pub preview_steps: u32,
    /// Streak at which the ball catches fire
    pub fire_streak: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            ball_radius: 15.0,
            base_launch: Vec2::new(12.0, -15.0),
            launch_limit: 40.0,

            basket_x: WIDTH - 150.0,
            basket_start_y: (HEIGHT / 2.0).floor(),
            basket_speed: 3.0,
            rim_width: 80.0,
            rim_height: 10.0,
            basket_min_y: 100.0,
            basket_max_y: HEIGHT - 100.0,
            backboard_width: 5.0,
            backboard_height: 50.0,
            backboard_rise: 40.0,

            preview_steps: 15,
            fire_streak: 3,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable by the pipeline
    pub fn validate(&self) -> Result<(), SettingsError> {
        let scalars = [
            self.gravity,
            self.ball_radius,
            self.base_launch.x,
            self.base_launch.y,
            self.launch_limit,
            self.basket_x,
            self.basket_start_y,
            self.basket_speed,
            self.rim_width,
            self.rim_height,
            self.basket_min_y,
            self.basket_max_y,
            self.backboard_width,
            self.backboard_height,
            self.backboard_rise,
        ];
        if scalars.iter().any(|v| !v.is_finite()) {
            return Err(SettingsError::Invalid("values must be finite"));
        }
        // Flights only end by leaving through the right or bottom edge
        if self.gravity <= 0.0 {
            return Err(SettingsError::Invalid("gravity must be positive"));
        }
        if self.ball_radius <= 0.0 {
            return Err(SettingsError::Invalid("ball_radius must be positive"));
        }
        if self.rim_width <= 0.0 || self.rim_height <= 0.0 {
            return Err(SettingsError::Invalid("rim size must be positive"));
        }
        if self.backboard_width <= 0.0 || self.backboard_height <= 0.0 {
            return Err(SettingsError::Invalid("backboard size must be positive"));
        }
        if self.backboard_width > self.rim_width {
            return Err(SettingsError::Invalid("backboard wider than rim"));
        }
        if self.basket_min_y >= self.basket_max_y {
            return Err(SettingsError::Invalid("basket_min_y must be below basket_max_y"));
        }
        if self.basket_start_y < self.basket_min_y || self.basket_start_y > self.basket_max_y {
            return Err(SettingsError::Invalid("basket_start_y outside basket bounds"));
        }
        if self.basket_speed < 0.0 {
            return Err(SettingsError::Invalid("basket_speed must not be negative"));
        }
        if self.launch_limit <= 0.0 {
            return Err(SettingsError::Invalid("launch_limit must be positive"));
        }
        if self.base_launch.abs().max_element() > self.launch_limit {
            return Err(SettingsError::Invalid("base_launch exceeds launch_limit"));
        }
        Ok(())
    }
}
