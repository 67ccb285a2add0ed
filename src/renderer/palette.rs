//! Colors for game elements, linear RGBA in 0..=1

pub type Rgba = [f32; 4];

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BACKGROUND: Rgba = rgb(255, 255, 255);
pub const INK: Rgba = rgb(20, 20, 20);
pub const MUTED: Rgba = rgb(200, 200, 200);
pub const BALL: Rgba = rgb(255, 140, 0);
pub const RIM: Rgba = rgb(255, 69, 0);
pub const BACKBOARD: Rgba = INK;
pub const NET: Rgba = rgb(150, 150, 150);
pub const PREVIEW_DOT: Rgba = MUTED;

// Streak bonus
pub const FIRE_OUTER: Rgba = RIM;
pub const FIRE_INNER: Rgba = rgb(255, 215, 0);
pub const SPARK: Rgba = FIRE_INNER;
pub const STREAK_HOT: Rgba = FIRE_INNER;
pub const FIRE_BANNER: Rgba = RIM;

// Score celebration
pub const BURST: Rgba = rgb(50, 205, 50);
