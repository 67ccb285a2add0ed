//! Rendering module
//!
//! `scene` lays the frame out as plain draw commands, `effects` tracks
//! event-driven particles, and `backend` hands everything to macroquad.

pub mod backend;
pub mod effects;
pub mod palette;
pub mod scene;

pub use backend::Renderer;
pub use effects::{Effects, ScoreBurst};
pub use scene::{DrawCmd, build_scene, fire_effect};
