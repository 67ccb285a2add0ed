//! Keyboard input
//!
//! Keys are edge-triggered: a held key produces exactly one command, on the
//! frame it goes down.

use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested, prevent_quit};

use crate::sim::{AimDir, Command, TickInput};

/// Keys polled each frame, in the order their commands are queued.
///
/// Aim keys come before the throw key so that an aim tap and a throw landing
/// in the same frame both take effect.
const BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::Up, Command::Aim(AimDir::Up)),
    (KeyCode::Down, Command::Aim(AimDir::Down)),
    (KeyCode::Left, Command::Aim(AimDir::Left)),
    (KeyCode::Right, Command::Aim(AimDir::Right)),
    (KeyCode::Space, Command::Throw),
];

/// Command bound to a key, if any
#[cfg(test)]
fn command_for(key: KeyCode) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}

/// Queue commands for every bound key pressed since the last frame
pub fn poll_commands(pending: &mut TickInput) {
    for (key, command) in BINDINGS {
        if is_key_pressed(key) {
            pending.push(command);
        }
    }
}

/// Route window-close to `quit_requested` instead of exiting outright
pub fn capture_quit() {
    prevent_quit();
}

/// The window close button was pressed
pub fn quit_requested() -> bool {
    is_quit_requested()
}
