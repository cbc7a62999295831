//! Keyboard input handling
//!
//! Key events only update held state; the game polls it once per frame.

use game_core::InputState;
use winit::keyboard::KeyCode;

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Player1Up,
    Player1Down,
    Player2Up,
    Player2Down,
    Serve,
}

/// W/S for the left paddle, arrows for the right, Space to serve
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::KeyW => Some(Action::Player1Up),
        KeyCode::KeyS => Some(Action::Player1Down),
        KeyCode::ArrowUp => Some(Action::Player2Up),
        KeyCode::ArrowDown => Some(Action::Player2Down),
        KeyCode::Space => Some(Action::Serve),
        _ => None,
    }
}

/// Held state of every bound key
#[derive(Debug, Default)]
pub struct Keyboard {
    state: InputState,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down/up event
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        let held = match action {
            Action::Player1Up => &mut self.state.player1.up,
            Action::Player1Down => &mut self.state.player1.down,
            Action::Player2Up => &mut self.state.player2.up,
            Action::Player2Down => &mut self.state.player2.down,
            Action::Serve => &mut self.state.serve,
        };
        *held = pressed;
    }

    /// Forget held keys, e.g. when the window loses focus and misses releases
    pub fn release_all(&mut self) {
        self.state = InputState::new();
    }

    pub fn input_state(&self) -> InputState {
        self.state
    }
}
