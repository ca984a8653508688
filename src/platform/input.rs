//! Keyboard state tracking
//!
//! winit delivers key transitions; the simulation wants levels (is the key
//! held?) and edges (did it go down this frame?). `Keyboard` turns one into
//! the other and is reset at every frame boundary.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Physical keys for each input signal
pub mod bindings {
    use winit::keyboard::KeyCode;

    pub const LEFT_UP: KeyCode = KeyCode::KeyW;
    pub const LEFT_DOWN: KeyCode = KeyCode::KeyS;
    pub const RIGHT_UP: KeyCode = KeyCode::ArrowUp;
    pub const RIGHT_DOWN: KeyCode = KeyCode::ArrowDown;
    pub const PAUSE: KeyCode = KeyCode::KeyP;
    pub const QUIT: KeyCode = KeyCode::Escape;
}

#[derive(Debug, Default)]
pub struct Keyboard {
    /// Keys currently held down
    held: HashSet<KeyCode>,
    /// Keys that went down since the last `end_frame`
    pressed: HashSet<KeyCode>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. OS auto-repeat is not a new press.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if self.held.insert(key) && !repeat {
                    self.pressed.insert(key);
                }
            }
            ElementState::Released => {
                self.held.remove(&key);
            }
        }
    }

    #[inline]
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    #[inline]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forget everything, e.g. when the window loses focus and releases
    /// would go unseen.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }

    /// Clear per-frame edges after the step has consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Snapshot of the signals the simulation reads
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_up: self.is_down(bindings::LEFT_UP),
            left_down: self.is_down(bindings::LEFT_DOWN),
            right_up: self.is_down(bindings::RIGHT_UP),
            right_down: self.is_down(bindings::RIGHT_DOWN),
            pause: self.is_pressed(bindings::PAUSE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_paddle_signals() {
        let mut kb = Keyboard::new();
        kb.handle_key(KeyCode::KeyW, ElementState::Pressed, false);
        kb.handle_key(KeyCode::ArrowDown, ElementState::Pressed, false);

        let input = kb.tick_input();
        assert!(input.left_up && input.right_down);
        assert!(!input.left_down && !input.right_up && !input.pause);

        // Held keys survive the frame boundary
        kb.end_frame();
        assert_eq!(kb.tick_input(), input);

        kb.handle_key(KeyCode::KeyW, ElementState::Released, false);
        assert!(!kb.tick_input().left_up);
    }

    #[test]
    fn test_pause_is_edge_triggered() {
        let mut kb = Keyboard::new();
        kb.handle_key(KeyCode::KeyP, ElementState::Pressed, false);
        assert!(kb.tick_input().pause);

        kb.end_frame();
        assert!(kb.is_down(KeyCode::KeyP));
        assert!(!kb.tick_input().pause, "still held, but not a new press");

        // Auto-repeat while held doesn't toggle again
        kb.handle_key(KeyCode::KeyP, ElementState::Pressed, true);
        assert!(!kb.tick_input().pause);

        kb.handle_key(KeyCode::KeyP, ElementState::Released, false);
        kb.handle_key(KeyCode::KeyP, ElementState::Pressed, false);
        assert!(kb.tick_input().pause);
    }

    #[test]
    fn test_release_all_on_focus_loss() {
        let mut kb = Keyboard::new();
        kb.handle_key(KeyCode::ArrowUp, ElementState::Pressed, false);
        kb.handle_key(KeyCode::KeyP, ElementState::Pressed, false);
        kb.release_all();
        assert_eq!(kb.tick_input(), TickInput::default());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut kb = Keyboard::new();
        kb.handle_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert_eq!(kb.tick_input(), TickInput::default());
        assert!(kb.is_down(KeyCode::KeyQ));
    }
}
