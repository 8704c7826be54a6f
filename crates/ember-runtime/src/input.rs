//! Keyboard input state

/// Number of virtual-key codes tracked
pub const KEY_COUNT: usize = 256;

/// Tracks which virtual keys are currently held down.
///
/// The table is written from message dispatch and read by the frame step.
/// Codes outside `0..KEY_COUNT` are ignored on write and read as released.
#[derive(Debug, Clone)]
pub struct InputState {
    pressed: [bool; KEY_COUNT],
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pressed: [false; KEY_COUNT],
        }
    }

    /// Release every key
    pub fn initialize(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }

    /// Process a key press event
    pub fn key_down(&mut self, code: u32) {
        match self.pressed.get_mut(code as usize) {
            Some(slot) => *slot = true,
            None => log::trace!("Ignoring key down for out-of-range code {code}"),
        }
    }

    /// Process a key release event
    pub fn key_up(&mut self, code: u32) {
        match self.pressed.get_mut(code as usize) {
            Some(slot) => *slot = false,
            None => log::trace!("Ignoring key up for out-of-range code {code}"),
        }
    }

    /// Is a key currently held down?
    pub fn is_key_down(&self, code: u32) -> bool {
        self.pressed.get(code as usize).copied().unwrap_or(false)
    }

    /// Codes of all keys currently held, ascending
    pub fn pressed_keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.pressed
            .iter()
            .enumerate()
            .filter(|(_, down)| **down)
            .map(|(code, _)| code as u32)
    }

    pub fn any_key_down(&self) -> bool {
        self.pressed.iter().any(|down| *down)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_fresh_state_all_released() {
        let input = InputState::new();
        for code in 0..KEY_COUNT as u32 {
            assert!(!input.is_key_down(code));
        }
        assert!(!input.any_key_down());
    }

    #[test]
    fn test_key_transitions_every_code() {
        let mut input = InputState::new();
        for code in 0..KEY_COUNT as u32 {
            input.key_down(code);
            assert!(input.is_key_down(code));
            input.key_up(code);
            assert!(!input.is_key_down(code));
        }
    }

    #[test]
    fn test_initialize_clears_held_keys() {
        let mut input = InputState::new();
        input.key_down(keys::KEY_W);
        input.key_down(keys::SPACE);

        input.initialize();
        for code in 0..KEY_COUNT as u32 {
            assert!(!input.is_key_down(code));
        }
    }

    #[test]
    fn test_repeat_key_down_is_idempotent() {
        let mut once = InputState::new();
        once.key_down(keys::KEY_A);

        let mut twice = InputState::new();
        twice.key_down(keys::KEY_A);
        twice.key_down(keys::KEY_A);

        assert_eq!(
            once.pressed_keys().collect::<Vec<_>>(),
            twice.pressed_keys().collect::<Vec<_>>()
        );

        // A single release undoes any number of presses
        twice.key_up(keys::KEY_A);
        assert!(!twice.is_key_down(keys::KEY_A));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut input = InputState::new();
        input.key_down(keys::LEFT);
        input.key_down(keys::RIGHT);
        input.key_up(keys::LEFT);

        assert!(!input.is_key_down(keys::LEFT));
        assert!(input.is_key_down(keys::RIGHT));
        assert_eq!(input.pressed_keys().collect::<Vec<_>>(), vec![keys::RIGHT]);
    }

    #[test]
    fn test_out_of_range_codes_ignored() {
        let mut input = InputState::new();
        input.key_down(256);
        input.key_down(u32::MAX);

        assert!(!input.any_key_down());
        assert!(!input.is_key_down(256));
        assert!(!input.is_key_down(u32::MAX));

        input.key_up(1000);
        assert!(!input.any_key_down());
    }
}
