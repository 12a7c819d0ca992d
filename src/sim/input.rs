//! Discrete key state sampled once per frame

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Escape,
}

/// Anything that can answer "is this key held right now?"
pub trait InputState {
    fn is_held(&self, key: Key) -> bool;
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub left: bool,
    /// Rotate clockwise
    pub right: bool,
    /// Thrust along heading
    pub up: bool,
    /// Close request
    pub escape: bool,
}

impl TickInput {
    /// Input with only the given keys held
    pub fn holding(keys: &[Key]) -> Self {
        let mut input = Self::default();
        for key in keys {
            input.set(*key, true);
        }
        input
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Up => self.up = held,
            Key::Escape => self.escape = held,
        }
    }
}

impl InputState for TickInput {
    fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Up => self.up,
            Key::Escape => self.escape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holding_sets_only_requested_keys() {
        let input = TickInput::holding(&[Key::Left, Key::Up]);
        assert!(input.is_held(Key::Left));
        assert!(input.is_held(Key::Up));
        assert!(!input.is_held(Key::Right));
        assert!(!input.is_held(Key::Escape));
    }

    #[test]
    fn test_set_releases_key() {
        let mut input = TickInput::holding(&[Key::Escape]);
        input.set(Key::Escape, false);
        assert_eq!(input, TickInput::default());
    }
}
