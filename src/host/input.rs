//! Joypad input
//!
//! The console only ever asks one question of the host: is this key of
//! this player held down right now.

use serde::{Deserialize, Serialize};

/// Player slot, in host port order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
    Three,
    Four,
}

impl Player {
    pub const COUNT: usize = 4;

    pub const ALL: [Player; Player::COUNT] = [Player::One, Player::Two, Player::Three, Player::Four];

    /// Zero-based port number
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Joypad buttons, numbered like the retro joypad device ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoypadKey {
    B,
    Y,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
    A,
    X,
    L,
    R,
}

impl JoypadKey {
    pub const COUNT: usize = 12;

    pub const ALL: [JoypadKey; JoypadKey::COUNT] = [
        JoypadKey::B,
        JoypadKey::Y,
        JoypadKey::Select,
        JoypadKey::Start,
        JoypadKey::Up,
        JoypadKey::Down,
        JoypadKey::Left,
        JoypadKey::Right,
        JoypadKey::A,
        JoypadKey::X,
        JoypadKey::L,
        JoypadKey::R,
    ];

    /// Device id of the button
    pub const fn id(self) -> u32 {
        self as u32
    }

    const fn mask(self) -> u16 {
        1 << (self as u16)
    }
}

/// Source of key state
pub trait InputState {
    /// Check if a key is held down
    fn is_key_down(&self, player: Player, key: JoypadKey) -> bool;

    /// Check if a key is released
    fn is_key_up(&self, player: Player, key: JoypadKey) -> bool {
        !self.is_key_down(player, key)
    }
}

/// Host callbacks can serve as input directly
impl<F> InputState for F
where
    F: Fn(Player, JoypadKey) -> bool,
{
    fn is_key_down(&self, player: Player, key: JoypadKey) -> bool {
        self(player, key)
    }
}

/// Key state kept as one bitmask per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: [u16; Player::COUNT],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, player: Player, key: JoypadKey) {
        self.pressed[player.index()] |= key.mask();
    }

    pub fn release(&mut self, player: Player, key: JoypadKey) {
        self.pressed[player.index()] &= !key.mask();
    }

    pub fn set(&mut self, player: Player, key: JoypadKey, down: bool) {
        if down {
            self.press(player, key);
        } else {
            self.release(player, key);
        }
    }

    /// Release every key of every player
    pub fn clear(&mut self) {
        self.pressed = [0; Player::COUNT];
    }

    /// Capture the state of every key from another input source
    pub fn poll(&mut self, source: &impl InputState) {
        for player in Player::ALL {
            for key in JoypadKey::ALL {
                self.set(player, key, source.is_key_down(player, key));
            }
        }
    }
}

impl InputState for KeyboardState {
    fn is_key_down(&self, player: Player, key: JoypadKey) -> bool {
        self.pressed[player.index()] & key.mask() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut state = KeyboardState::new();
        assert!(state.is_key_up(Player::One, JoypadKey::A));
        state.press(Player::One, JoypadKey::A);
        assert!(state.is_key_down(Player::One, JoypadKey::A));
        assert!(state.is_key_up(Player::Two, JoypadKey::A));
        assert!(state.is_key_up(Player::One, JoypadKey::B));
        state.release(Player::One, JoypadKey::A);
        assert!(state.is_key_up(Player::One, JoypadKey::A));
    }

    #[test]
    fn test_clear() {
        let mut state = KeyboardState::new();
        state.set(Player::Four, JoypadKey::R, true);
        state.clear();
        assert_eq!(state, KeyboardState::default());
    }

    #[test]
    fn test_closure_input_and_poll() {
        let source = |player: Player, key: JoypadKey| player == Player::Two && key == JoypadKey::Start;
        assert!(source.is_key_down(Player::Two, JoypadKey::Start));
        assert!(InputState::is_key_up(&source, Player::One, JoypadKey::Start));

        let mut state = KeyboardState::new();
        state.press(Player::One, JoypadKey::Up);
        state.poll(&source);
        assert!(state.is_key_down(Player::Two, JoypadKey::Start));
        assert!(state.is_key_up(Player::One, JoypadKey::Up));
    }

    #[test]
    fn test_key_ids() {
        assert_eq!(JoypadKey::B.id(), 0);
        assert_eq!(JoypadKey::A.id(), 8);
        assert_eq!(JoypadKey::R.id(), 11);
        for (i, key) in JoypadKey::ALL.iter().enumerate() {
            assert_eq!(key.id() as usize, i);
        }
    }
}
