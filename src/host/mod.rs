//! Host Integration Module
//!
//! The seam between the console and whatever drives it (an emulator
//! frontend, the headless runner, tests): joypad input, the [`Terminal`]
//! services handed to a [`Game`], and the [`Context`] that implements them.

mod context;
mod input;

pub use context::{Context, Game, Terminal};
pub use input::{InputState, JoypadKey, KeyboardState, Player};
