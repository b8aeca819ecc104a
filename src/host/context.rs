//! Host-side context
//!
//! [`Context`] is what a game sees of its host: the root console to draw
//! on, joypad state, a way to ask the host to quit, and custom glyph
//! injection. It is created and owned by the host integration; nothing is
//! global.

use std::time::Duration;

use super::input::{InputState, JoypadKey, Player};
use crate::app::Config;
use crate::core::CodePoint;
use crate::renderer::{FontError, RootConsole};

/// Services a host offers to a running game
pub trait Terminal {
    /// The console presented to the host
    fn root_console(&mut self) -> &mut RootConsole;

    /// Check if a key is held down
    fn is_key_down(&self, player: Player, key: JoypadKey) -> bool;

    /// Check if a key is released
    fn is_key_up(&self, player: Player, key: JoypadKey) -> bool {
        !self.is_key_down(player, key)
    }

    /// Ask the host to stop after the current frame
    fn shutdown(&mut self);

    /// Add alpha-mask glyphs to the custom font
    fn add_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        image: &[u8],
    ) -> Result<usize, FontError>;

    /// Add packed monochrome glyphs to the custom font
    fn add_xbm_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<usize, FontError>;
}

/// A game driven by the host, one update per frame
pub trait Game {
    /// Called once before the first update
    fn initialize(&mut self, terminal: &mut dyn Terminal);

    /// Advance the game by `delta` and redraw
    fn update(&mut self, terminal: &mut dyn Terminal, delta: Duration);
}

/// Default [`Terminal`] implementation around a root console
#[derive(Debug)]
pub struct Context<I> {
    console: RootConsole,
    input: I,
    shutdown_requested: bool,
}

impl<I: InputState> Context<I> {
    pub fn new(console: RootConsole, input: I) -> Self {
        Self {
            console,
            input,
            shutdown_requested: false,
        }
    }

    /// Build the root console from a configuration
    pub fn from_config(config: &Config, input: I) -> Self {
        Self::new(config.build_console(), input)
    }

    pub fn console(&self) -> &RootConsole {
        &self.console
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    /// Run one game update and rasterize the result
    ///
    /// Returns whether the framebuffer changed.
    pub fn run_frame(&mut self, game: &mut dyn Game, delta: Duration) -> bool {
        game.update(self, delta);
        let (_, updated) = self.console.render_image();
        updated
    }
}

impl<I: InputState> Terminal for Context<I> {
    fn root_console(&mut self) -> &mut RootConsole {
        &mut self.console
    }

    fn is_key_down(&self, player: Player, key: JoypadKey) -> bool {
        self.input.is_key_down(player, key)
    }

    fn shutdown(&mut self) {
        tracing::debug!("shutdown requested");
        self.shutdown_requested = true;
    }

    fn add_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        image: &[u8],
    ) -> Result<usize, FontError> {
        self.console.add_to_custom_font(start, width, height, image)
    }

    fn add_xbm_to_custom_font(
        &mut self,
        start: CodePoint,
        width: usize,
        height: usize,
        data: &[u8],
    ) -> Result<usize, FontError> {
        self.console.add_xbm_to_custom_font(start, width, height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyboardState;

    /// Counts frames and quits when Start is pressed
    struct Counter {
        frames: u32,
    }

    impl Game for Counter {
        fn initialize(&mut self, terminal: &mut dyn Terminal) {
            terminal.root_console().clear();
        }

        fn update(&mut self, terminal: &mut dyn Terminal, _delta: Duration) {
            self.frames += 1;
            let text = format!("{}", self.frames);
            terminal.root_console().print(0, 0, &text);
            if terminal.is_key_down(Player::One, JoypadKey::Start) {
                terminal.shutdown();
            }
        }
    }

    #[test]
    fn test_run_frames() {
        let mut context = Context::new(RootConsole::new(4, 1), KeyboardState::new());
        let mut game = Counter { frames: 0 };
        game.initialize(&mut context);

        assert!(context.run_frame(&mut game, Duration::from_millis(16)));
        assert_eq!(context.console().char_at(0, 0), '1' as CodePoint);
        assert!(!context.is_shutdown_requested());

        context.input_mut().press(Player::One, JoypadKey::Start);
        assert!(context.run_frame(&mut game, Duration::from_millis(16)));
        assert_eq!(context.console().char_at(0, 0), '2' as CodePoint);
        assert!(context.is_shutdown_requested());
    }

    #[test]
    fn test_unchanged_frame_is_not_updated() {
        struct Idle;
        impl Game for Idle {
            fn initialize(&mut self, _terminal: &mut dyn Terminal) {}
            fn update(&mut self, terminal: &mut dyn Terminal, _delta: Duration) {
                terminal.root_console().print(0, 0, "x");
            }
        }

        let mut context = Context::new(RootConsole::new(2, 1), KeyboardState::new());
        assert!(context.run_frame(&mut Idle, Duration::ZERO));
        assert!(!context.run_frame(&mut Idle, Duration::ZERO));
    }

    #[test]
    fn test_terminal_input_and_fonts() {
        let input = |_: Player, key: JoypadKey| key == JoypadKey::A;
        let mut context = Context::new(RootConsole::new(1, 1), input);
        assert!(context.is_key_down(Player::Three, JoypadKey::A));
        assert!(context.is_key_up(Player::Three, JoypadKey::B));

        let data = vec![0x81u8; 16];
        assert_eq!(context.add_xbm_to_custom_font(0xE000, 8, 16, &data), Ok(1));
        assert!(context.add_to_custom_font(0xE000, 8, 16, &[0; 8]).is_err());
    }
}
