//! Keyboard input: maps terminal key events to the game's input vocabulary.

use crate::core::game_loop::InputSource;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Everything the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Leave the game immediately (q or Ctrl+C).
    Quit,
    /// Upward impulse (Space, Up or k). Also starts a round from menus.
    Flap,
    /// Start or restart a round (Enter).
    Confirm,
    /// Back out one screen (Esc).
    Cancel,
}

/// Translate a key press. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => Some(GameInput::Flap),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Cancel),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Reads pending events from the terminal without blocking.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_inputs(&mut self) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(input) = map_key(key_event) {
                    inputs.push(input);
                }
            }
        }
        Ok(inputs)
    }
}
