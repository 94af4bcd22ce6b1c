pub mod game_common;
pub mod menu_scene;
pub mod play_scene;

use crate::core::game_loop::Renderer;
use crate::core::game_state::{Screen, Snapshot};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

/// Draw the scene for the snapshot's screen.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    match snapshot.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, snapshot),
        Screen::Playing => play_scene::render_play(frame, area, snapshot),
        Screen::GameOver => menu_scene::render_game_over(frame, area, snapshot),
    }
}

/// Renders snapshots to a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, snapshot))?;
        Ok(())
    }
}
