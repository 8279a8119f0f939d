use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::prelude::*;

use crate::app::actions::{Action, apply_action};
use crate::app::events::handle_event;
use crate::infra::constants::EVENT_POLL_MS;
use crate::state::State;
use crate::ui;

pub struct App {
    pub state: State,
}

impl App {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// Event loop: draw when dirty, poll for input, apply the resulting
    /// action. Everything after the startup load is synchronous; each event
    /// is handled to completion before the next frame.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            if self.state.dirty {
                terminal.draw(|frame| ui::render(frame, &mut self.state))?;
                self.state.dirty = false;
            }

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                let evt = event::read()?;
                match handle_event(&evt, &self.state) {
                    Some(Action::None) => {}
                    Some(action) => apply_action(&mut self.state, action),
                    None => return Ok(()), // Quit
                }
            }
        }
    }
}
