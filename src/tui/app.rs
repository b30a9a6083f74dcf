//! Application loop and key routing.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::theme::Theme;

use super::screens::HomeScreen;

/// Runs the TUI event loop until the user quits.
pub fn run(theme: &Theme) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, theme);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, theme: &Theme) -> io::Result<()> {
    let mut home = HomeScreen::new();

    loop {
        terminal.draw(|frame| home.render(frame, theme))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // The modal owns the keyboard while it is visible; the screen
            // below gets nothing, so `q` is a typed character here.
            if home.modal_visible() {
                match key.code {
                    KeyCode::Enter => home.submit_input(),
                    KeyCode::Esc => home.toggle_modal(),
                    KeyCode::Backspace => home.input_mut().on_backspace(),
                    KeyCode::Char(c) => home.input_mut().on_char(c),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('a') => home.toggle_modal(),
                    KeyCode::Up | KeyCode::Char('k') => home.move_up(),
                    KeyCode::Down | KeyCode::Char('j') => home.move_down(),
                    KeyCode::Enter => home.activate_selected(),
                    _ => {}
                }
            }
        }
    }
}
