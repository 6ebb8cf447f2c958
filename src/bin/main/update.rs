//! The terminal application updater.

use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The support for the app controls. Each app variant must know what to do when something's being requested.
pub trait ControlsSupport {
    fn move_selection(&mut self, direction: MoveSelectionDirection);
    fn type_char(&mut self, c: char);
    fn erase_char(&mut self);
    fn submit(&mut self);
    fn leave(&mut self, force: bool);
}

/// The available directions to move the selection to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveSelectionDirection {
    Up,
    Down,
}

pub fn update(app: &mut App, key_event: KeyEvent) {
    use MoveSelectionDirection::*;

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => app.leave(true),
        KeyCode::Up => app.move_selection(Up),
        KeyCode::Down => app.move_selection(Down),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.erase_char(),
        KeyCode::Esc => app.leave(false),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    };
}
