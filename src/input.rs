//! Key mapping
//!
//! Translates raw key events into the handful of inputs the state
//! machine understands. Which keys quit depends on the phase: while the
//! subject is being typed, `q` is just a letter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Phase;

/// Input understood by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Leave without committing
    Quit,
    /// Show the next catalog page
    AdvancePage,
    /// Accept the current selection, subject, or commit
    Confirm,
    /// Anything else, forwarded to the list or the text input
    Navigate(KeyEvent),
}

impl Input {
    pub fn from_key(phase: Phase, key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Input::Quit,
            (KeyCode::Esc, _) => Input::Quit,
            (KeyCode::Char('q'), KeyModifiers::NONE) if phase != Phase::EnteringMessage => Input::Quit,
            (KeyCode::Tab, _) => Input::AdvancePage,
            (KeyCode::Enter, _) => Input::Confirm,
            _ => Input::Navigate(key),
        }
    }
}

/// Highlight movement in the category list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMove {
    Up,
    Down,
    First,
    Last,
}

impl ListMove {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(ListMove::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(ListMove::Down),
            KeyCode::Home | KeyCode::Char('g') => Some(ListMove::First),
            KeyCode::End | KeyCode::Char('G') => Some(ListMove::Last),
            _ => None,
        }
    }
}
