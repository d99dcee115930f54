//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Refresh: recompute the countdown and re-roll message/mascot if due
    Refresh,
    /// Show help
    Help,
    /// Acknowledge a dialog
    Enter,
    /// Dismiss a dialog or overlay
    Back,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout;
    /// the caller uses that as the animation tick.
    pub fn next(&self) -> io::Result<Option<Action>> {
        // Check if an event is available
        if event::poll(self.poll_timeout)? {
            // Read the event
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Action::Refresh),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc | KeyCode::Char('b') => Some(Action::Back),

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_refresh_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('r'))),
            Some(Action::Refresh)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(5))),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_dismiss_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('b'))),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }
}
