//! Application state and logic.
//!
//! This module contains the core application state, view management,
//! and event handling logic.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

use crate::content::ContentState;
use crate::dates::Dates;
use crate::event::Action;
use crate::mascot;
use crate::store::TimestampStore;

/// The different views/screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// School-year countdown with mascot and message
    Countdown,
    /// Shown once the break date has been reached
    Summer,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// Message/mascot selection and refresh gates
    pub content: ContentState,
    /// Days-remaining computation
    pub dates: Dates,
    /// Persisted gate timestamps
    store: Box<dyn TimestampStore>,
    /// Current view/screen
    pub current_view: View,
    /// Is the help overlay showing?
    pub show_help: bool,
    /// Is the monthly calendar reminder showing?
    pub alert_visible: bool,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Animation tick, advanced on every poll timeout
    pub animation_tick: usize,
}

impl App {
    /// Creates the application state and runs the startup checks: picks
    /// the view from the calendar and consults the monthly reminder gate.
    pub fn new(
        content: ContentState,
        dates: Dates,
        store: Box<dyn TimestampStore>,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Self {
        let current_view = if dates.is_summer(today) {
            View::Summer
        } else {
            View::Countdown
        };

        mascot::warn_if_unknown(&content.current_mascot);

        let mut app = Self {
            content,
            dates,
            store,
            current_view,
            show_help: false,
            alert_visible: false,
            status: None,
            animation_tick: 0,
        };
        app.check_monthly_alert(now);
        app
    }

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(
        &mut self,
        action: Action,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<bool> {
        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        // The reminder dialog eats everything except quit
        if self.alert_visible {
            if action == Action::Quit {
                return Ok(true);
            }
            self.alert_visible = false;
            return Ok(false);
        }

        match action {
            Action::Quit => return Ok(true),
            Action::Refresh => self.refresh(now, today),
            _ => {}
        }
        Ok(false)
    }

    /// Advances the mascot animation. Called on every poll timeout.
    pub fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// The mascot frame to draw right now, if the current identifier has
    /// an animation.
    pub fn mascot_frame(&self) -> Option<&'static str> {
        mascot::frame_at(&self.content.current_mascot, self.animation_tick)
    }

    /// User-initiated refresh (pull-to-refresh in the original).
    ///
    /// Always recomputes the countdown. In the countdown view it also runs
    /// both daily gates; during summer only the dates update, matching the
    /// original behavior.
    pub fn refresh(&mut self, now: DateTime<Utc>, today: NaiveDate) {
        self.dates.update_found_value(today);
        self.current_view = if self.dates.is_summer(today) {
            View::Summer
        } else {
            View::Countdown
        };

        if self.current_view == View::Summer {
            self.set_status("Countdown refreshed", false);
            self.check_monthly_alert(now);
            return;
        }

        let rolled_message = match self.content.refresh_message(now, &mut *self.store) {
            Ok(rolled) => rolled,
            Err(e) => {
                self.set_status(&format!("Failed to save state: {}", e), true);
                return;
            }
        };
        let rolled_mascot = match self.content.refresh_mascot(now, &mut *self.store) {
            Ok(rolled) => rolled,
            Err(e) => {
                self.set_status(&format!("Failed to save state: {}", e), true);
                return;
            }
        };
        if rolled_mascot {
            mascot::warn_if_unknown(&self.content.current_mascot);
        }

        let text = match (rolled_message, rolled_mascot) {
            (true, true) => "Fresh message and mascot for today!",
            (true, false) => "Fresh message for today!",
            (false, true) => "Fresh mascot for today!",
            (false, false) => "Countdown refreshed - come back tomorrow for a new roll",
        };
        self.set_status(text, false);

        self.check_monthly_alert(now);
    }

    /// Consults the monthly gate and raises the reminder dialog if due.
    fn check_monthly_alert(&mut self, now: DateTime<Utc>) {
        match self.content.should_show_monthly_alert(now, &mut *self.store) {
            Ok(true) => self.alert_visible = true,
            Ok(false) => {}
            Err(e) => self.set_status(&format!("Failed to save state: {}", e), true),
        }
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_app(today: NaiveDate, break_date: NaiveDate, now: DateTime<Utc>) -> App {
        let content = ContentState::with_rng(
            vec!["A".to_string(), "B".to_string()],
            vec!["sun".to_string(), "crab".to_string()],
            StdRng::seed_from_u64(9),
        )
        .unwrap();
        let dates = Dates::new(break_date, today);
        App::new(content, dates, Box::new(MemoryStore::new()), now, today)
    }

    #[test]
    fn test_starts_in_countdown_view_during_school_year() {
        let app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        assert_eq!(app.current_view, View::Countdown);
    }

    #[test]
    fn test_starts_in_summer_view_after_break() {
        let app = make_app(date(2026, 7, 1), date(2026, 6, 12), at(2026, 7, 1, 8));
        assert_eq!(app.current_view, View::Summer);
    }

    #[test]
    fn test_first_start_raises_monthly_alert() {
        let app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        assert!(app.alert_visible);
    }

    #[test]
    fn test_any_key_dismisses_alert() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        assert!(app.alert_visible);

        let quit = app
            .handle_event(Action::Enter, at(2026, 3, 2, 9), date(2026, 3, 2))
            .unwrap();
        assert!(!quit);
        assert!(!app.alert_visible);
    }

    #[test]
    fn test_alert_not_raised_again_same_month() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        app.handle_event(Action::Back, at(2026, 3, 2, 8), date(2026, 3, 2))
            .unwrap();

        app.refresh(at(2026, 3, 20, 8), date(2026, 3, 20));
        assert!(!app.alert_visible);
    }

    #[test]
    fn test_alert_raised_on_month_change() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        app.handle_event(Action::Back, at(2026, 3, 2, 8), date(2026, 3, 2))
            .unwrap();

        app.refresh(at(2026, 4, 1, 8), date(2026, 4, 1));
        assert!(app.alert_visible);
    }

    #[test]
    fn test_quit_action_quits() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        app.alert_visible = false;
        let quit = app
            .handle_event(Action::Quit, at(2026, 3, 2, 9), date(2026, 3, 2))
            .unwrap();
        assert!(quit);
    }

    #[test]
    fn test_help_toggles() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        app.alert_visible = false;

        app.handle_event(Action::Help, at(2026, 3, 2, 9), date(2026, 3, 2))
            .unwrap();
        assert!(app.show_help);

        // Any key closes help.
        app.handle_event(Action::Refresh, at(2026, 3, 2, 9), date(2026, 3, 2))
            .unwrap();
        assert!(!app.show_help);
    }

    #[test]
    fn test_refresh_within_window_keeps_selection() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        app.alert_visible = false;

        app.refresh(at(2026, 3, 2, 8), date(2026, 3, 2));
        let message = app.content.current_message.clone();
        let mascot_id = app.content.current_mascot.clone();

        app.refresh(at(2026, 3, 2, 20), date(2026, 3, 2));
        assert_eq!(app.content.current_message, message);
        assert_eq!(app.content.current_mascot, mascot_id);
    }

    #[test]
    fn test_refresh_recomputes_countdown() {
        let mut app = make_app(date(2026, 6, 1), date(2026, 6, 8), at(2026, 6, 1, 8));
        assert_eq!(app.dates.found_value, "5");

        app.refresh(at(2026, 6, 5, 8), date(2026, 6, 5));
        assert_eq!(app.dates.found_value, "1");
    }

    #[test]
    fn test_refresh_switches_to_summer_view() {
        let mut app = make_app(date(2026, 6, 11), date(2026, 6, 12), at(2026, 6, 11, 8));
        assert_eq!(app.current_view, View::Countdown);

        app.refresh(at(2026, 6, 12, 8), date(2026, 6, 12));
        assert_eq!(app.current_view, View::Summer);
    }

    #[test]
    fn test_tick_advances_animation() {
        let mut app = make_app(date(2026, 3, 2), date(2026, 6, 12), at(2026, 3, 2, 8));
        let first = app.mascot_frame();
        app.tick();
        assert_eq!(app.animation_tick, 1);
        // Known mascots always yield a frame.
        assert!(first.is_some());
        assert!(app.mascot_frame().is_some());
    }
}
