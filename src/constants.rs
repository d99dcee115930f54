//! Application-wide constants.
//!
//! Centralizes magic numbers, the content choice lists, and the persisted
//! state keys for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
/// A poll that times out doubles as the mascot animation tick.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Rolling window for the daily message/mascot re-roll, in seconds.
pub const DAILY_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Default break date if none is given on the command line (June 12).
pub const DEFAULT_BREAK_MONTH: u32 = 6;
pub const DEFAULT_BREAK_DAY: u32 = 12;

/// Motivational messages. One is shown at a time and may re-roll once per
/// rolling 24h window.
pub const MESSAGES: [&str; 5] = [
    "Have a great day!",
    "You're doing great!",
    "Keep going!",
    "You can do it!",
    "You've got this!",
];

/// Mascot identifiers. Each must resolve to an animation in the mascot
/// module; one is shown at a time and may re-roll once per 24h window.
pub const MASCOTS: [&str; 5] = ["sun", "crab", "popsicle", "sailboat", "flower"];

/// Keys used in the persisted timestamp store.
pub mod keys {
    /// Last time the motivational message was re-rolled.
    pub const LAST_MESSAGE_UPDATE: &str = "lastMessageUpdate";
    /// Last time the mascot was re-rolled.
    pub const LAST_MASCOT_UPDATE: &str = "lastMascotUpdate";
    /// Last time the monthly calendar reminder was shown.
    pub const LAST_ALERT: &str = "lastAlertDate";
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 5;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 60;
    /// Monthly reminder dialog width percentage.
    pub const ALERT_WIDTH: u16 = 55;
    /// Monthly reminder dialog height percentage.
    pub const ALERT_HEIGHT: u16 = 35;
}
