//! Selection state and refresh gates.
//!
//! Holds the current motivational message and mascot, and decides when each
//! may re-roll: the message and the mascot each re-roll at most once per
//! rolling 24h window, and the calendar reminder fires at most once per
//! month. The "last fired" bookkeeping lives in an injected
//! [`TimestampStore`] so the gates can be tested with a fixed clock.

use anyhow::{bail, Result};
use chrono::{DateTime, Datelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{keys, DAILY_WINDOW_SECS};
use crate::store::TimestampStore;

/// Current message/mascot selection plus the fixed pools they are drawn from.
pub struct ContentState {
    /// Fixed pool of motivational messages.
    messages: Vec<String>,
    /// Fixed pool of mascot identifiers.
    mascots: Vec<String>,
    /// The message currently on screen.
    pub current_message: String,
    /// The mascot currently on screen.
    pub current_mascot: String,
    /// Random source for draws. Seedable so tests are deterministic.
    rng: StdRng,
}

impl ContentState {
    /// Creates a new state with OS-seeded randomness.
    ///
    /// Both lists must be non-empty; an initial selection is drawn from
    /// each.
    pub fn new(messages: Vec<String>, mascots: Vec<String>) -> Result<Self> {
        Self::with_rng(messages, mascots, StdRng::from_os_rng())
    }

    /// Creates a new state with the given random source.
    pub fn with_rng(messages: Vec<String>, mascots: Vec<String>, mut rng: StdRng) -> Result<Self> {
        if messages.is_empty() {
            bail!("Message list must not be empty");
        }
        if mascots.is_empty() {
            bail!("Mascot list must not be empty");
        }

        let current_message = draw(&messages, &mut rng);
        let current_mascot = draw(&mascots, &mut rng);

        Ok(Self {
            messages,
            mascots,
            current_message,
            current_mascot,
            rng,
        })
    }

    /// Daily gate for the motivational message.
    ///
    /// If less than 24h have passed since the last message re-roll, this is
    /// a no-op. Otherwise a new message is drawn at random and `now` is
    /// persisted as the new last-update time.
    ///
    /// Returns whether a new message was drawn.
    pub fn refresh_message(
        &mut self,
        now: DateTime<Utc>,
        store: &mut dyn TimestampStore,
    ) -> Result<bool> {
        if !daily_gate(store, keys::LAST_MESSAGE_UPDATE, now)? {
            return Ok(false);
        }
        self.current_message = draw(&self.messages, &mut self.rng);
        Ok(true)
    }

    /// Daily gate for the mascot. Same policy as [`Self::refresh_message`],
    /// tracked under its own key so the two gates cannot starve each other.
    pub fn refresh_mascot(
        &mut self,
        now: DateTime<Utc>,
        store: &mut dyn TimestampStore,
    ) -> Result<bool> {
        if !daily_gate(store, keys::LAST_MASCOT_UPDATE, now)? {
            return Ok(false);
        }
        self.current_mascot = draw(&self.mascots, &mut self.rng);
        Ok(true)
    }

    /// Monthly gate for the "check the official school calendar" reminder.
    ///
    /// Fires on the very first call (no persisted alert date) and whenever
    /// the calendar month component differs from the last time it fired.
    /// Only the month-of-year is compared, not the year: January of one
    /// year and January of the next count as the same month.
    pub fn should_show_monthly_alert(
        &self,
        now: DateTime<Utc>,
        store: &mut dyn TimestampStore,
    ) -> Result<bool> {
        match store.get(keys::LAST_ALERT) {
            Some(last) if last.month() == now.month() => Ok(false),
            _ => {
                store.set(keys::LAST_ALERT, now)?;
                Ok(true)
            }
        }
    }

    /// The fixed message pool.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The fixed mascot pool.
    pub fn mascots(&self) -> &[String] {
        &self.mascots
    }
}

/// Returns true (and persists `now`) when at least 24h have passed since
/// the timestamp stored under `key`. A missing timestamp always passes.
fn daily_gate(store: &mut dyn TimestampStore, key: &str, now: DateTime<Utc>) -> Result<bool> {
    if let Some(last) = store.get(key) {
        if (now - last).num_seconds() < DAILY_WINDOW_SECS {
            return Ok(false);
        }
    }
    store.set(key, now)?;
    Ok(true)
}

/// Draws a uniformly random element from a non-empty list.
fn draw(list: &[String], rng: &mut StdRng) -> String {
    let idx = rng.random_range(0..list.len());
    list[idx].clone()
}
