//! The Fibbr engine.
//!
//! Owns the countdown and the table of entered numbers and announces every
//! state change to its listeners. It never touches the terminal; a front end
//! subscribes to events and calls the mutators in response to user input.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = Engine::new();
//! engine.subscribe(|event| println!("{event}"));
//! engine.set_interval(10);      // Some(Event::TimerSet), ticker running
//! engine.check_number("8");     // numberstored, fibfound
//! // Once per second while engine.ticker_active():
//! engine.tick();
//! ```
//!
//! Mutators return the event they emitted last, or `None` when the input was
//! not a number and nothing changed.

use crate::entries::{EntryTable, FrequencyRecord};
use crate::events::Event;
use crate::fibonacci;
use crate::input::{normalize, WholeNumber};
use crate::notify::{ListenerId, Notifier};
use crate::storage::Config;
use crate::timer::Countdown;

#[derive(Debug, Default)]
pub struct Engine {
    countdown: Countdown,
    entries: EntryTable,
    notifier: Notifier,
    quit: bool,
}

impl Engine {
    /// Engine with the default 15 second interval, not running.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval(interval_secs: u64) -> Self {
        Self {
            countdown: Countdown::new(interval_secs),
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_interval(config.timer.default_interval_secs)
    }

    // ── Listeners ────────────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Event) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn interval(&self) -> u64 {
        self.countdown.interval_secs()
    }

    pub fn remaining(&self) -> i64 {
        self.countdown.remaining_secs()
    }

    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// Whether the periodic one-second trigger should be driving `tick()`.
    pub fn ticker_active(&self) -> bool {
        self.countdown.ticker_active()
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn frequency_of(&self, value: u64) -> u64 {
        self.entries.get(value).map(|r| r.frequency).unwrap_or(0)
    }

    /// Snapshot of every entered number, most frequent first.
    ///
    /// Records with equal frequency come back in an unspecified order.
    pub fn entered_numbers(&self) -> Vec<FrequencyRecord> {
        self.entries.by_frequency()
    }

    /// Fibonacci membership over the first 1000 terms. Pure.
    pub fn is_in_sequence(&self, n: u64) -> bool {
        fibonacci::is_in_sequence(n)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Accept a new interval, rewind and (re)start the countdown.
    ///
    /// Input that is not a number leaves everything untouched.
    pub fn set_interval<N: WholeNumber>(&mut self, seconds: N) -> Option<Event> {
        let Some(secs) = normalize(&seconds) else {
            tracing::trace!("interval rejected: not a number");
            return None;
        };
        self.countdown.set_interval(secs);
        self.start_timer();
        tracing::debug!(interval_secs = secs, "timer set");
        self.emit(Event::TimerSet)
    }

    /// Run the countdown. Calling it again replaces the ticker instead of
    /// adding a second one.
    pub fn start_timer(&mut self) {
        if self.countdown.ticker_active() {
            tracing::debug!("restarting ticker");
        }
        self.countdown.start();
    }

    pub fn pause_timer(&mut self) -> Option<Event> {
        let event = self.countdown.pause()?;
        self.emit(event)
    }

    pub fn resume_timer(&mut self) -> Option<Event> {
        let event = self.countdown.resume()?;
        self.emit(event)
    }

    /// Advance the countdown by one second. Call once per second while
    /// [`Engine::ticker_active`] is true.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.countdown.tick()?;
        tracing::debug!(entries = self.entries.len(), "timer hit");
        self.emit(event)
    }

    /// Record an entered number and announce whether it is a Fibonacci
    /// number.
    ///
    /// Emits `NumberStored`, then `FibFound` for members of the sequence.
    pub fn check_number<N: WholeNumber>(&mut self, n: N) -> Option<Event> {
        let Some(value) = normalize(&n) else {
            tracing::trace!("entry rejected: not a number");
            return None;
        };
        let record = self.entries.record(value);
        tracing::debug!(value, frequency = record.frequency, "number stored");
        let mut last = self.emit(Event::NumberStored);

        if fibonacci::is_in_sequence(value) {
            last = self.emit(Event::FibFound);
        }
        last
    }

    /// Stop the countdown and remove the ticker. Entries are kept.
    pub fn quit(&mut self) -> Option<Event> {
        self.countdown.stop();
        self.quit = true;
        tracing::debug!(entries = self.entries.len(), "quit");
        self.emit(Event::Quit)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn emit(&mut self, event: Event) -> Option<Event> {
        self.notifier.emit(event);
        Some(event)
    }
}
