//! Repeating countdown.
//!
//! The countdown does not own a clock. The caller drives it by invoking
//! `tick()` once per second while the ticker is active.
//!
//! ## Usage
//!
//! ```ignore
//! let mut countdown = Countdown::new(15);
//! countdown.start();
//! // Once per second:
//! countdown.tick(); // Returns Some(Event::TimerHit) when it wraps around
//! ```

use crate::events::Event;

pub const DEFAULT_INTERVAL_SECS: u64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    interval_secs: u64,
    /// Seconds until the next hit. Signed so a zero interval can dip below
    /// zero before it is rewound.
    remaining_secs: i64,
    running: bool,
    /// Whether the periodic one-second trigger is installed.
    ticker_active: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_SECS)
    }
}

impl Countdown {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval_secs,
            remaining_secs: to_remaining(interval_secs),
            running: false,
            ticker_active: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn remaining_secs(&self) -> i64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticker_active(&self) -> bool {
        self.ticker_active
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Replace the interval and rewind the countdown. Does not start it.
    pub fn set_interval(&mut self, interval_secs: u64) {
        self.interval_secs = interval_secs;
        self.remaining_secs = to_remaining(interval_secs);
    }

    /// Run the countdown and (re)install the ticker.
    ///
    /// There is only one ticker; starting again replaces it rather than
    /// stacking a second one.
    pub fn start(&mut self) {
        self.running = true;
        self.ticker_active = true;
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.running = false;
        Some(Event::TimerPaused)
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.running = true;
        Some(Event::TimerResumed)
    }

    /// Stop counting and remove the ticker.
    pub fn stop(&mut self) {
        self.running = false;
        self.ticker_active = false;
    }

    /// Call once per second. Returns `Some(Event::TimerHit)` when the
    /// countdown reaches zero; the countdown is then rewound.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs <= 0 {
            self.remaining_secs = to_remaining(self.interval_secs);
            return Some(Event::TimerHit);
        }
        None
    }
}

fn to_remaining(interval_secs: u64) -> i64 {
    i64::try_from(interval_secs).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_countdown_is_idle() {
        let countdown = Countdown::default();
        assert_eq!(countdown.interval_secs(), 15);
        assert_eq!(countdown.remaining_secs(), 15);
        assert!(!countdown.is_running());
        assert!(!countdown.ticker_active());
    }

    #[test]
    fn start_pause_resume() {
        let mut countdown = Countdown::new(5);
        countdown.start();
        assert!(countdown.is_running());

        assert_eq!(countdown.pause(), Some(Event::TimerPaused));
        assert!(!countdown.is_running());
        assert!(countdown.ticker_active());

        assert_eq!(countdown.resume(), Some(Event::TimerResumed));
        assert!(countdown.is_running());
    }

    #[test]
    fn hits_on_the_last_second_and_rewinds() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), None);
        assert_eq!(countdown.tick(), Some(Event::TimerHit));
        assert_eq!(countdown.remaining_secs(), 3);
    }

    #[test]
    fn paused_countdown_does_not_move() {
        let mut countdown = Countdown::new(3);
        countdown.start();
        countdown.pause();
        for _ in 0..10 {
            assert_eq!(countdown.tick(), None);
        }
        assert_eq!(countdown.remaining_secs(), 3);
    }

    #[test]
    fn zero_interval_hits_every_tick() {
        let mut countdown = Countdown::new(0);
        countdown.start();
        assert_eq!(countdown.tick(), Some(Event::TimerHit));
        assert_eq!(countdown.tick(), Some(Event::TimerHit));
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn set_interval_rewinds() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.tick();
        countdown.set_interval(4);
        assert_eq!(countdown.remaining_secs(), 4);
        assert_eq!(countdown.interval_secs(), 4);
    }

    #[test]
    fn stop_removes_ticker() {
        let mut countdown = Countdown::new(10);
        countdown.start();
        countdown.stop();
        assert!(!countdown.is_running());
        assert!(!countdown.ticker_active());
    }
}
