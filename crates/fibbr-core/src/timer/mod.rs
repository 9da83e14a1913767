mod countdown;

pub use countdown::{Countdown, DEFAULT_INTERVAL_SECS};
