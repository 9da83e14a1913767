use serde::{Deserialize, Serialize};

/// Every observable state change of the engine produces an Event.
///
/// Events carry no payload; listeners read whatever state they need from the
/// engine after delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A new interval was accepted and the countdown restarted.
    #[serde(rename = "timerset")]
    TimerSet,
    #[serde(rename = "timerpaused")]
    TimerPaused,
    #[serde(rename = "timerresumed")]
    TimerResumed,
    /// The countdown reached zero and was rewound to the full interval.
    #[serde(rename = "timerhit")]
    TimerHit,
    #[serde(rename = "numberstored")]
    NumberStored,
    /// The number just stored is a Fibonacci number.
    #[serde(rename = "fibfound")]
    FibFound,
    #[serde(rename = "fibbrquit")]
    Quit,
}

impl Event {
    /// Stable wire name, identical to the serialized `type` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Event::TimerSet => "timerset",
            Event::TimerPaused => "timerpaused",
            Event::TimerResumed => "timerresumed",
            Event::TimerHit => "timerhit",
            Event::NumberStored => "numberstored",
            Event::FibFound => "fibfound",
            Event::Quit => "fibbrquit",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
