//! Terminal rendering of engine events.

use std::io::{self, Write};

use fibbr_core::storage::MessagesConfig;
use fibbr_core::{Engine, Event, FrequencyRecord};

pub struct TerminalUi<W: Write> {
    out: W,
    messages: MessagesConfig,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W, messages: MessagesConfig) -> Self {
        Self { out, messages }
    }

    pub fn messages(&self) -> &MessagesConfig {
        &self.messages
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// React to one engine event. Reads whatever it needs from `engine`.
    pub fn render(&mut self, event: Event, engine: &Engine) -> io::Result<()> {
        match event {
            Event::TimerSet => {
                let msg = format!("{} ({}s)", self.messages.timer_set, engine.interval());
                self.line(&msg)?;
                let prompt = if engine.entry_count() == 0 {
                    self.messages.first_number.clone()
                } else {
                    self.messages.next_number.clone()
                };
                self.line(&prompt)
            }
            Event::TimerPaused => {
                let msg = self.messages.timer_paused.clone();
                self.line(&msg)
            }
            Event::TimerResumed => {
                let msg = self.messages.timer_resumed.clone();
                self.line(&msg)
            }
            Event::TimerHit => self.table(&engine.entered_numbers()),
            Event::NumberStored => {
                let msg = self.messages.next_number.clone();
                self.line(&msg)
            }
            Event::FibFound => {
                let msg = format!("*** {} ***", self.messages.fib_found);
                self.line(&msg)
            }
            Event::Quit => {
                self.table(&engine.entered_numbers())?;
                let msg = self.messages.goodbye.clone();
                self.line(&msg)
            }
        }
    }

    /// Print entered numbers as `value (frequency)`, one per line.
    pub fn table(&mut self, records: &[FrequencyRecord]) -> io::Result<()> {
        if records.is_empty() {
            return self.line("No numbers entered yet.");
        }
        writeln!(self.out, "Entered numbers:")?;
        for record in records {
            writeln!(self.out, "  {} ({})", record.value, record.frequency)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(events: &[Event], engine: &Engine) -> String {
        let mut ui = TerminalUi::new(Vec::new(), MessagesConfig::default());
        for event in events {
            ui.render(*event, engine).unwrap();
        }
        String::from_utf8(ui.into_inner()).unwrap()
    }

    #[test]
    fn timer_hit_prints_most_frequent_first() {
        let mut engine = Engine::new();
        for v in [3, 8, 8] {
            engine.check_number(v);
        }
        let out = rendered(&[Event::TimerHit], &engine);
        assert_eq!(out, "Entered numbers:\n  8 (2)\n  3 (1)\n");
    }

    #[test]
    fn fib_found_is_announced() {
        let out = rendered(&[Event::NumberStored, Event::FibFound], &Engine::new());
        assert!(out.contains("Great, please enter your next number:"));
        assert!(out.contains("*** FIB ***"));
    }

    #[test]
    fn timer_set_asks_for_first_number() {
        let mut engine = Engine::new();
        engine.set_interval(20);
        let out = rendered(&[Event::TimerSet], &engine);
        assert_eq!(out, "Timer set! (20s)\nPlease enter the first number:\n");
    }

    #[test]
    fn quit_prints_table_and_goodbye() {
        let out = rendered(&[Event::Quit], &Engine::new());
        assert_eq!(out, "No numbers entered yet.\nThanks for playing!\n");
    }
}
