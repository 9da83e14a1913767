//! Interactive session: the terminal front end of the engine.
//!
//! A current-thread tokio runtime multiplexes stdin lines with a one-second
//! ticker. Engine events are relayed through a channel so rendering happens
//! outside the listener, with read access to the engine.

use std::time::Duration;

use fibbr_core::{Config, Engine, Event};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::ui::TerminalUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AwaitingInterval,
    Entering,
}

/// What a typed line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Pause,
    Resume,
    List,
    Quit,
    Value(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "pause" | "p" => Command::Pause,
        "resume" | "r" => Command::Resume,
        "list" | "l" => Command::List,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Value(trimmed),
    }
}

pub fn run(config: &Config, interval: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(session(config, interval))
}

async fn session(config: &Config, interval: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = Engine::from_config(config);
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    engine.subscribe(move |event| {
        // The receiver only goes away when the session is over.
        let _ = tx.send(*event);
    });

    let mut ui = TerminalUi::new(std::io::stdout(), config.messages.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut phase = Phase::AwaitingInterval;
    let preset = match interval {
        Some(raw) => engine.set_interval(raw.as_str()),
        None if config.timer.autostart => engine.set_interval(engine.interval()),
        None => None,
    };
    if preset.is_none() {
        let prompt = ui.messages().interval_prompt.clone();
        ui.line(&format!("{prompt} [{}]", engine.interval()))?;
    }
    ui.line("Commands: pause, resume, list, quit")?;

    loop {
        while let Ok(event) = rx.try_recv() {
            if event == Event::TimerSet {
                // A fresh interval restarts the ticker phase.
                ticker.reset();
                phase = Phase::Entering;
            }
            ui.render(event, &engine)?;
        }
        if engine.is_quit() {
            break;
        }

        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => {
                        tracing::debug!("stdin closed");
                        String::from("quit")
                    }
                };
                match (phase, parse_command(&line)) {
                    (_, Command::Quit) => {
                        engine.quit();
                    }
                    (Phase::AwaitingInterval, Command::Value(raw)) => {
                        let raw = if raw.is_empty() {
                            engine.interval().to_string()
                        } else {
                            raw.to_string()
                        };
                        engine.set_interval(raw.as_str());
                    }
                    (Phase::AwaitingInterval, _) => {}
                    (Phase::Entering, Command::Pause) => {
                        engine.pause_timer();
                    }
                    (Phase::Entering, Command::Resume) => {
                        engine.resume_timer();
                    }
                    (Phase::Entering, Command::List) => {
                        ui.table(&engine.entered_numbers())?;
                    }
                    (Phase::Entering, Command::Value(raw)) => {
                        engine.check_number(raw);
                    }
                }
            }
            _ = ticker.tick(), if engine.ticker_active() => {
                engine.tick();
            }
        }
    }

    Ok(())
}
