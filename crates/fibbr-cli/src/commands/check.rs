use std::cell::RefCell;
use std::rc::Rc;

use fibbr_core::{normalize, Engine, Event, FrequencyRecord};
use serde::Serialize;

use crate::ui::TerminalUi;

/// Outcome of feeding one raw input to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub input: String,
    /// Normalised value, absent when the input was ignored.
    pub value: Option<u64>,
    pub fibonacci: bool,
    pub events: Vec<Event>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub results: Vec<CheckResult>,
    pub entered: Vec<FrequencyRecord>,
}

/// Run every input through a fresh engine, in order.
pub fn evaluate(inputs: &[String]) -> CheckReport {
    let mut engine = Engine::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.subscribe(move |event| sink.borrow_mut().push(*event));

    let results = inputs
        .iter()
        .map(|input| {
            engine.check_number(input.as_str());
            let events: Vec<Event> = seen.borrow_mut().drain(..).collect();
            CheckResult {
                input: input.clone(),
                value: normalize(input.as_str()),
                fibonacci: events.contains(&Event::FibFound),
                events,
            }
        })
        .collect();

    CheckReport {
        results,
        entered: engine.entered_numbers(),
    }
}

pub fn run(inputs: Vec<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = evaluate(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut ui = TerminalUi::new(std::io::stdout(), Default::default());
    for result in &report.results {
        let verdict = match (result.value, result.fibonacci) {
            (None, _) => "ignored (not a number)".to_string(),
            (Some(v), true) => format!("{v} is a Fibonacci number"),
            (Some(v), false) => format!("{v} is not a Fibonacci number"),
        };
        ui.line(&format!("{}: {verdict}", result.input))?;
    }
    ui.table(&report.entered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_membership_per_input() {
        let report = evaluate(&inputs(&["8", "9", "-13"]));
        let fib: Vec<bool> = report.results.iter().map(|r| r.fibonacci).collect();
        assert_eq!(fib, vec![true, false, true]);
        assert_eq!(report.results[2].value, Some(13));
        assert_eq!(
            report.results[0].events,
            vec![Event::NumberStored, Event::FibFound]
        );
    }

    #[test]
    fn ignored_inputs_emit_nothing() {
        let report = evaluate(&inputs(&["abc", "5"]));
        assert_eq!(report.results[0].value, None);
        assert!(report.results[0].events.is_empty());
        assert_eq!(report.entered.len(), 1);
    }

    #[test]
    fn repeated_inputs_are_counted() {
        let report = evaluate(&inputs(&["4", "4", "7"]));
        assert_eq!(
            report.entered[0],
            FrequencyRecord {
                value: 4,
                frequency: 2
            }
        );
    }
}
