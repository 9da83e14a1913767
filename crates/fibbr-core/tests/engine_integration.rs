//! Integration tests for the engine's public behaviour.

use std::cell::RefCell;
use std::rc::Rc;

use fibbr_core::{Engine, Event, FrequencyRecord};

#[test]
fn test_interval_round_trip() {
    let mut engine = Engine::new();
    for v in [1u64, 10, 60, 3600] {
        engine.set_interval(v);
        assert_eq!(engine.interval(), v);
    }
}

#[test]
fn test_negative_interval_matches_positive() {
    let mut a = Engine::new();
    let mut b = Engine::new();
    a.set_interval(10);
    b.set_interval(-10);
    assert_eq!(a.interval(), b.interval());
    assert_eq!(a.remaining(), b.remaining());
    assert_eq!(a.is_running(), b.is_running());
}

#[test]
fn test_invalid_interval_keeps_previous() {
    let mut engine = Engine::new();
    engine.set_interval(10);
    engine.set_interval("not a number");
    assert_eq!(engine.interval(), 10);
    engine.set_interval(-10);
    assert_eq!(engine.interval(), 10);
}

#[test]
fn test_timer_controls() {
    let mut engine = Engine::new();
    assert!(!engine.is_running());

    engine.start_timer();
    assert!(engine.is_running());

    engine.pause_timer();
    assert!(!engine.is_running());

    engine.resume_timer();
    assert!(engine.is_running());
}

#[test]
fn test_repeated_start_keeps_one_ticker() {
    let mut engine = Engine::new();
    engine.set_interval(3);
    engine.start_timer();
    engine.start_timer();
    assert!(engine.ticker_active());

    // One tick per second still takes exactly three seconds to hit.
    assert_eq!(engine.tick(), None);
    assert_eq!(engine.tick(), None);
    assert_eq!(engine.tick(), Some(Event::TimerHit));
}

#[test]
fn test_single_entry() {
    let mut engine = Engine::new();
    engine.check_number(5);
    assert_eq!(
        engine.entered_numbers(),
        vec![FrequencyRecord {
            value: 5,
            frequency: 1
        }]
    );
}

#[test]
fn test_repeated_entry() {
    let mut engine = Engine::new();
    for _ in 0..5 {
        engine.check_number(5);
    }
    let numbers = engine.entered_numbers();
    assert_eq!(numbers.len(), 1);
    assert_eq!(numbers[0].frequency, 5);
}

#[test]
fn test_distinct_entries() {
    let mut engine = Engine::new();
    for v in [1, 2, 3, 4, 5] {
        engine.check_number(v);
    }
    let numbers = engine.entered_numbers();
    assert_eq!(numbers.len(), 5);
    assert!(numbers.iter().all(|r| r.frequency == 1));
}

#[test]
fn test_entered_numbers_most_frequent_first() {
    let mut engine = Engine::new();
    for v in ["7", "3", "7", "-7", "3", "1"] {
        engine.check_number(v);
    }
    let numbers = engine.entered_numbers();
    assert_eq!(numbers[0], FrequencyRecord { value: 7, frequency: 3 });
    assert_eq!(numbers[1], FrequencyRecord { value: 3, frequency: 2 });
    assert_eq!(numbers[2], FrequencyRecord { value: 1, frequency: 1 });
}

#[test]
fn test_entered_numbers_is_stable_without_mutation() {
    let mut engine = Engine::new();
    for v in [2, 9, 2, 4, 9, 6] {
        engine.check_number(v);
    }
    let mut first = engine.entered_numbers();
    let mut second = engine.entered_numbers();
    first.sort_by_key(|r| r.value);
    second.sort_by_key(|r| r.value);
    assert_eq!(first, second);
}

#[test]
fn test_sequence_membership() {
    let engine = Engine::new();
    assert!(engine.is_in_sequence(6765));
    assert!(!engine.is_in_sequence(5999));
    assert!(engine.is_in_sequence(0));
    assert!(engine.is_in_sequence(1));
}

#[test]
fn test_full_session_event_stream() {
    let mut engine = Engine::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    engine.subscribe(move |e| sink.borrow_mut().push(e.name()));

    engine.set_interval(2);
    engine.check_number(13);
    engine.tick();
    engine.pause_timer();
    engine.tick();
    engine.resume_timer();
    engine.tick();
    engine.check_number(12);
    engine.quit();

    assert_eq!(
        *log.borrow(),
        vec![
            "timerset",
            "numberstored",
            "fibfound",
            "timerpaused",
            "timerresumed",
            "timerhit",
            "numberstored",
            "fibbrquit",
        ]
    );
    assert_eq!(engine.entry_count(), 2);
}

#[test]
fn test_listeners_are_independent() {
    let mut engine = Engine::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let a = Rc::clone(&order);
    let first = engine.subscribe(move |_| a.borrow_mut().push("a"));
    let b = Rc::clone(&order);
    engine.subscribe(move |_| b.borrow_mut().push("b"));

    engine.check_number(4);
    assert_eq!(*order.borrow(), vec!["a", "b"]);

    assert!(engine.unsubscribe(first));
    engine.check_number(4);
    assert_eq!(*order.borrow(), vec!["a", "b", "b"]);
}
