//! # Fibbr Core Library
//!
//! This library provides the business logic for Fibbr, a small number game:
//! a repeating countdown prompts the user for numbers, every entry is counted,
//! and entries that belong to the Fibonacci sequence are announced.
//!
//! ## Architecture
//!
//! - **Engine**: A synchronous state machine that requires the caller to
//!   invoke `tick()` once per second while its ticker is active
//! - **Events**: Payload-free notifications delivered to subscribed listeners
//!   in registration order
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Engine`]: Countdown, entry table and notifications
//! - [`EntryTable`]: Frequency table of entered numbers
//! - [`Countdown`]: Repeating one-second countdown
//! - [`Config`]: Application configuration management

pub mod engine;
pub mod entries;
pub mod error;
pub mod events;
pub mod fibonacci;
pub mod input;
pub mod notify;
pub mod storage;
pub mod timer;

pub use engine::Engine;
pub use entries::{EntryTable, FrequencyRecord};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use fibonacci::is_in_sequence;
pub use input::{normalize, parse_whole_number, WholeNumber};
pub use notify::{ListenerId, Notifier};
pub use storage::Config;
pub use timer::Countdown;
