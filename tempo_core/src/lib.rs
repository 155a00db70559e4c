#![forbid(unsafe_code)]

//! Core domain model and session logic for the Tempo guided-workout system.
//!
//! This crate provides:
//! - Domain types (raw and sanitized workouts, steps, session state)
//! - Safety sanitizer for unreliable upstream workout generators
//! - Step compiler (workout -> ordered prep/work/rest/finished steps)
//! - Tick-driven session engine with audio-cue and voice-command seams
//!
//! Data flows raw workout -> sanitizer -> compiler -> engine. The
//! compiler assumes sanitized input; always sanitize first.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod sanitize;
pub mod compile;
pub mod audio;
pub mod voice;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use sanitize::sanitize_workout;
pub use compile::compile_steps;
pub use audio::{AudioCues, MuteFlag, NullCues};
pub use voice::{parse_command, VoiceCommand};
pub use engine::{estimated_kcal, SessionEngine};
