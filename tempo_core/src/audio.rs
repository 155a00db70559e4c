//! Audio-cue collaborator contract.
//!
//! The engine dispatches cues at defined transition points and ignores
//! the results: calls are fire-and-forget, and implementations must
//! swallow their own failures so a broken speaker can never stall a
//! step transition.
//!
//! Mute is a playback concern, not a scheduling concern: the engine
//! dispatches identically whether muted or not, and implementations
//! consult the shared [`MuteFlag`] before making noise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared mute switch between the engine and an audio implementation.
#[derive(Clone, Debug, Default)]
pub struct MuteFlag(Arc<AtomicBool>);

impl MuteFlag {
    pub fn new(muted: bool) -> Self {
        Self(Arc::new(AtomicBool::new(muted)))
    }

    pub fn is_muted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, muted: bool) {
        self.0.store(muted, Ordering::Relaxed);
    }
}

/// Spoken-cue dispatcher the session engine talks to.
pub trait AudioCues {
    /// Entry cue for a Prep step.
    fn announce_prep(&self, seconds: u32);

    /// Entry cue for a Rest step, previewing what comes next along with
    /// any equipment or weight suggestions.
    fn announce_rest(&self, seconds: u32, next_label: &str, suggestions: &[String]);

    /// Entry cue for a Work step.
    fn start_work(&self);

    /// Short cue for one of the last seconds of a countdown.
    fn count_down(&self, n: u32);

    /// Distinct cue on session completion.
    fn announce_complete(&self);

    /// Free-form speech (command acknowledgments, explanations).
    fn speak(&self, text: &str);

    /// Release any held playback resources. Called exactly once on close.
    fn stop(&self);
}

/// No-op dispatcher for headless runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCues;

impl AudioCues for NullCues {
    fn announce_prep(&self, _seconds: u32) {}
    fn announce_rest(&self, _seconds: u32, _next_label: &str, _suggestions: &[String]) {}
    fn start_work(&self) {}
    fn count_down(&self, _n: u32) {}
    fn announce_complete(&self) {}
    fn speak(&self, _text: &str) {}
    fn stop(&self) {}
}
