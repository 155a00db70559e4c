//! Voice-command vocabulary and listening policy.
//!
//! The actual recognizer lives outside this crate; it is handed
//! recognized commands as [`VoiceCommand`] values and is expected to
//! honor the listening gate (active session, Prep or Rest step) so
//! exertion noise during Work never misfires.

use crate::types::StepKind;

/// Commands the recognizer may report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceCommand {
    /// Forced forward transition.
    Next,
    /// Stop the clock; the engine acknowledges with "Paused".
    Pause,
    /// Restart the clock; acknowledged with "Resuming".
    Resume,
    /// Speak the current exercise's long-form description.
    Explain,
}

/// Parse a recognized utterance into a command. Case-insensitive,
/// whole-word; anything else is ignored.
pub fn parse_command(utterance: &str) -> Option<VoiceCommand> {
    match utterance.trim().to_lowercase().as_str() {
        "next" => Some(VoiceCommand::Next),
        "pause" => Some(VoiceCommand::Pause),
        "resume" => Some(VoiceCommand::Resume),
        "explain" => Some(VoiceCommand::Explain),
        _ => None,
    }
}

/// Listening is enabled iff the session is active and the current step
/// is Prep or Rest; never during Work, never while paused.
pub fn listening_enabled(is_active: bool, kind: StepKind) -> bool {
    is_active && matches!(kind, StepKind::Prep | StepKind::Rest)
}
