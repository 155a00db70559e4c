//! Safety sanitizer: normalizes a raw (possibly AI-generated) workout
//! into physiologically safe, internally consistent values.
//!
//! Never fails; missing or malformed fields are coerced to defaults
//! rather than rejected, because upstream generation is unreliable and
//! the system must never block a user from training.
//!
//! Classification is a heuristic over free-text names. Ambiguous names
//! ("Wall Sit Jumps") match the isometric patterns first; that is
//! accepted behavior, not a bug to fix here.

use crate::config::SafetyConfig;
use crate::types::{Exercise, Loose, RawExercise, RawWorkout, Workout};
use once_cell::sync::Lazy;
use regex::Regex;

static ISOMETRIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)plank|hold|sit|static|wall").unwrap());

static CARDIO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)run|jog|jump|burpee").unwrap());

static COMPOUND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)squat|deadlift|bench|press|row").unwrap());

static MAX_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)max").unwrap());

/// Static positions held for time rather than performed as reps.
pub fn is_isometric(name: &str) -> bool {
    ISOMETRIC.is_match(name)
}

pub fn is_cardio(name: &str) -> bool {
    CARDIO.is_match(name)
}

/// Multi-joint movements that get the longer rest default.
pub fn is_compound(name: &str) -> bool {
    COMPOUND.is_match(name)
}

/// Parse a duration field ("7 mins", "45 sec", bare number) into whole
/// seconds. Unknown or absent values become 0 (rep-based).
pub fn parse_duration_secs(value: Option<&Loose>) -> u32 {
    let value = match value {
        Some(v) => v,
        None => return 0,
    };

    match value {
        Loose::Number(n) if *n > 0.0 => *n as u32,
        Loose::Number(_) => 0,
        Loose::Text(s) => {
            let mut tokens = s.split_whitespace();
            let amount = match tokens.next().and_then(|t| t.parse::<f64>().ok()) {
                Some(n) if n > 0.0 => n,
                _ => return 0,
            };
            let unit = tokens.next().unwrap_or("");
            if unit.to_ascii_lowercase().starts_with("min") {
                (amount * 60.0) as u32
            } else {
                amount as u32
            }
        }
    }
}

/// Sanitize one raw exercise against the safety constraint set.
///
/// Rules, in order: field normalization, isometric split, minimum
/// sets (with the cardio/"max" exception), rest default injection.
fn sanitize_exercise(raw: &RawExercise, safety: &SafetyConfig) -> Exercise {
    let name = raw.name.trim().to_string();
    let mut sets = raw
        .sets
        .as_ref()
        .and_then(Loose::as_int)
        .filter(|n| *n > 0)
        .unwrap_or(0) as u32;
    let mut duration_secs = parse_duration_secs(raw.duration.as_ref());

    let isometric = is_isometric(&name);
    let cardio = is_cardio(&name);

    // Long isometric holds are split into fixed-length sets.
    if isometric && duration_secs > safety.isometric_split_seconds {
        let split = safety.isometric_split_seconds;
        sets = duration_secs.div_ceil(split);
        duration_secs = split;
        tracing::debug!(
            "Split isometric '{}' into {} sets of {}s",
            name,
            sets,
            split
        );
    }

    // Minimum volume, unless cardio or an explicit max-effort test.
    if sets < safety.min_sets && !cardio && !MAX_TAG.is_match(&name) {
        tracing::debug!("Forcing '{}' from {} to {} sets", name, sets, safety.min_sets);
        sets = safety.min_sets;
    }

    // The exceptions above still train at least one set.
    sets = sets.max(1);

    let rest_secs = match raw.rest.as_ref().and_then(Loose::as_int) {
        Some(r) if r >= 0 => r as u32,
        _ => {
            if is_compound(&name) {
                safety.compound_rest_seconds
            } else {
                safety.default_rest_seconds
            }
        }
    };

    Exercise {
        name,
        sets,
        duration_secs,
        rest_secs,
        reps: raw.reps.as_ref().map(Loose::as_text),
        equipment: raw.equipment.clone(),
        description: raw.description.clone(),
        suggested_weight: raw.suggested_weight.clone(),
    }
}

/// Sanitize a raw workout into a `Workout` that is safe to compile.
///
/// Applies the volume cap first, then per-exercise rules. Idempotent:
/// re-sanitizing already-sanitized values is a no-op.
pub fn sanitize_workout(raw: &RawWorkout, safety: &SafetyConfig) -> Workout {
    let mut exercises = &raw.exercises[..];
    if exercises.len() > safety.max_exercises {
        tracing::warn!(
            "Workout '{}' has {} exercises, truncating to {}",
            raw.title,
            exercises.len(),
            safety.max_exercises
        );
        exercises = &exercises[..safety.max_exercises];
    }

    Workout {
        title: raw.title.clone(),
        exercises: exercises
            .iter()
            .map(|e| sanitize_exercise(e, safety))
            .collect(),
    }
}
