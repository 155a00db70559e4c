//! Core domain types for the Tempo session system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw (loosely-typed) workout input as produced by external generators
//! - Sanitized exercises and workouts
//! - Compiled session steps
//! - Session state snapshots and completion summaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Raw Input Types
// ============================================================================

/// A field that upstream generators emit either as a JSON number or as a
/// display string ("3", "7 mins", "45 sec").
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Loose {
    Number(f64),
    Text(String),
}

impl Loose {
    /// Best-effort integer view. Strings must parse as a bare number.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Loose::Number(n) => Some(*n as i64),
            Loose::Text(s) => s.trim().parse::<f64>().ok().map(|n| n as i64),
        }
    }

    /// The value as display text.
    pub fn as_text(&self) -> String {
        match self {
            Loose::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Loose::Text(s) => s.clone(),
        }
    }
}

/// One exercise as supplied by the external catalog or generator.
///
/// Every field is optional or defaulted: upstream generation is
/// unreliable and malformed entries are coerced, never rejected.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawExercise {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub sets: Option<Loose>,

    #[serde(default)]
    pub duration: Option<Loose>,

    #[serde(default)]
    pub rest: Option<Loose>,

    #[serde(default)]
    pub reps: Option<Loose>,

    #[serde(default)]
    pub equipment: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, alias = "suggestedWeight")]
    pub suggested_weight: Option<String>,
}

/// A raw workout: title plus ordered exercise list. Read-only input.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawWorkout {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub exercises: Vec<RawExercise>,
}

// ============================================================================
// Sanitized Types
// ============================================================================

/// A sanitized exercise. Numeric fields are canonical; the legacy
/// display forms (sets as a numeric string, duration as "N sec") exist
/// only at the serialization boundary.
///
/// Immutable for the lifetime of a session once produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,

    /// Number of sets, always ≥1 (≥3 outside the cardio/"max" exception).
    /// Serialized as a numeric string for legacy consumers.
    #[serde(with = "numeric_string")]
    pub sets: u32,

    /// Work duration per set in whole seconds. 0 means rep-based: the
    /// step never auto-expires and advances only on explicit action.
    pub duration_secs: u32,

    /// Rest after each set in whole seconds.
    #[serde(alias = "rest")]
    pub rest_secs: u32,

    pub reps: Option<String>,
    pub equipment: Vec<String>,
    pub description: String,
    pub suggested_weight: Option<String>,
}

impl Exercise {
    /// Legacy display form of the duration ("60 sec", "2 min", "" when
    /// rep-based). String formatting lives here, at the presentation
    /// boundary; everything internal uses `duration_secs`.
    pub fn duration_display(&self) -> String {
        match self.duration_secs {
            0 => String::new(),
            s if s % 60 == 0 => format!("{} min", s / 60),
            s => format!("{} sec", s),
        }
    }
}

/// Serialize `sets` as a numeric string; accept either form on input so
/// sanitized output can be re-ingested.
mod numeric_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &u32, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&v.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Either {
            Num(u32),
            Text(String),
        }
        match Either::deserialize(de)? {
            Either::Num(n) => Ok(n),
            Either::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(serde::de::Error::custom),
        }
    }
}

/// A sanitized workout, safe to compile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub title: String,
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Step Types
// ============================================================================

/// The kind of a compiled step. Together with the running/paused flag
/// these are the states of the session machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Prep,
    Work,
    Rest,
    Finished,
}

/// One atomic unit of a compiled session.
///
/// Steps are produced once per session and never mutated; only the
/// engine's current index changes. The last element of every compiled
/// sequence is exactly one Finished step with duration 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub kind: StepKind,

    /// Seconds on the countdown; 0 = manual (no countdown decrements).
    pub duration_secs: u32,

    pub display_name: String,
    pub description: String,

    /// Index into the sanitized workout's exercise list; None for Finished.
    pub exercise: Option<usize>,

    /// Name of what follows, used for Rest/Prep previews.
    pub next_label: String,

    pub reps: Option<String>,
    pub equipment: Vec<String>,
    pub suggested_weight: Option<String>,
}

// ============================================================================
// Session State and Summary
// ============================================================================

/// Snapshot of the live session state, as seen by frontends.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub step_index: usize,
    pub time_left: u32,
    pub is_active: bool,
    pub is_muted: bool,
    /// Per-step one-shot; true once the entry announcement has fired.
    pub entry_announced: bool,
}

/// Handed to the completion callback on natural session completion.
/// Persistence of the calorie total and completion count is the
/// caller's concern.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub title: String,
    pub completed_at: DateTime<Utc>,
    pub total_kcal: f64,
    pub exercise_count: usize,
}
