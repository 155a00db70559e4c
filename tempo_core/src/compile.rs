//! Step compiler: expands a sanitized workout into the immutable,
//! ordered step sequence a session walks through.
//!
//! Assumes sanitized input and performs no validation; sanitize before
//! compiling. Compilation is deterministic: the same workout always
//! yields the identical sequence, so a session can be recompiled for
//! resume without drifting from a prior run.

use crate::config::SessionConfig;
use crate::types::{Exercise, Step, StepKind, Workout};

/// What follows the current position, for Rest/Work previews.
enum Upcoming<'a> {
    SameExercise(&'a Exercise),
    NextExercise(&'a Exercise),
    End,
}

fn upcoming<'a>(workout: &'a Workout, ei: usize, set: u32) -> Upcoming<'a> {
    let ex = &workout.exercises[ei];
    if set + 1 < ex.sets {
        Upcoming::SameExercise(ex)
    } else if let Some(next) = workout.exercises.get(ei + 1) {
        Upcoming::NextExercise(next)
    } else {
        Upcoming::End
    }
}

/// Compile a sanitized workout into its step sequence.
///
/// Per exercise and set: Prep, Work, then Rest unless this is the last
/// set of the last exercise. The sequence always ends with exactly one
/// Finished step of duration 0, even for an empty workout.
pub fn compile_steps(workout: &Workout, session: &SessionConfig) -> Vec<Step> {
    let mut steps = Vec::new();

    for (ei, ex) in workout.exercises.iter().enumerate() {
        for set in 0..ex.sets {
            let prep_description = if set == 0 {
                "First set. Let's go.".to_string()
            } else {
                format!("Set {} of {}", set + 1, ex.sets)
            };

            steps.push(Step {
                kind: StepKind::Prep,
                duration_secs: session.prep_seconds,
                display_name: ex.name.clone(),
                description: prep_description,
                exercise: Some(ei),
                next_label: ex.name.clone(),
                reps: ex.reps.clone(),
                equipment: ex.equipment.clone(),
                suggested_weight: ex.suggested_weight.clone(),
            });

            let work_next = match upcoming(workout, ei, set) {
                Upcoming::SameExercise(_) => "Rest".to_string(),
                Upcoming::NextExercise(next) => next.name.clone(),
                Upcoming::End => "Finished".to_string(),
            };

            steps.push(Step {
                kind: StepKind::Work,
                duration_secs: ex.duration_secs,
                display_name: ex.name.clone(),
                description: ex.description.clone(),
                exercise: Some(ei),
                next_label: work_next,
                reps: ex.reps.clone(),
                equipment: ex.equipment.clone(),
                suggested_weight: ex.suggested_weight.clone(),
            });

            // Rest previews whatever comes next: the next set of this
            // exercise or the first set of the following one.
            let preview = match upcoming(workout, ei, set) {
                Upcoming::SameExercise(ex) => Some((ei, ex)),
                Upcoming::NextExercise(next) => Some((ei + 1, next)),
                Upcoming::End => None,
            };

            if let Some((target_idx, target)) = preview {
                steps.push(Step {
                    kind: StepKind::Rest,
                    duration_secs: ex.rest_secs,
                    display_name: "Rest".to_string(),
                    description: format!("Up next: {}", target.name),
                    exercise: Some(target_idx),
                    next_label: target.name.clone(),
                    reps: target.reps.clone(),
                    equipment: target.equipment.clone(),
                    suggested_weight: target.suggested_weight.clone(),
                });
            }
        }
    }

    steps.push(Step {
        kind: StepKind::Finished,
        duration_secs: 0,
        display_name: "Finished".to_string(),
        description: "Workout complete".to_string(),
        exercise: None,
        next_label: String::new(),
        reps: None,
        equipment: vec![],
        suggested_weight: None,
    });

    tracing::debug!(
        "Compiled '{}' into {} steps",
        workout.title,
        steps.len()
    );
    steps
}
