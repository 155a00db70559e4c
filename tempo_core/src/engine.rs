//! Session engine: the real-time state machine that walks a compiled
//! step sequence.
//!
//! The machine's states are the step kinds {Prep, Work, Rest, Finished}
//! combined with a running/paused flag; transitions are strictly
//! forward through the compiled index. There is no backward step.
//!
//! The engine is single-threaded and tick-driven: an external tick
//! source calls [`SessionEngine::tick`] once per real second. All
//! transition triggers (timer expiry, manual skip, voice NEXT) funnel
//! through [`SessionEngine::advance`], which is idempotent within one
//! tick instant via a transition latch, so a voice command and a timer
//! expiry landing in the same second can never skip a step twice or
//! double-count calories.
//!
//! The caller owns tick scheduling and must arm exactly one tick source
//! at a time; because the engine mutates only inside `tick`/`advance`
//! calls, a single-consumer loop satisfies that by construction.

use crate::audio::{AudioCues, MuteFlag};
use crate::config::SessionConfig;
use crate::types::{SessionState, SessionSummary, Step, StepKind, Workout};
use crate::voice::{listening_enabled, VoiceCommand};
use chrono::Utc;
use uuid::Uuid;

/// Invoked exactly once, after the completion grace, on natural
/// session completion.
pub type CompletionCallback = Box<dyn FnOnce(&SessionSummary)>;

/// Countdown cues fire while `time_left` is in the open window (1, 4]
/// on non-Work steps.
const COUNTDOWN_WINDOW: u32 = 4;

pub struct SessionEngine<A: AudioCues> {
    workout: Workout,
    steps: Vec<Step>,
    audio: A,
    mute: MuteFlag,
    on_complete: Option<CompletionCallback>,

    idx: usize,
    time_left: u32,
    active: bool,
    entry_announced: bool,
    /// Open at the start of each tick instant; the first advance in an
    /// instant closes it and later triggers in the same instant drop.
    advance_open: bool,

    completed: bool,
    grace_left: u32,
    callback_fired: bool,
    closed: bool,
    started: bool,

    summary: Option<SessionSummary>,
    kcal_per_minute: f64,
    grace_seconds: u32,
}

impl<A: AudioCues> SessionEngine<A> {
    /// Build an engine over a sanitized workout and its compiled steps.
    ///
    /// Nothing runs until [`start`](Self::start) is called.
    pub fn new(workout: Workout, steps: Vec<Step>, audio: A, config: &SessionConfig) -> Self {
        Self {
            workout,
            steps,
            audio,
            mute: MuteFlag::new(config.start_muted),
            on_complete: None,
            idx: 0,
            time_left: 0,
            active: false,
            entry_announced: false,
            advance_open: true,
            completed: false,
            grace_left: 0,
            callback_fired: false,
            closed: false,
            started: false,
            summary: None,
            kcal_per_minute: config.kcal_per_minute,
            grace_seconds: config.completion_grace_seconds,
        }
    }

    /// Register the completion callback. Must be set before `start`
    /// to be guaranteed delivery on an already-finished workout.
    pub fn with_on_complete(mut self, cb: CompletionCallback) -> Self {
        self.on_complete = Some(cb);
        self
    }

    /// Share the mute flag with an audio implementation.
    pub fn mute_flag(&self) -> MuteFlag {
        self.mute.clone()
    }

    /// Use a caller-owned mute flag (already shared with the audio
    /// implementation) instead of the engine's own.
    pub fn with_mute_flag(mut self, flag: MuteFlag) -> Self {
        self.mute = flag;
        self
    }

    /// Enter the first step. A sequence that is empty or starts at
    /// Finished completes immediately instead of stalling.
    pub fn start(&mut self) {
        if self.started || self.closed {
            return;
        }
        self.started = true;
        if self.steps.is_empty() {
            tracing::warn!("Empty step sequence, completing immediately");
            self.complete();
            return;
        }
        self.enter_step();
    }

    // ------------------------------------------------------------------
    // Clock
    // ------------------------------------------------------------------

    /// One real second elapsed. Decrements the countdown while the
    /// session is active and the current step is timed; fires countdown
    /// cues over the last seconds of non-Work steps; forces a forward
    /// transition when the countdown reaches ≤1. After completion,
    /// ticks count down the grace and then deliver the callback.
    pub fn tick(&mut self) {
        if self.closed {
            return;
        }

        // A new instant: reopen the transition latch.
        self.advance_open = true;

        if self.completed {
            if !self.callback_fired {
                self.grace_left = self.grace_left.saturating_sub(1);
                if self.grace_left == 0 {
                    self.fire_completion_callback();
                }
            }
            return;
        }

        if !self.active {
            return;
        }

        let (kind, duration) = {
            let step = &self.steps[self.idx];
            (step.kind, step.duration_secs)
        };
        if kind == StepKind::Finished || duration == 0 {
            // Manual steps never auto-expire.
            return;
        }

        self.time_left = self.time_left.saturating_sub(1);
        let t = self.time_left;

        if kind != StepKind::Work && t > 1 && t <= COUNTDOWN_WINDOW {
            self.audio.count_down(t - 1);
        }

        if t <= 1 {
            self.time_left = 0;
            self.advance();
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Forced forward transition: the single funnel for timer expiry,
    /// manual skip, and voice NEXT. The only way to advance a
    /// duration-0 step. Idempotent within one tick instant.
    pub fn advance(&mut self) {
        if self.closed || !self.started {
            return;
        }
        if !self.advance_open {
            tracing::debug!("Dropping duplicate advance in the same instant");
            return;
        }
        self.advance_open = false;

        if self.completed {
            // From (or past) Finished: completion already ran once.
            return;
        }

        if self.idx + 1 < self.steps.len() {
            self.idx += 1;
            tracing::debug!("Advancing to step {}", self.idx);
            self.enter_step();
        } else {
            self.complete();
        }
    }

    /// Entry actions on an index change: reset the countdown, go
    /// active, and fire the entry announcement exactly once. Entering
    /// Finished runs completion instead of an entry announcement.
    fn enter_step(&mut self) {
        let (kind, duration, next_label, suggestions) = {
            let step = &self.steps[self.idx];
            let mut suggestions = step.equipment.clone();
            if let Some(w) = &step.suggested_weight {
                suggestions.push(w.clone());
            }
            (step.kind, step.duration_secs, step.next_label.clone(), suggestions)
        };

        self.time_left = duration;
        self.active = true;
        self.entry_announced = false;

        match kind {
            StepKind::Finished => {
                self.entry_announced = true;
                self.complete();
            }
            _ => self.fire_entry(kind, duration, &next_label, &suggestions),
        }
    }

    fn fire_entry(&mut self, kind: StepKind, duration: u32, next_label: &str, suggestions: &[String]) {
        if self.entry_announced {
            return;
        }
        self.entry_announced = true;

        match kind {
            StepKind::Prep => self.audio.announce_prep(duration),
            StepKind::Work => self.audio.start_work(),
            StepKind::Rest => self.audio.announce_rest(duration, next_label, suggestions),
            StepKind::Finished => {}
        }
    }

    /// Session completion, guarded to run once: completion cue, calorie
    /// total, then the callback after the grace delay.
    fn complete(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        self.audio.announce_complete();

        let total_kcal = self.total_kcal();
        tracing::info!(
            "Session '{}' complete: {:.1} kcal",
            self.workout.title,
            total_kcal
        );

        self.summary = Some(SessionSummary {
            id: Uuid::new_v4(),
            title: self.workout.title.clone(),
            completed_at: Utc::now(),
            total_kcal,
            exercise_count: self.workout.exercises.len(),
        });

        self.grace_left = self.grace_seconds;
        if self.grace_left == 0 {
            self.fire_completion_callback();
        }
    }

    fn fire_completion_callback(&mut self) {
        if self.callback_fired {
            return;
        }
        self.callback_fired = true;
        if let (Some(cb), Some(summary)) = (self.on_complete.take(), self.summary.as_ref()) {
            cb(summary);
        }
    }

    fn total_kcal(&self) -> f64 {
        estimated_kcal(&self.workout, self.kcal_per_minute)
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    /// Stop the clock. Leaves `time_left` and the entry one-shot alone,
    /// so resuming never replays an announcement.
    pub fn pause(&mut self) {
        if self.closed {
            return;
        }
        self.active = false;
    }

    /// Restart the clock from wherever the countdown stopped.
    pub fn resume(&mut self) {
        if self.closed || self.completed {
            return;
        }
        self.active = true;
    }

    /// Playback-only switch; cue dispatch is unaffected.
    pub fn set_muted(&mut self, muted: bool) {
        self.mute.set(muted);
    }

    /// Apply a recognized voice command.
    pub fn handle_command(&mut self, cmd: VoiceCommand) {
        if self.closed {
            return;
        }
        match cmd {
            VoiceCommand::Next => self.advance(),
            VoiceCommand::Pause => {
                self.pause();
                self.audio.speak("Paused");
            }
            VoiceCommand::Resume => {
                self.resume();
                self.audio.speak("Resuming");
            }
            VoiceCommand::Explain => {
                if let Some(ei) = self.current_step().and_then(|s| s.exercise) {
                    let description = self.workout.exercises[ei].description.clone();
                    if !description.is_empty() {
                        self.audio.speak(&description);
                    }
                }
            }
        }
    }

    /// Close the session: stop audio synchronously, drop the completion
    /// callback, and refuse every further tick, transition, and
    /// announcement.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.active = false;
        self.on_complete = None;
        self.audio.stop();
        tracing::debug!("Session closed at step {}", self.idx);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.idx)
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            step_index: self.idx,
            time_left: self.time_left,
            is_active: self.active,
            is_muted: self.mute.is_muted(),
            entry_announced: self.entry_announced,
        }
    }

    /// Whether the external voice listener should be running.
    pub fn is_listening(&self) -> bool {
        if self.closed || self.completed {
            return false;
        }
        self.current_step()
            .map(|s| listening_enabled(self.active, s.kind))
            .unwrap_or(false)
    }

    /// Completion has run and the callback (if any) has been delivered.
    pub fn is_complete(&self) -> bool {
        self.completed && self.callback_fired
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The computed summary, available once completion has run.
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }
}

/// Calorie estimate for a sanitized workout: kcal/min × minutes per
/// set × sets, summed over exercises. Rep-based exercises count as one
/// minute per set.
pub fn estimated_kcal(workout: &Workout, kcal_per_minute: f64) -> f64 {
    workout
        .exercises
        .iter()
        .map(|ex| {
            let minutes = if ex.duration_secs == 0 {
                1.0
            } else {
                f64::from(ex.duration_secs) / 60.0
            };
            kcal_per_minute * minutes * f64::from(ex.sets)
        })
        .sum()
}

impl<A: AudioCues> Drop for SessionEngine<A> {
    /// Release on every exit path: a dropped engine that was never
    /// closed still stops its audio collaborator.
    fn drop(&mut self) {
        if !self.closed {
            self.audio.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::compile_steps;
    use crate::config::{Config, SafetyConfig};
    use crate::sanitize::sanitize_workout;
    use crate::types::RawWorkout;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every dispatched cue for assertions.
    #[derive(Clone, Default)]
    struct RecordingCues {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingCues {
        fn log(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl AudioCues for RecordingCues {
        fn announce_prep(&self, seconds: u32) {
            self.calls.borrow_mut().push(format!("prep:{}", seconds));
        }
        fn announce_rest(&self, seconds: u32, next_label: &str, suggestions: &[String]) {
            self.calls.borrow_mut().push(format!(
                "rest:{}:{}:{}",
                seconds,
                next_label,
                suggestions.join("+")
            ));
        }
        fn start_work(&self) {
            self.calls.borrow_mut().push("work".into());
        }
        fn count_down(&self, n: u32) {
            self.calls.borrow_mut().push(format!("count:{}", n));
        }
        fn announce_complete(&self) {
            self.calls.borrow_mut().push("complete".into());
        }
        fn speak(&self, text: &str) {
            self.calls.borrow_mut().push(format!("speak:{}", text));
        }
        fn stop(&self) {
            self.calls.borrow_mut().push("stop".into());
        }
    }

    fn engine_from_json(json: &str, audio: RecordingCues) -> SessionEngine<RecordingCues> {
        let raw: RawWorkout = serde_json::from_str(json).unwrap();
        let config = Config::default();
        let workout = sanitize_workout(&raw, &SafetyConfig::default());
        let steps = compile_steps(&workout, &config.session);
        let mut engine = SessionEngine::new(workout, steps, audio, &config.session);
        engine.start();
        engine
    }

    const TIMED: &str =
        r#"{"title":"t","exercises":[{"name":"Running","sets":1,"duration":"10"}]}"#;
    const MANUAL: &str = r#"{"title":"t","exercises":[{"name":"Burpees","sets":1}]}"#;

    #[test]
    fn test_entry_announcement_fires_once() {
        let audio = RecordingCues::default();
        let engine = engine_from_json(TIMED, audio.clone());
        assert_eq!(audio.log(), vec!["prep:5"]);
        assert!(engine.state().entry_announced);
    }

    #[test]
    fn test_ten_ticks_advance_exactly_once() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());

        engine.tick();
        engine.advance(); // skip prep, now on the 10s work step
        let work_idx = engine.state().step_index;
        assert_eq!(engine.current_step().unwrap().kind, StepKind::Work);
        assert_eq!(engine.state().time_left, 10);

        for _ in 0..10 {
            engine.tick();
        }

        // Advanced exactly once, off the work step
        assert_eq!(engine.state().step_index, work_idx + 1);
    }

    #[test]
    fn test_pause_freezes_time_left() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        engine.tick();
        engine.advance(); // work step, 10s

        engine.tick();
        engine.tick();
        assert_eq!(engine.state().time_left, 8);

        engine.pause();
        for _ in 0..20 {
            engine.tick();
        }
        assert_eq!(engine.state().time_left, 8);

        engine.resume();
        assert_eq!(engine.state().time_left, 8);
        engine.tick();
        assert_eq!(engine.state().time_left, 7);
    }

    #[test]
    fn test_pause_resume_does_not_replay_entry() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        let before = audio.log().len();

        engine.pause();
        engine.resume();
        engine.pause();
        engine.resume();

        assert_eq!(audio.log().len(), before);
        assert!(engine.state().entry_announced);
    }

    #[test]
    fn test_manual_step_never_auto_expires() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(MANUAL, audio.clone());
        engine.tick();
        engine.advance(); // work step, duration 0
        assert_eq!(engine.current_step().unwrap().kind, StepKind::Work);
        let idx = engine.state().step_index;

        for _ in 0..100 {
            engine.tick();
        }
        assert_eq!(engine.state().step_index, idx);

        engine.advance();
        assert_eq!(engine.state().step_index, idx + 1);
    }

    #[test]
    fn test_double_advance_in_same_instant_is_dropped() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        let idx = engine.state().step_index;

        // Voice NEXT and a manual skip landing between two ticks
        engine.advance();
        engine.advance();

        assert_eq!(engine.state().step_index, idx + 1);

        // The next tick opens a new instant
        engine.tick();
        engine.advance();
        assert_eq!(engine.state().step_index, idx + 2);
    }

    #[test]
    fn test_countdown_cues_on_rest_not_work() {
        let audio = RecordingCues::default();
        let json = r#"{"title":"t","exercises":[{"name":"Running","sets":2,"duration":"6","rest":"5"}]}"#;
        let mut engine = engine_from_json(json, audio.clone());

        engine.tick();
        engine.advance(); // onto the 6s work step

        // Work runs out after 5 decrements without a single countdown cue
        let before_work = audio.log().len();
        for _ in 0..5 {
            engine.tick();
        }
        assert_eq!(engine.current_step().unwrap().kind, StepKind::Rest);
        assert!(audio.log()[before_work..]
            .iter()
            .all(|c| !c.starts_with("count:")));

        // Rest (5s) cues the last three seconds
        let before_rest = audio.log().len();
        for _ in 0..4 {
            engine.tick();
        }
        let counts: Vec<String> = audio.log()[before_rest..]
            .iter()
            .filter(|c| c.starts_with("count:"))
            .cloned()
            .collect();
        assert_eq!(counts, vec!["count:3", "count:2", "count:1"]);
    }

    #[test]
    fn test_completion_flow_and_calories() {
        let audio = RecordingCues::default();
        let completed: Rc<RefCell<Option<f64>>> = Rc::new(RefCell::new(None));
        let sink = completed.clone();

        let raw: RawWorkout = serde_json::from_str(MANUAL).unwrap();
        let config = Config::default();
        let workout = sanitize_workout(&raw, &SafetyConfig::default());
        let steps = compile_steps(&workout, &config.session);
        let mut engine = SessionEngine::new(workout, steps, audio.clone(), &config.session)
            .with_on_complete(Box::new(move |s| {
                *sink.borrow_mut() = Some(s.total_kcal);
            }));
        engine.start();

        // Prep -> Work -> Finished (single cardio set, no rest)
        engine.tick();
        engine.advance();
        engine.tick();
        engine.advance();

        assert!(audio.log().contains(&"complete".to_string()));
        assert!(completed.borrow().is_none(), "callback before grace");

        engine.tick();
        assert!(completed.borrow().is_none());
        engine.tick();

        // Rep-based: 5 kcal/min x 1 min x 1 set
        assert_eq!(*completed.borrow(), Some(5.0));
        assert!(engine.is_complete());
    }

    #[test]
    fn test_calorie_total_mixed_workout() {
        let audio = RecordingCues::default();
        let json = r#"{"title":"t","exercises":[
            {"name":"Plank","sets":1,"duration":"3 mins"},
            {"name":"Burpees","sets":2}
        ]}"#;
        let mut engine = engine_from_json(json, audio.clone());

        // Skip through every step manually
        for _ in 0..100 {
            if engine.summary().is_some() {
                break;
            }
            engine.tick();
            engine.advance();
        }

        // Plank split into 3 x 60s: 5 * 1.0 * 3 = 15; Burpees: 5 * 1 * 2 = 10
        let summary = engine.summary().unwrap();
        assert_eq!(summary.total_kcal, 25.0);
        assert_eq!(summary.exercise_count, 2);
    }

    #[test]
    fn test_empty_workout_completes_immediately() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(r#"{"title":"t","exercises":[]}"#, audio.clone());

        assert!(audio.log().contains(&"complete".to_string()));
        engine.tick();
        engine.tick();
        assert!(engine.is_complete());
    }

    #[test]
    fn test_advance_past_finished_completes_once() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(MANUAL, audio.clone());
        engine.tick();
        engine.advance();
        engine.tick();
        engine.advance(); // enters Finished, completion runs

        engine.tick();
        engine.advance(); // from Finished: no second completion
        engine.tick();
        engine.advance();

        let completes = audio.log().iter().filter(|c| *c == "complete").count();
        assert_eq!(completes, 1);
    }

    #[test]
    fn test_mute_does_not_change_dispatch() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        engine.set_muted(true);
        assert!(engine.state().is_muted);

        engine.advance(); // work entry still dispatched
        assert!(audio.log().contains(&"work".to_string()));
    }

    #[test]
    fn test_listening_gate() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());

        assert_eq!(engine.current_step().unwrap().kind, StepKind::Prep);
        assert!(engine.is_listening());

        engine.pause();
        assert!(!engine.is_listening());
        engine.resume();

        engine.advance(); // Work
        assert!(!engine.is_listening());
    }

    #[test]
    fn test_voice_commands() {
        let audio = RecordingCues::default();
        let json = r#"{"title":"t","exercises":[{"name":"Running","sets":1,"duration":"10","description":"Easy pace on flat ground"}]}"#;
        let mut engine = engine_from_json(json, audio.clone());

        engine.handle_command(VoiceCommand::Pause);
        assert!(!engine.state().is_active);
        assert!(audio.log().contains(&"speak:Paused".to_string()));

        engine.handle_command(VoiceCommand::Resume);
        assert!(engine.state().is_active);
        assert!(audio.log().contains(&"speak:Resuming".to_string()));

        engine.handle_command(VoiceCommand::Explain);
        assert!(audio
            .log()
            .contains(&"speak:Easy pace on flat ground".to_string()));

        let idx = engine.state().step_index;
        engine.tick();
        engine.handle_command(VoiceCommand::Next);
        assert_eq!(engine.state().step_index, idx + 1);
    }

    #[test]
    fn test_explain_with_no_description_is_silent() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        let before = audio.log().len();
        engine.handle_command(VoiceCommand::Explain);
        assert_eq!(audio.log().len(), before);
    }

    #[test]
    fn test_close_stops_everything() {
        let audio = RecordingCues::default();
        let mut engine = engine_from_json(TIMED, audio.clone());
        engine.close();

        assert!(engine.is_closed());
        assert!(audio.log().contains(&"stop".to_string()));

        let before = audio.log().len();
        let idx = engine.state().step_index;
        engine.tick();
        engine.advance();
        engine.handle_command(VoiceCommand::Next);
        assert_eq!(engine.state().step_index, idx);
        assert_eq!(audio.log().len(), before);

        // Idempotent close: stop not called twice
        engine.close();
        let stops = audio.log().iter().filter(|c| *c == "stop").count();
        assert_eq!(stops, 1);
    }

    #[test]
    fn test_drop_releases_audio() {
        let audio = RecordingCues::default();
        {
            let _engine = engine_from_json(TIMED, audio.clone());
        }
        assert!(audio.log().contains(&"stop".to_string()));
    }

    #[test]
    fn test_close_cancels_pending_completion_callback() {
        let audio = RecordingCues::default();
        let fired = Rc::new(RefCell::new(false));
        let sink = fired.clone();

        let raw: RawWorkout = serde_json::from_str(MANUAL).unwrap();
        let config = Config::default();
        let workout = sanitize_workout(&raw, &SafetyConfig::default());
        let steps = compile_steps(&workout, &config.session);
        let mut engine = SessionEngine::new(workout, steps, audio.clone(), &config.session)
            .with_on_complete(Box::new(move |_| {
                *sink.borrow_mut() = true;
            }));
        engine.start();

        engine.tick();
        engine.advance();
        engine.tick();
        engine.advance(); // completion cue fires, grace pending

        engine.close();
        engine.tick();
        engine.tick();
        engine.tick();
        assert!(!*fired.borrow(), "callback must not fire after close");
    }

    #[test]
    fn test_rest_announcement_carries_suggestions() {
        let audio = RecordingCues::default();
        let json = r#"{"title":"t","exercises":[
            {"name":"Running","sets":1,"duration":"6"},
            {"name":"Bench Press","sets":3,"equipment":["barbell","bench"],"suggestedWeight":"60kg"}
        ]}"#;
        let mut engine = engine_from_json(json, audio.clone());
        engine.tick();
        engine.advance(); // Work
        engine.tick();
        engine.advance(); // Rest previewing Bench Press

        assert_eq!(engine.current_step().unwrap().kind, StepKind::Rest);
        let rest_call = audio
            .log()
            .iter()
            .find(|c| c.starts_with("rest:"))
            .cloned()
            .unwrap();
        assert_eq!(rest_call, "rest:45:Bench Press:barbell+bench+60kg");
    }
}
