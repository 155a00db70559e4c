use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use tempo_core::*;

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Guided workout session runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize and compile a workout, printing the step table
    Plan {
        /// Workout JSON file
        workout: PathBuf,
    },

    /// Run a live session
    Run {
        /// Workout JSON file
        workout: PathBuf,

        /// Start with audio muted
        #[arg(long)]
        mute: bool,

        /// Auto-advance rep-based steps (for testing)
        #[arg(long)]
        auto: bool,

        /// Tick interval in milliseconds (for testing)
        #[arg(long, default_value_t = 1000)]
        tick_ms: u64,
    },
}

fn main() -> Result<()> {
    tempo_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Plan { workout } => cmd_plan(&workout, &config),
        Commands::Run {
            workout,
            mute,
            auto,
            tick_ms,
        } => cmd_run(&workout, &config, mute, auto, tick_ms),
    }
}

fn load_workout(path: &Path) -> Result<RawWorkout> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        Error::Workout(format!("{} is not a workout file: {}", path.display(), e))
    })
}

fn cmd_plan(path: &Path, config: &Config) -> Result<()> {
    let raw = load_workout(path)?;
    let workout = sanitize_workout(&raw, &config.safety);
    let steps = compile_steps(&workout, &config.session);

    println!("\n  {}", workout.title);
    println!("  {} exercises, {} steps", workout.exercises.len(), steps.len());
    println!(
        "  Estimated burn: ~{:.0} kcal",
        estimated_kcal(&workout, config.session.kcal_per_minute)
    );
    println!();

    for (i, step) in steps.iter().enumerate() {
        let duration = if step.duration_secs == 0 {
            "  --".to_string()
        } else {
            format!("{:>3}s", step.duration_secs)
        };
        println!(
            "  {:>3}. {:<10} {}  {:<24} {}",
            i + 1,
            format!("{:?}", step.kind),
            duration,
            step.display_name,
            step.description
        );
    }
    println!();

    Ok(())
}

fn cmd_run(path: &Path, config: &Config, mute: bool, auto: bool, tick_ms: u64) -> Result<()> {
    let raw = load_workout(path)?;
    let workout = sanitize_workout(&raw, &config.safety);
    let steps = compile_steps(&workout, &config.session);

    let mute_flag = MuteFlag::new(mute || config.session.start_muted);
    let cues = ConsoleCues::new(mute_flag.clone());

    let mut engine = SessionEngine::new(workout, steps, cues, &config.session)
        .with_mute_flag(mute_flag)
        .with_on_complete(Box::new(|summary| {
            println!();
            println!("✓ Session complete!");
            println!("  Burned: ~{:.0} kcal", summary.total_kcal);
            println!("  Session id: {}", summary.id);
        }));

    // Line input doubles as the voice channel; a reader thread feeds the
    // single consumer loop so input and ticks never race.
    let (tx, rx) = mpsc::channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(l).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    engine.start();
    let tick = Duration::from_millis(tick_ms.max(1));
    let mut last_rendered = usize::MAX;

    loop {
        if engine.is_complete() {
            break;
        }

        render_if_changed(&engine, &mut last_rendered);

        match rx.recv_timeout(tick) {
            Ok(line) => {
                if handle_line(&mut engine, &line) {
                    engine.close();
                    println!("\nSession closed.");
                    return Ok(());
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                engine.tick();
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                // stdin gone (piped run); keep the clock alive
                std::thread::sleep(tick);
                engine.tick();
            }
        }

        if auto {
            if let Some(step) = engine.current_step() {
                if step.duration_secs == 0 && step.kind != StepKind::Finished {
                    engine.advance();
                }
            }
        }
    }

    Ok(())
}

/// Apply one input line. Returns true when the user asked to quit.
fn handle_line<A: AudioCues>(engine: &mut SessionEngine<A>, line: &str) -> bool {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        // Enter or "done" is the manual skip, always available
        "" | "done" | "skip" => {
            engine.advance();
            return false;
        }
        "mute" => {
            engine.set_muted(true);
            return false;
        }
        "unmute" => {
            engine.set_muted(false);
            return false;
        }
        "quit" | "q" | "exit" => return true,
        _ => {}
    }

    match parse_command(trimmed) {
        // Resume must stay reachable even though listening is off while paused
        Some(VoiceCommand::Resume) => engine.handle_command(VoiceCommand::Resume),
        Some(cmd) if engine.is_listening() => engine.handle_command(cmd),
        Some(_) => println!("(voice commands are off during work; 'done' advances)"),
        None => {
            println!("Commands: next, pause, resume, explain, done, mute, unmute, quit")
        }
    }
    false
}

fn render_if_changed<A: AudioCues>(engine: &SessionEngine<A>, last_rendered: &mut usize) {
    let state = engine.state();
    if state.step_index == *last_rendered {
        return;
    }
    *last_rendered = state.step_index;

    let step = match engine.current_step() {
        Some(s) => s,
        None => return,
    };

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {:?}: {}", step.kind, step.display_name);
    println!("╰─────────────────────────────────────────╯");
    if !step.description.is_empty() {
        println!("  {}", step.description);
    }
    if let Some(reps) = &step.reps {
        println!("  Reps: {}", reps);
    }
    if !step.equipment.is_empty() {
        println!("  Equipment: {}", step.equipment.join(", "));
    }
    if let Some(weight) = &step.suggested_weight {
        println!("  Suggested weight: {}", weight);
    }
    match step.duration_secs {
        0 if step.kind != StepKind::Finished => {
            println!("  Rep-based: press Enter when done");
        }
        0 => {}
        d => println!("  {} seconds (next: {})", d, step.next_label),
    }
}

/// Console renderer for spoken cues. Muting silences the output only;
/// the engine dispatches identically either way.
struct ConsoleCues {
    mute: MuteFlag,
}

impl ConsoleCues {
    fn new(mute: MuteFlag) -> Self {
        Self { mute }
    }

    fn say(&self, text: &str) {
        if !self.mute.is_muted() {
            println!("  ♪ {}", text);
        }
        tracing::debug!("cue: {}", text);
    }
}

impl AudioCues for ConsoleCues {
    fn announce_prep(&self, seconds: u32) {
        self.say(&format!("Get ready: {} seconds", seconds));
    }

    fn announce_rest(&self, seconds: u32, next_label: &str, suggestions: &[String]) {
        if suggestions.is_empty() {
            self.say(&format!("Rest {} seconds. Up next: {}", seconds, next_label));
        } else {
            self.say(&format!(
                "Rest {} seconds. Up next: {} ({})",
                seconds,
                next_label,
                suggestions.join(", ")
            ));
        }
    }

    fn start_work(&self) {
        self.say("Go!");
    }

    fn count_down(&self, n: u32) {
        self.say(&format!("{}...", n));
    }

    fn announce_complete(&self) {
        self.say("Workout complete. Great job!");
    }

    fn speak(&self, text: &str) {
        self.say(text);
    }

    fn stop(&self) {
        tracing::debug!("audio stopped");
    }
}
