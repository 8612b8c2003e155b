use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use services::{DelayScheduler, QuizController, QuizView, messages};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    seed: Option<u64>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut seed = std::env::var("JAM_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { seed })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--seed <u64>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  JAM_SEED");
    eprintln!();
    eprintln!("During the quiz:");
    eprintln!("  0-11  submit a semitone distance answer");
    eprintln!("  r     randomize a new note pair");
    eprintln!("  g     give up and show the explanation");
    eprintln!("  q     quit");
}

//
// ─── TERMINAL VIEW ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
struct ControlFlags {
    submit_enabled: bool,
    randomize_enabled: bool,
}

/// Prints controller updates as terminal lines.
///
/// Terminal output is append-only, so empty render calls (the timed clears)
/// are silent no-ops. Enabled flags are tracked so the input loop can refuse
/// actions whose button would be disabled in a widget UI.
struct TerminalView {
    flags: Mutex<ControlFlags>,
}

impl TerminalView {
    fn new() -> Self {
        Self {
            flags: Mutex::new(ControlFlags {
                submit_enabled: true,
                randomize_enabled: true,
            }),
        }
    }

    fn submit_enabled(&self) -> bool {
        self.flags.lock().map(|flags| flags.submit_enabled).unwrap_or(true)
    }
}

fn strip_markup(body: &str) -> String {
    body.replace("<b>", "").replace("</b>", "")
}

impl QuizView for TerminalView {
    fn render_current_notes(&self, first: &str, second: &str) {
        println!();
        println!("{}", messages::notes_label(first, second));
    }

    fn render_result(&self, message: &str) {
        if !message.is_empty() {
            println!("{message}");
        }
    }

    fn render_explanation(&self, body: &str) {
        if !body.is_empty() {
            println!("{}", strip_markup(body));
        }
    }

    fn render_streak(&self, streak: u32) {
        println!("{}", messages::streak_label(streak));
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Ok(mut flags) = self.flags.lock() {
            flags.submit_enabled = enabled;
        }
    }

    fn set_randomize_enabled(&self, enabled: bool) {
        if let Ok(mut flags) = self.flags.lock() {
            flags.randomize_enabled = enabled;
        }
    }

    fn clear_answer_input(&self) {
        // Nothing to clear: stdin input is consumed line by line.
    }
}

//
// ─── TOKIO SCHEDULER ───────────────────────────────────────────────────────────
//

/// One-shot deferred execution on the tokio runtime.
struct TokioScheduler {
    handle: tokio::runtime::Handle,
}

impl TokioScheduler {
    fn current() -> Self {
        Self {
            handle: tokio::runtime::Handle::current(),
        }
    }
}

impl DelayScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

//
// ─── ENTRY POINT ───────────────────────────────────────────────────────────────
//

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let view = Arc::new(TerminalView::new());
    let scheduler = Arc::new(TokioScheduler::current());
    let mut controller = QuizController::new(view.clone(), scheduler);
    if let Some(seed) = args.seed {
        controller = controller.with_seed(seed);
    }

    println!("JamBuddy - guess the semitone distance between the two notes.");
    println!("Either direction around the chromatic circle counts.");
    println!("Commands: 0-11 = answer, r = randomize, g = give up, q = quit.");
    controller.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => {}
            "q" | "quit" => break,
            "r" | "randomize" => controller.randomize(),
            "g" | "giveup" | "give-up" => controller.give_up(),
            _ => {
                if view.submit_enabled() {
                    controller.submit_answer(input);
                } else {
                    println!("Submit is disabled. Press r for a new pair.");
                }
            }
        }
    }

    println!();
    println!("Best streak this session: {}.", controller.best_streak());
    if let Some(started_at) = controller.started_at() {
        let seconds = (Utc::now() - started_at).num_seconds().max(0);
        println!("You played for {}m {}s.", seconds / 60, seconds % 60);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
