//! rps-hand CLI
//!
//! Usage:
//!   rps-hand --classify '[{"x":..,"y":..}, ...]'   # Classify one frame
//!   rps-hand --replay session.jsonl                # Replay a recorded session
//!   rps-hand --interactive                         # Frames / labels from stdin
//!   rps-hand --serve                               # HTTP API server
//!   rps-hand --replay session.jsonl --json         # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use rps_hand::config::GameConfig;
use rps_hand::core::{
    parse_frame, read_frames, run_server, FrameReport, GameSession, GestureClassifier,
};
use rps_hand::error::Result;
use rps_hand::types::{FrameOutput, GamePhase, Keypoint, Outcome, Scoreboard, TrackerState};
use rps_hand::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "rps-hand",
    version = VERSION,
    about = "Rock-paper-scissors from hand keypoints",
    long_about = "Classifies 21-point hand keypoints as rock, paper or scissors,\n\
                  debounces the per-frame labels and plays confirmed gestures\n\
                  against the computer.\n\n\
                  Frame formats (one JSON value per line):\n  \
                  null                      no hand\n  \
                  [{\"x\":..,\"y\":..}, ...]    21 keypoints\n  \
                  rock / \"rock\"              pre-classified label"
)]
struct Args {
    /// Classify a single frame given as JSON
    #[arg(short, long)]
    classify: Option<String>,

    /// Replay a JSON lines recording through a game session
    #[arg(short, long)]
    replay: Option<PathBuf>,

    /// Interactive mode - read frames from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible computer moves (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show every frame, not only rounds
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "rps_hand=debug" } else { "rps_hand=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&args).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if args.serve {
        print_header("API Server");
        run_server(&args.addr, config).await?;
    } else if let Some(ref text) = args.classify {
        run_classify(text, args)?;
    } else if let Some(ref path) = args.replay {
        run_replay(path, &config, args)?;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&config, args)?;
    }
    Ok(())
}

/// Classify one frame
fn run_classify(text: &str, args: &Args) -> Result<()> {
    let points: Vec<Keypoint> = serde_json::from_str(text)?;
    let result = GestureClassifier::new().analyze(&points);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let f = result.fingers;
    let mark = |b: bool| if b { "up" } else { "down" };
    println!("{} {}", result.gesture.emoji(), result.gesture.to_string().bold());
    println!(
        "  thumb={} index={} middle={} ring={} pinky={}",
        mark(f.thumb),
        mark(f.index),
        mark(f.middle),
        mark(f.ring),
        mark(f.pinky)
    );
    println!(
        "  extended: {} of 4 fingers, {} total | rule: {}",
        result.non_thumb,
        result.total,
        result.rule.unwrap_or("-")
    );
    Ok(())
}

/// Replay a recorded session
fn run_replay(path: &Path, config: &GameConfig, args: &Args) -> Result<()> {
    let frames = read_frames(path)?;
    let mut session = GameSession::new(config);

    if !args.json {
        print_header("Replay");
        println!("{} frames from {}", frames.len(), path.display());
        println!();
    }

    for frame in &frames {
        let report = frame.apply(&mut session);
        print_report(&report, args, false)?;
    }

    if args.json {
        println!("{}", serde_json::to_string(&session.status())?);
    } else {
        println!();
        print_score(&session.score());
    }
    Ok(())
}

/// Interactive mode: one frame per line on stdin
fn run_interactive(config: &GameConfig, args: &Args) -> Result<()> {
    let mut session = GameSession::new(config);

    if !args.json {
        print_header("Interactive");
        println!("One frame per line: keypoint JSON, null (no hand) or a label (rock, paper...).");
        println!("Type 'score' for the scoreboard, 'reset' to clear it, 'quit' to exit.");
        println!();
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if !args.json {
            print!("{}", format_prompt(&session, args.no_color));
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("score") {
            print_score(&session.score());
            continue;
        }
        if line.eq_ignore_ascii_case("reset") {
            session.reset();
            println!("Score cleared.");
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match parse_frame(line) {
            Ok(frame) => {
                let report = frame.apply(&mut session);
                // Interactive input is sparse; always show the frame
                print_report(&report, args, true)?;
            }
            Err(e) => println!("{} {}", "⚠".yellow(), e),
        }
    }

    if !args.json {
        println!();
        println!("Session ended. Frames: {}", session.tracker().frames_seen());
        print_score(&session.score());
    }
    Ok(())
}

/// Print one frame report according to output flags
fn print_report(report: &FrameReport, args: &Args, show_frame: bool) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string(report)?);
        return Ok(());
    }

    if show_frame || args.verbose {
        print_frame(&report.frame, args.no_color);
    }

    if let Some(round) = &report.round {
        let line = round.to_terminal_string();
        let line = match round.outcome {
            Outcome::Win => line.green().bold(),
            Outcome::Lose => line.red().bold(),
            Outcome::Draw => line.yellow().bold(),
        };
        println!("  {}", line);
    }
    Ok(())
}

fn print_frame(output: &FrameOutput, no_color: bool) {
    if no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

fn print_score(score: &Scoreboard) {
    println!(
        "{} wins {} | losses {} | draws {} | win rate {}%",
        "Score:".bold(),
        score.wins.to_string().green(),
        score.losses.to_string().red(),
        score.draws.to_string().yellow(),
        score.win_rate()
    );
}

fn print_header(mode: &str) {
    println!("{}", "========================================".bold());
    println!("{}", format!("  rps-hand v{} - {}", VERSION, mode).bold());
    println!("{}", "========================================".bold());
    println!();
}

/// Prompt showing phase and tracker state
fn format_prompt(session: &GameSession, no_color: bool) -> String {
    let state = session.tracker().state();
    let phase = match session.phase() {
        GamePhase::Waiting => "ready",
        GamePhase::ShowingResult => "result",
    };
    if no_color {
        format!("[{} | {}] > ", phase, state)
    } else {
        format!(
            "{}{} [{} | {}]{} > ",
            state.color_code(),
            state.emoji(),
            phase,
            state,
            TrackerState::color_reset()
        )
    }
}
