//! Dicebox CLI
//!
//! Animated dice in the terminal, plus a number guessing game.

mod guess;
mod roller;

use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use dicebox_core::guess::{DEFAULT_HIGH, DEFAULT_LOW};
use dicebox_core::settings::validate_dice_count;
use dicebox_core::{GuessGame, ManualClock, Preset, RollSettings, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;

use guess::play_guess;
use roller::{RollReport, TerminalRoller};

/// Dicebox CLI - terminal dice roller
#[derive(Parser)]
#[command(name = "diceroll")]
#[command(author, version, about = "Dicebox CLI - animated dice in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of dice (1-4)
    #[arg(short, long, global = true, value_parser = parse_dice_count)]
    dice: Option<usize>,

    /// Animation preset: classic, spin or table
    #[arg(short, long, global = true, value_parser = parse_preset, default_value = "spin")]
    preset: Preset,

    /// Seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the dice (the default)
    Roll {
        /// How many times to roll
        #[arg(short, long, default_value = "1")]
        times: u32,

        /// Skip the animation and print one JSON object per roll
        #[arg(long)]
        json: bool,
    },

    /// Guess the secret number
    Guess {
        /// Lowest possible number
        #[arg(long, default_value_t = DEFAULT_LOW)]
        low: u32,

        /// Highest possible number
        #[arg(long, default_value_t = DEFAULT_HIGH)]
        high: u32,
    },

    /// List the animation presets
    Presets,
}

fn parse_dice_count(s: &str) -> Result<usize, String> {
    let count: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid dice count: {}", s))?;
    validate_dice_count(count).map_err(|e| e.to_string())?;
    Ok(count)
}

fn parse_preset(s: &str) -> Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn roll_settings(cli: &Cli) -> RollSettings {
    let mut settings = cli.preset.roll_settings();
    if let Some(count) = cli.dice {
        settings.dice_count = count;
    }
    settings
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        None => run_rolls(&cli, 1, false),
        Some(Commands::Roll { times, json }) => run_rolls(&cli, *times, *json),
        Some(Commands::Guess { low, high }) => run_guess(*low, *high, cli.seed),
        Some(Commands::Presets) => {
            print_presets();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_rolls(cli: &Cli, times: u32, json: bool) -> Result<(), String> {
    let settings = roll_settings(cli);
    let rng = make_rng(cli.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        // Replay clock: every frame is "waited" instantly.
        let clock = ManualClock::new(0.0);
        let mut roller = TerminalRoller::new(settings, &clock, rng).map_err(|e| e.to_string())?;
        for _ in 0..times {
            let report = roller
                .roll(&mut io::sink(), |seconds| clock.advance(seconds))
                .map_err(|e| e.to_string())?;
            let line = serde_json::to_string(&report).map_err(|e| e.to_string())?;
            writeln!(out, "{}", line).map_err(|e| e.to_string())?;
        }
        return Ok(());
    }

    let mut roller =
        TerminalRoller::new(settings, SystemClock::new(), rng).map_err(|e| e.to_string())?;
    println!("\n{}", "═══════════════════════════════════════".cyan());
    println!(
        "{} {} x d6 ({})",
        "Rolling:".bold().white(),
        settings.dice_count.to_string().yellow().bold(),
        cli.preset.name()
    );
    for _ in 0..times {
        let report = roller
            .roll(&mut out, |seconds| {
                std::thread::sleep(Duration::from_secs_f64(seconds))
            })
            .map_err(|e| e.to_string())?;
        print_total(&report);
    }
    println!("{}", "═══════════════════════════════════════".cyan());
    Ok(())
}

fn print_total(report: &RollReport) {
    let dice: Vec<String> = report
        .dice
        .iter()
        .map(|d| format!("[{}]", d).bright_white().bold().to_string())
        .collect();
    println!(
        "{} {}  {} {}",
        "Dice:".bold().white(),
        dice.join(", "),
        "Total:".bold().white(),
        report.total.to_string().green().bold()
    );
}

fn run_guess(low: u32, high: u32, seed: Option<u64>) -> Result<(), String> {
    let mut rng = make_rng(seed);
    let mut game = GuessGame::new(low, high, &mut rng).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_guess(&mut game, stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())?;
    Ok(())
}

fn print_presets() {
    for preset in Preset::ALL {
        let animation = preset.animation();
        println!(
            "{:<8} spin {:.2}-{:.2}s, face every {:.2}-{:.2}s, {:?} faces{}",
            preset.name().yellow().bold(),
            animation.duration.min,
            animation.duration.max,
            animation.change_interval.min,
            animation.change_interval.max,
            animation.face_policy,
            if animation.phase_offset {
                ", desynchronized"
            } else {
                ""
            }
        );
    }
}
