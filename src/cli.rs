use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::warn;

use crate::combat::{simulate_fight, FightConfig, FightSummary, Rng, DEFAULT_ROUNDS};
use crate::config::{init_tracing, Settings};
use crate::data::{load_roster, load_roster_or_builtin, validate_roster, Roster};
use crate::report::write_rounds_csv;

/// Scheduled distances the CLI accepts; other values are clamped into range.
pub const MIN_CLI_ROUNDS: u32 = 4;
pub const MAX_CLI_ROUNDS: u32 = 12;

/// Range for CLI-picked rematch seeds, short enough to type back in.
const REMATCH_SEED_MAX: u32 = 9999;

#[derive(Parser, Debug)]
#[command(name = "ringside", version, about = "Simulate boxing matches round by round")]
pub struct Cli {
    /// Roster file (JSON or YAML). Falls back to $RINGSIDE_ROSTER, then the built-in card.
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available fighters.
    Roster,
    /// Simulate a fight between two fighters (index, name, or nickname).
    Fight(FightArgs),
    /// Check a roster file for invalid ratings and names.
    Validate {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct FightArgs {
    pub fighter_a: String,
    pub fighter_b: String,
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    pub rounds: u32,
    /// Replay a previous fight. A fresh seed is picked and printed when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Log each round's commentary as it happens.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Entry point shared by the binary and tests. Returns the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };

    let settings = Settings::from_env();
    let verbose = matches!(&cli.command, Command::Fight(args) if args.verbose);
    init_tracing(&settings, verbose);

    let roster_path = cli.roster.or(settings.roster_path);
    match cli.command {
        Command::Roster => handle_roster(roster_path),
        Command::Fight(args) => handle_fight(roster_path, args),
        Command::Validate { path } => handle_validate(path),
    }
}

fn open_roster(path: Option<PathBuf>) -> Option<Roster> {
    match load_roster_or_builtin(path.as_deref()) {
        Ok(roster) => Some(roster),
        Err(err) => {
            eprintln!("roster error: {err}");
            None
        }
    }
}

fn handle_roster(roster_path: Option<PathBuf>) -> i32 {
    let Some(roster) = open_roster(roster_path) else {
        return 1;
    };
    println!("Available fighters:");
    for line in (0..roster.len()).filter_map(|index| roster.display_line(index)) {
        println!("{line}");
    }
    0
}

/// Keep the distance inside what the tooling supports.
pub fn clamp_rounds(requested: u32) -> u32 {
    requested.clamp(MIN_CLI_ROUNDS, MAX_CLI_ROUNDS)
}

fn handle_fight(roster_path: Option<PathBuf>, args: FightArgs) -> i32 {
    let Some(roster) = open_roster(roster_path) else {
        return 1;
    };
    let (index_a, fighter_a) = match roster.resolve(&args.fighter_a) {
        Ok(found) => found,
        Err(err) => {
            eprintln!("first fighter: {err}");
            return 2;
        }
    };
    let (index_b, fighter_b) = match roster.resolve(&args.fighter_b) {
        Ok(found) => found,
        Err(err) => {
            eprintln!("opponent: {err}");
            return 2;
        }
    };
    if index_a == index_b {
        eprintln!("pick different fighters for a matchup");
        return 2;
    }

    let rounds = clamp_rounds(args.rounds);
    if rounds != args.rounds {
        warn!(
            target: "ringside::cli",
            requested = args.rounds,
            rounds,
            "round count clamped to {MIN_CLI_ROUNDS}..={MAX_CLI_ROUNDS}"
        );
    }

    let seed = match args.seed {
        Some(seed) => seed,
        None => match Rng::entropy_seed() {
            Ok(entropy) => u64::from(Rng::new(entropy).range_inclusive(1, REMATCH_SEED_MAX)),
            Err(err) => {
                eprintln!("unable to pick a seed: {err}");
                return 1;
            }
        },
    };

    let config = FightConfig {
        rounds,
        seed: Some(seed),
        verbose: args.verbose,
    };
    let summary = match simulate_fight(&fighter_a, &fighter_b, config) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("fight failed: {err}");
            return 1;
        }
    };

    match args.format {
        OutputFormat::Text => {
            print_text(&summary, !args.verbose);
            0
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&summary) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize fight summary: {err}");
                1
            }
        },
        OutputFormat::Csv => match write_rounds_csv(&summary, io::stdout().lock()) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("failed to write csv: {err}");
                1
            }
        },
    }
}

/// Verbose runs already logged the commentary to stderr round by round.
fn print_text(summary: &FightSummary, with_commentary: bool) {
    println!("Ring walks complete. Seed for rematches: {}", summary.seed);
    println!();
    if with_commentary {
        for line in &summary.commentary {
            println!("{line}");
        }
        println!();
    }
    println!("Scorecard:");
    println!("{}", summary.scorecard);
    println!();
    println!("Final Verdict:");
    println!("{}", summary.verdict);
}

fn handle_validate(path: PathBuf) -> i32 {
    let roster = match load_roster(&path) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };
    let report = validate_roster(&roster);
    for diag in &report.diagnostics {
        eprintln!("- {diag}");
    }
    if report.has_errors() {
        eprintln!(
            "validation failed: {} issue(s)",
            report.diagnostics.len()
        );
        1
    } else {
        println!(
            "validation passed: {} ({} fighters)",
            path.display(),
            roster.len()
        );
        0
    }
}
