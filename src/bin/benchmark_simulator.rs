//! Run simulator benchmark and optionally append one line to a log file for trend tracking.
//!
//! Usage:
//!   cargo run --release --bin benchmark_simulator
//!   cargo run --release --bin benchmark_simulator -- --log
//!
//! --log  Append one row to benchmark_log.csv (date, fights_per_sec, fights_per_min, rounds_per_sec, rounds_per_fight).

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use ringside::combat::{simulate_fight, FightConfig};
use ringside::data::Roster;

// Run for at least this long or this many fights
const MIN_DURATION_MS: u128 = 2000;
const MIN_FIGHTS: u32 = 5000;
const LOG_PATH: &str = "benchmark_log.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log = std::env::args().any(|a| a == "--log");

    let roster = Roster::builtin();
    let fighter_a = roster.get(1)?;
    let fighter_b = roster.get(2)?;
    let rounds_per_fight = 12u32;

    let start = Instant::now();
    let mut fights: u32 = 0;
    while start.elapsed().as_millis() < MIN_DURATION_MS || fights < MIN_FIGHTS {
        let config = FightConfig::seeded(rounds_per_fight, u64::from(fights));
        let _ = simulate_fight(&fighter_a, &fighter_b, config)?;
        fights += 1;
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let fights_per_sec = f64::from(fights) / elapsed_secs;
    let fights_per_min = fights_per_sec * 60.0;
    let rounds_per_sec = fights_per_sec * f64::from(rounds_per_fight);

    println!("Simulator benchmark ({} rounds/fight):", rounds_per_fight);
    println!("  Fights:      {}", fights);
    println!("  Duration:    {:.2} s", elapsed_secs);
    println!("  Fights/s:    {:.2}", fights_per_sec);
    println!("  Fights/min:  {:.2}", fights_per_min);
    println!("  Rounds/s:    {:.2}", rounds_per_sec);

    if log {
        let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let line = format!(
            "{},{:.4},{:.4},{:.4},{}\n",
            date, fights_per_sec, fights_per_min, rounds_per_sec, rounds_per_fight
        );
        let mut file = OpenOptions::new().create(true).append(true).open(LOG_PATH)?;
        if file.metadata().map(|m| m.len() == 0).unwrap_or(true) {
            file.write_all(b"date,fights_per_sec,fights_per_min,rounds_per_sec,rounds_per_fight\n")?;
        }
        file.write_all(line.as_bytes())?;
        file.flush()?;
        println!("Appended to {}", LOG_PATH);
    }
    Ok(())
}
