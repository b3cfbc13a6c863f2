//! Text renderings of a finished fight for the CLI and other front ends.

mod export_csv;

pub use export_csv::{write_rounds_csv, ROUNDS_CSV_HEADER};

use crate::combat::RoundResult;

/// One line per round: `Round {n}: {a} {score_a}-{score_b} {b}`.
pub fn format_scorecard(rounds: &[RoundResult], name_a: &str, name_b: &str) -> String {
    rounds
        .iter()
        .map(|r| {
            format!(
                "Round {}: {name_a} {}-{} {name_b}",
                r.round, r.score_a, r.score_b
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
