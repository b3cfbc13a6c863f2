use serde::Serialize;
use tracing::{debug, info};

use super::rng::Rng;
use super::round::{simulate_round, RoundResult};
use super::state::Corner;
use crate::data::FighterTemplate;
use crate::error::FightError;
use crate::report::format_scorecard;

pub const DEFAULT_ROUNDS: u32 = 10;

/// Winning margins above this are called unanimous.
pub const UNANIMOUS_MARGIN: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FightConfig {
    pub rounds: u32,
    /// `None` draws a fresh seed from the OS; the seed used is reported back.
    pub seed: Option<u64>,
    /// Emit each round's commentary as an `info` event.
    pub verbose: bool,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: None,
            verbose: false,
        }
    }
}

impl FightConfig {
    pub fn seeded(rounds: u32, seed: u64) -> Self {
        Self {
            rounds,
            seed: Some(seed),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FightSummary {
    pub seed: u64,
    pub fighter_a: Corner,
    pub fighter_b: Corner,
    pub rounds: Vec<RoundResult>,
    pub commentary: Vec<String>,
    pub scorecard: String,
    pub verdict: String,
}

/// Run a full fight over the scheduled distance. Fights never stop early.
///
/// Both templates are cloned into fresh corners; the caller's data is never touched.
pub fn simulate_fight(
    fighter_a: &FighterTemplate,
    fighter_b: &FighterTemplate,
    config: FightConfig,
) -> Result<FightSummary, FightError> {
    if config.rounds == 0 {
        return Err(FightError::NoRounds);
    }
    let seed = match config.seed {
        Some(seed) => seed,
        None => Rng::entropy_seed()?,
    };
    let mut rng = Rng::new(seed);
    let mut a = Corner::new(fighter_a.clone());
    let mut b = Corner::new(fighter_b.clone());

    debug!(
        target: "ringside::fight",
        fighter_a = a.name(),
        fighter_b = b.name(),
        rounds = config.rounds,
        seed,
        "opening bell"
    );

    let mut history = Vec::new();
    for round in 1..=config.rounds {
        let result = simulate_round(round, config.rounds, &mut a, &mut b, &mut rng);
        if config.verbose {
            info!(target: "ringside::fight", "{}", result.commentary);
        }
        history.push(result);
    }

    let verdict = declare_winner(&a, &b);
    let scorecard = format_scorecard(&history, a.name(), b.name());
    let commentary = history.iter().map(|r| r.commentary.clone()).collect();

    Ok(FightSummary {
        seed,
        fighter_a: a,
        fighter_b: b,
        rounds: history,
        commentary,
        scorecard,
        verdict,
    })
}

/// Human-readable verdict from the cumulative cards.
pub fn declare_winner(a: &Corner, b: &Corner) -> String {
    let total_a = a.state.score;
    let total_b = b.state.score;
    if total_a == total_b {
        return "Draw".to_string();
    }
    let (winner, loser) = if total_a > total_b { (a, b) } else { (b, a) };
    let label = if total_a.abs_diff(total_b) > UNANIMOUS_MARGIN {
        "unanimous decision"
    } else {
        "split-decision style win"
    };
    format!("{} wins by {label} over {}.", winner.name(), loser.name())
}
