//! Resolution of a single round: output, damage, fatigue, knockdowns and judging.
//!
//! All randomness comes from the one [Rng] the fight owns. Per round the draws are,
//! in order: A's volume roll, A's damage roll, A's knockdown jitter, A's knockdown
//! draw (only when the chance exceeds 12), A's stun draw (only when it exceeds 8),
//! then the same slots for B's attack on A. Changing that order changes every
//! seeded fight.

use serde::Serialize;
use tracing::debug;

use super::rng::Rng;
use super::state::{Corner, STAMINA_FLOOR};
use super::strategy::choose_strategy;

pub const MIN_THROWN: u32 = 20;
pub const MAX_THROWN: u32 = 90;
pub const MIN_LANDED: u32 = 5;
pub const ACCURACY_FLOOR: f64 = 18.0;
pub const ACCURACY_CEILING: f64 = 60.0;

pub const KNOCKDOWN_THRESHOLD: f64 = 12.0;
pub const STUN_THRESHOLD: f64 = 8.0;

/// Floor for either card under the 10-point must.
pub const MIN_ROUND_SCORE: u32 = 7;

/// Differences in landed punches below this read as an even round in commentary.
const MOMENTUM_SWING: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub round: u32,
    pub thrown_a: u32,
    pub landed_a: u32,
    pub thrown_b: u32,
    pub landed_b: u32,
    pub score_a: u32,
    pub score_b: u32,
    /// Fighter A went down this round.
    pub knockdown_a: bool,
    /// Fighter B went down this round.
    pub knockdown_b: bool,
    pub commentary: String,
}

/// Outcome of one fighter's attack before the stun penalty is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub thrown: u32,
    pub landed: u32,
    /// The defender was knocked down.
    pub knockdown: bool,
    /// The defender was stunned.
    pub stunned: bool,
}

/// Volume scales with hand speed; fatigue cuts it, but never below 40%.
pub fn effective_activity(speed: u32, stamina: f64) -> f64 {
    f64::from(speed) * (stamina / 80.0).max(0.4)
}

/// Punches thrown and landed by `attacker` against `defender`. Consumes one draw.
pub fn punch_totals(attacker: &Corner, defender: &Corner, strategy: f64, rng: &mut Rng) -> (u32, u32) {
    let stats = attacker.fighter.attributes;
    let activity = effective_activity(stats.speed, attacker.state.stamina);

    let base_thrown = rng.range_inclusive(30, 55);
    let thrown = (f64::from(base_thrown) * (0.8 + activity / 12.0) * strategy) as u32;
    let thrown = thrown.clamp(MIN_THROWN, MAX_THROWN);

    let mut accuracy = f64::from(stats.speed) * 0.9
        + (10.0 - f64::from(defender.fighter.attributes.defense)) * 0.5;
    accuracy += (attacker.state.stamina - defender.state.stamina) * 0.03;
    let accuracy = accuracy.clamp(ACCURACY_FLOOR, ACCURACY_CEILING);

    let landed = (f64::from(thrown) * accuracy / 100.0) as u32;
    (thrown, landed.max(MIN_LANDED).min(thrown))
}

/// Apply landed punches to `defender`: damage, stamina tax, then knockdown and stun checks.
///
/// Returns `(knocked_down, stunned)` for the defender.
pub fn apply_damage(attacker: &Corner, defender: &mut Corner, landed: u32, rng: &mut Rng) -> (bool, bool) {
    let power = f64::from(attacker.fighter.attributes.power);
    let chin = f64::from(defender.fighter.attributes.chin);
    let landed = f64::from(landed);

    let mut damage = landed * (power * 0.35);
    damage *= rng.uniform(0.7, 1.1);
    defender.state.damage += damage / 20.0;

    let stamina_tax = landed * 0.15 + attacker.fighter.style.body_work_bonus();
    defender.state.stamina = (defender.state.stamina - stamina_tax).max(STAMINA_FLOOR);

    let kd_chance = (power * 1.4 + landed * 0.25) - chin * 1.1;
    let kd_chance = (kd_chance + rng.uniform(-3.0, 3.0)).max(0.0);
    let knocked_down = kd_chance > KNOCKDOWN_THRESHOLD && rng.next_f64() < kd_chance / 100.0;
    let stunned = kd_chance > STUN_THRESHOLD && rng.next_f64() < kd_chance / 80.0;
    (knocked_down, stunned)
}

/// Full attack of `attacker` on `defender`: output first, then its damage lands.
pub fn resolve_exchange(attacker: &Corner, defender: &mut Corner, strategy: f64, rng: &mut Rng) -> Exchange {
    let (thrown, landed) = punch_totals(attacker, defender, strategy, rng);
    let (knockdown, stunned) = apply_damage(attacker, defender, landed, rng);
    Exchange {
        thrown,
        landed,
        knockdown,
        stunned,
    }
}

/// Standard 10-point must with knockdown adjustments.
///
/// `kd_a` means fighter A was knocked down. A double knockdown cancels out.
/// Each card is floored at 7 on its own; a knockdown scored by the busier
/// fighter yields 11-8.
pub fn score_round(landed_a: u32, landed_b: u32, kd_a: bool, kd_b: bool) -> (u32, u32) {
    let (mut score_a, mut score_b) = match landed_a.cmp(&landed_b) {
        std::cmp::Ordering::Equal => (10, 10),
        std::cmp::Ordering::Greater => (10, 9),
        std::cmp::Ordering::Less => (9, 10),
    };

    match (kd_a, kd_b) {
        (true, false) => {
            score_a -= 1;
            score_b += 1;
        }
        (false, true) => {
            score_b -= 1;
            score_a += 1;
        }
        _ => {}
    }

    (score_a.max(MIN_ROUND_SCORE), score_b.max(MIN_ROUND_SCORE))
}

/// Quick flavor text for the round.
pub fn round_commentary(
    round: u32,
    name_a: &str,
    name_b: &str,
    landed_a: u32,
    landed_b: u32,
    kd_a: bool,
    kd_b: bool,
) -> String {
    let leader = if landed_a >= landed_b { name_a } else { name_b };
    let swing = if landed_a.abs_diff(landed_b) < MOMENTUM_SWING {
        "traded momentum".to_string()
    } else {
        format!("{leader} dictated")
    };
    let kd_note = match (kd_a, kd_b) {
        (true, true) => "both hit the deck!".to_string(),
        (true, false) => format!("{name_b} dropped {name_a}!"),
        (false, true) => format!("{name_a} dropped {name_b}!"),
        (false, false) => String::new(),
    };
    format!("Round {round}: {swing}. {kd_note}").trim().to_string()
}

/// Simulate one round, updating both corners' running state in place.
pub fn simulate_round(
    round: u32,
    total_rounds: u32,
    a: &mut Corner,
    b: &mut Corner,
    rng: &mut Rng,
) -> RoundResult {
    let score_margin = i64::from(a.state.score) - i64::from(b.state.score);
    let strategy_a = choose_strategy(a.fighter.style, round, total_rounds, score_margin);
    let strategy_b = choose_strategy(b.fighter.style, round, total_rounds, -score_margin);

    let attack_a = resolve_exchange(a, b, strategy_a, rng);
    let attack_b = resolve_exchange(b, a, strategy_b, rng);

    // A stunned fighter loses a bit of offense mid-round.
    let mut landed_a = attack_a.landed;
    let mut landed_b = attack_b.landed;
    if attack_b.stunned {
        landed_a = (f64::from(landed_a) * 0.9) as u32;
    }
    if attack_a.stunned {
        landed_b = (f64::from(landed_b) * 0.9) as u32;
    }

    let kd_a = attack_b.knockdown;
    let kd_b = attack_a.knockdown;
    let (score_a, score_b) = score_round(landed_a, landed_b, kd_a, kd_b);

    a.state.score += score_a;
    b.state.score += score_b;
    if score_a > score_b {
        a.state.rounds_won += 1;
    } else if score_b > score_a {
        b.state.rounds_won += 1;
    }

    debug!(
        target: "ringside::fight",
        round,
        landed_a,
        landed_b,
        score_a,
        score_b,
        stamina_a = a.state.stamina,
        stamina_b = b.state.stamina,
        "round resolved"
    );

    RoundResult {
        round,
        thrown_a: attack_a.thrown,
        landed_a,
        thrown_b: attack_b.thrown,
        landed_b,
        score_a,
        score_b,
        knockdown_a: kd_a,
        knockdown_b: kd_b,
        commentary: round_commentary(round, a.name(), b.name(), landed_a, landed_b, kd_a, kd_b),
    }
}
