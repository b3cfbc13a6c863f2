use std::fmt;

use serde::{Deserialize, Serialize};

pub const STRATEGY_FLOOR: f64 = 0.70;
pub const STRATEGY_CEILING: f64 = 1.35;

/// Rounds past this share of the scheduled distance count as "late".
pub const LATE_FIGHT_SHARE: f64 = 0.6;
pub const LATE_BEHIND_BOOST: f64 = 0.15;
pub const LATE_AHEAD_EASE: f64 = 0.05;

/// Boxing philosophy of a fighter. Unknown tags in roster files fall back to [Style::Other].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Pressure,
    CounterPuncher,
    OutBoxer,
    BoxerPuncher,
    #[default]
    #[serde(other)]
    Other,
}

impl Style {
    /// Output multiplier before fight-state pacing is applied.
    pub const fn base_aggression(self) -> f64 {
        match self {
            Self::Pressure => 1.15,
            Self::CounterPuncher => 0.90,
            Self::OutBoxer => 0.85,
            Self::BoxerPuncher | Self::Other => 1.00,
        }
    }

    /// Extra stamina sapped from the opponent per round of landed work.
    pub const fn body_work_bonus(self) -> f64 {
        match self {
            Self::Pressure | Self::BoxerPuncher => 0.6,
            Self::CounterPuncher => 0.2,
            Self::OutBoxer | Self::Other => 0.4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pressure => "pressure",
            Self::CounterPuncher => "counter-puncher",
            Self::OutBoxer => "out-boxer",
            Self::BoxerPuncher => "boxer-puncher",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide how much risk a fighter takes this round. Above 1.0 is more aggressive.
///
/// `score_margin` is the fighter's own cumulative score minus the opponent's,
/// taken before the current round is judged.
pub fn choose_strategy(style: Style, round: u32, total_rounds: u32, score_margin: i64) -> f64 {
    let late_fight = f64::from(round) > f64::from(total_rounds) * LATE_FIGHT_SHARE;
    let behind = score_margin < 0;

    let mut aggression = style.base_aggression();
    if late_fight && behind {
        aggression += LATE_BEHIND_BOOST;
    } else if late_fight {
        aggression -= LATE_AHEAD_EASE;
    }
    aggression.clamp(STRATEGY_FLOOR, STRATEGY_CEILING)
}
