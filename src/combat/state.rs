use serde::Serialize;

use crate::data::FighterTemplate;

/// Stamina never drops below this, however much punishment a fighter absorbs.
pub const STAMINA_FLOOR: f64 = 10.0;

/// Mutable per-fight condition of one fighter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FighterState {
    pub stamina: f64,
    /// Accumulated punishment. Tracked for reporting; fights are never stopped on it.
    pub damage: f64,
    pub rounds_won: u32,
    pub score: u32,
}

impl FighterState {
    pub fn fresh(template: &FighterTemplate) -> Self {
        Self {
            stamina: f64::from(template.attributes.stamina) * 10.0,
            damage: 0.0,
            rounds_won: 0,
            score: 0,
        }
    }
}

/// One side of a fight: a private copy of the template plus its running state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Corner {
    pub fighter: FighterTemplate,
    pub state: FighterState,
}

impl Corner {
    pub fn new(fighter: FighterTemplate) -> Self {
        let state = FighterState::fresh(&fighter);
        Self { fighter, state }
    }

    pub fn name(&self) -> &str {
        &self.fighter.name
    }
}
