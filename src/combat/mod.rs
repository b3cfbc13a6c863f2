pub mod fight;
pub mod rng;
pub mod round;
pub mod state;
pub mod strategy;

pub use fight::{declare_winner, simulate_fight, FightConfig, FightSummary, DEFAULT_ROUNDS};
pub use rng::Rng;
pub use round::{
    apply_damage, effective_activity, punch_totals, resolve_exchange, round_commentary,
    score_round, simulate_round, Exchange, RoundResult, MIN_ROUND_SCORE,
};
pub use state::{Corner, FighterState, STAMINA_FLOOR};
pub use strategy::{choose_strategy, Style};
