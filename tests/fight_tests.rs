use std::cmp::Ordering;

use ringside::combat::{
    declare_winner, score_round, simulate_fight, FightConfig, FightSummary, MIN_ROUND_SCORE,
    STAMINA_FLOOR,
};
use ringside::data::Roster;

fn fight(a: usize, b: usize, rounds: u32, seed: u64) -> FightSummary {
    let roster = Roster::builtin();
    simulate_fight(
        &roster.fighters[a],
        &roster.fighters[b],
        FightConfig::seeded(rounds, seed),
    )
    .expect("seeded fight should run")
}

fn all_pairings() -> Vec<(usize, usize)> {
    let n = Roster::builtin().len();
    (0..n)
        .flat_map(|a| (0..n).filter(move |b| *b != a).map(move |b| (a, b)))
        .collect()
}

#[test]
fn score_round_knockdown_table() {
    assert_eq!(score_round(30, 25, true, false), (9, 10));
    assert_eq!(score_round(18, 32, false, true), (10, 9));
    assert_eq!(score_round(20, 20, true, true), (10, 10));
    assert_eq!(score_round(32, 18, false, true), (11, 8));
}

#[test]
fn simulation_is_reproducible_with_seed() {
    let first = fight(0, 1, 6, 123);
    let second = fight(0, 1, 6, 123);
    assert_eq!(first.scorecard, second.scorecard);
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn golden_scorecard_for_ruiz_khan_seed_123() {
    let summary = fight(0, 1, 6, 123);
    let expected = [
        "Round 1: Elena \"Lightning\" Ruiz 9-10 Tariq \"Steamroller\" Khan",
        "Round 2: Elena \"Lightning\" Ruiz 10-9 Tariq \"Steamroller\" Khan",
        "Round 3: Elena \"Lightning\" Ruiz 9-10 Tariq \"Steamroller\" Khan",
        "Round 4: Elena \"Lightning\" Ruiz 9-10 Tariq \"Steamroller\" Khan",
        "Round 5: Elena \"Lightning\" Ruiz 9-10 Tariq \"Steamroller\" Khan",
        "Round 6: Elena \"Lightning\" Ruiz 9-10 Tariq \"Steamroller\" Khan",
    ]
    .join("\n");
    assert_eq!(summary.scorecard, expected);
    assert_eq!(
        summary.verdict,
        "Tariq \"Steamroller\" Khan wins by split-decision style win over Elena \"Lightning\" Ruiz."
    );

    let landed: Vec<(u32, u32)> = summary
        .rounds
        .iter()
        .map(|r| (r.landed_a, r.landed_b))
        .collect();
    assert_eq!(
        landed,
        vec![(11, 15), (12, 9), (8, 9), (9, 12), (10, 11), (9, 10)]
    );
    assert_eq!(summary.fighter_a.state.score, 55);
    assert_eq!(summary.fighter_b.state.score, 59);
    assert_eq!(summary.fighter_a.state.rounds_won, 1);
    assert_eq!(summary.fighter_b.state.rounds_won, 5);
}

#[test]
fn golden_draw_for_ruiz_moore_seed_9() {
    let summary = fight(0, 3, 4, 9);
    assert_eq!(summary.verdict, "Draw");
    assert_eq!(summary.fighter_a.state.score, 38);
    assert_eq!(summary.fighter_b.state.score, 38);
}

#[test]
fn verdict_tracks_scores() {
    let summary = fight(1, 2, 4, 5);
    let verdict = declare_winner(&summary.fighter_a, &summary.fighter_b);
    assert_eq!(summary.verdict, verdict);
    assert!(verdict.contains("wins") || verdict == "Draw");
}

#[test]
fn fights_always_go_the_distance() {
    for rounds in 1..=15 {
        let summary = fight(1, 3, rounds, u64::from(rounds) * 31);
        assert_eq!(summary.rounds.len(), rounds as usize);
        assert_eq!(summary.commentary.len(), rounds as usize);
        assert_eq!(summary.scorecard.lines().count(), rounds as usize);
        let indices: Vec<u32> = summary.rounds.iter().map(|r| r.round).collect();
        assert_eq!(indices, (1..=rounds).collect::<Vec<_>>());
    }
}

#[test]
fn round_scores_and_running_state_stay_consistent() {
    for (a, b) in all_pairings() {
        for seed in 0..40 {
            let summary = fight(a, b, 12, seed);
            let mut total_a = 0;
            let mut total_b = 0;
            let mut won_a = 0;
            let mut won_b = 0;
            for r in &summary.rounds {
                assert!(r.score_a >= MIN_ROUND_SCORE && r.score_b >= MIN_ROUND_SCORE);
                if r.knockdown_a == r.knockdown_b {
                    let by_landed = r.landed_a.cmp(&r.landed_b);
                    assert_eq!(r.score_a.cmp(&r.score_b), by_landed, "round {r:?}");
                }
                match r.score_a.cmp(&r.score_b) {
                    Ordering::Greater => won_a += 1,
                    Ordering::Less => won_b += 1,
                    Ordering::Equal => {}
                }
                total_a += r.score_a;
                total_b += r.score_b;
            }
            assert_eq!(summary.fighter_a.state.score, total_a);
            assert_eq!(summary.fighter_b.state.score, total_b);
            assert_eq!(summary.fighter_a.state.rounds_won, won_a);
            assert_eq!(summary.fighter_b.state.rounds_won, won_b);
            assert_eq!(
                summary.verdict,
                declare_winner(&summary.fighter_a, &summary.fighter_b)
            );
        }
    }
}

#[test]
fn stamina_never_drops_below_floor() {
    for (a, b) in all_pairings() {
        for seed in 0..25 {
            let summary = fight(a, b, 12, seed);
            assert!(summary.fighter_a.state.stamina >= STAMINA_FLOOR);
            assert!(summary.fighter_b.state.stamina >= STAMINA_FLOOR);
            assert!(summary.fighter_a.state.damage > 0.0);
            assert!(summary.fighter_b.state.damage > 0.0);
        }
    }
}

#[test]
fn low_stamina_fighters_hit_the_floor_and_keep_fighting() {
    let mut roster = Roster::builtin();
    roster.fighters[0].attributes.stamina = 1;
    let summary = simulate_fight(
        &roster.fighters[0],
        &roster.fighters[1],
        FightConfig::seeded(12, 77),
    )
    .unwrap();
    assert_eq!(summary.fighter_a.state.stamina, STAMINA_FLOOR);
    assert_eq!(summary.rounds.len(), 12);
}

#[test]
fn templates_are_not_mutated() {
    let roster = Roster::builtin();
    let before = roster.clone();
    let summary = simulate_fight(
        &roster.fighters[2],
        &roster.fighters[0],
        FightConfig::seeded(10, 4),
    )
    .unwrap();
    assert_eq!(roster, before);
    assert_eq!(summary.fighter_a.fighter, roster.fighters[2]);
}

#[test]
fn different_seeds_diverge() {
    let cards: std::collections::HashSet<String> =
        (0..20).map(|seed| fight(0, 2, 12, seed).scorecard).collect();
    assert!(cards.len() > 1, "twenty seeds produced one scorecard");
}

#[test]
fn summary_serializes_to_json() {
    let summary = fight(3, 1, 4, 2);
    let payload = serde_json::to_value(&summary).unwrap();
    assert_eq!(payload["seed"], 2);
    assert_eq!(payload["rounds"].as_array().map(Vec::len), Some(4));
    assert_eq!(payload["fighter_a"]["fighter"]["style"], "boxer-puncher");
    assert!(payload["fighter_b"]["state"]["stamina"].is_number());
}

#[test]
fn glass_chin_gets_dropped_and_loses_the_round_card() {
    let mut roster = Roster::builtin();
    roster.fighters[1].attributes.power = 10;
    roster.fighters[0].attributes.chin = 1;

    let mut knockdowns = 0;
    for seed in 0..30 {
        let summary = simulate_fight(
            &roster.fighters[0],
            &roster.fighters[1],
            FightConfig::seeded(10, seed),
        )
        .unwrap();
        for r in summary.rounds.iter().filter(|r| r.knockdown_a) {
            knockdowns += 1;
            assert!(!r.knockdown_b);
            assert!(r.score_a < r.score_b, "knocked-down fighter won {r:?}");
            assert!(r.commentary.ends_with("Khan dropped Elena \"Lightning\" Ruiz!"));
        }
    }
    assert!(knockdowns > 0, "power 10 against chin 1 never scored a knockdown");
}
