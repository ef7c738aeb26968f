//! End-to-end shootouts through the public API

use proptest::prelude::*;

use penalty_shootout::Screen;
use penalty_shootout::consts::SIM_DT;
use penalty_shootout::sim::{
    Difficulty, Direction, LANES, MatchState, Outcome, RandomSource, ScriptedRolls, SeededRng,
    ShotReport, is_lane, outcome_for, select_keeper_target, shoot, tick,
};

fn take_shot<R: RandomSource>(
    state: &mut MatchState,
    direction: Direction,
    rng: &mut R,
) -> ShotReport {
    shoot(state, direction, rng).unwrap();
    loop {
        if let Some(report) = tick(state, SIM_DT) {
            return report;
        }
    }
}

#[test]
fn hard_keeper_saves_every_left_shot() {
    let mut screen = Screen::default();
    screen.lobby_mut().unwrap().select(Difficulty::Hard);
    let state = screen.kick_off().unwrap();
    let mut rng = SeededRng::new(1);

    for _ in 0..3 {
        let report = take_shot(state, Direction::Left, &mut rng);
        assert_eq!(report.keeper_lane, 0.35);
        assert_eq!(report.outcome, Outcome::Save);
    }
    assert_eq!(state.score(), 0);
    assert_eq!(state.shots_taken(), 3);
}

#[test]
fn easy_keeper_guessing_wrong_concedes() {
    let mut screen = Screen::default();
    screen.lobby_mut().unwrap().select(Difficulty::Easy);
    let state = screen.kick_off().unwrap();
    // 0.9 lands in the last of three buckets: the right lane
    let mut rolls = ScriptedRolls::new([0.9]);

    let report = take_shot(state, Direction::Center, &mut rolls);
    assert_eq!(report.keeper_lane, 0.65);
    assert_eq!(report.outcome, Outcome::Goal);
    assert_eq!(state.score(), 1);
    assert_eq!(state.score_label(), "Score: 1");
}

#[test]
fn same_seed_same_shootout() {
    let play = |seed| {
        let mut state = MatchState::new(Difficulty::Medium);
        let mut rng = SeededRng::new(seed);
        Direction::ALL
            .iter()
            .cycle()
            .take(30)
            .map(|&d| take_shot(&mut state, d, &mut rng).outcome)
            .collect::<Vec<_>>()
    };
    assert_eq!(play(77), play(77));
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Center),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn keeper_target_is_a_lane(d in difficulty(), dir in direction(), seed in any::<u64>()) {
        let mut rng = SeededRng::new(seed);
        prop_assert!(is_lane(select_keeper_target(d, dir, &mut rng)));
    }

    #[test]
    fn save_iff_lanes_match(dir in direction(), k in 0usize..3) {
        let keeper = LANES[k];
        let saved = outcome_for(dir, keeper) == Outcome::Save;
        prop_assert_eq!(saved, keeper == dir.lane());
    }

    #[test]
    fn score_counts_goals(
        d in difficulty(),
        shots in prop::collection::vec(direction(), 0..40),
        seed in any::<u64>(),
    ) {
        let mut state = MatchState::new(d);
        let mut rng = SeededRng::new(seed);
        let mut goals = 0;
        for dir in &shots {
            if take_shot(&mut state, *dir, &mut rng).outcome == Outcome::Goal {
                goals += 1;
            }
            prop_assert!(state.score() <= state.shots_taken());
        }
        prop_assert_eq!(state.score(), goals);
        prop_assert_eq!(state.shots_taken() as usize, shots.len());
        if d == Difficulty::Hard {
            prop_assert_eq!(goals, 0);
        }
    }
}
