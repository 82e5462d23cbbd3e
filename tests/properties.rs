//! Property-based checks on the validator and the turn processor.

mod common;

use common::city;
use proptest::prelude::*;

use hammurabi::{
    advance_turn,
    rng::{ScriptedRandom, SeededRandom},
    validate_decisions, Constants, PlayerDecisions, Violation,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_unaffordable_purchase_rejected(
        grain in 0i64..100_000,
        land_price in 1i64..40,
        excess in 1i64..1_000,
    ) {
        let state = city(100, grain, 1000, land_price);
        let acres = grain / land_price + excess;
        let violations =
            validate_decisions(&state, &PlayerDecisions::new(acres, 0, 0, 0), &Constants::default());
        let expected = Violation::CannotAffordLand {
            max_affordable: grain / land_price,
        };
        prop_assert!(violations.contains(&expected), "missing {:?} in {:?}", expected, violations);
    }

    #[test]
    fn prop_buy_and_sell_never_accepted(
        buy in 1i64..10_000,
        sell in 1i64..10_000,
        feed in 0i64..10_000,
        plant in 0i64..10_000,
        grain in 0i64..100_000,
    ) {
        let state = city(100, grain, 1000, 20);
        let violations = validate_decisions(
            &state,
            &PlayerDecisions::new(buy, sell, feed, plant),
            &Constants::default(),
        );
        prop_assert_eq!(violations, vec![Violation::BuyAndSell]);
    }

    #[test]
    fn prop_validation_is_repeatable(
        buy in -10i64..500,
        sell in -10i64..500,
        feed in -10i64..5_000,
        plant in -10i64..2_000,
    ) {
        let constants = Constants::default();
        let state = city(100, 2800, 1000, 20);
        let decisions = PlayerDecisions::new(buy, sell, feed, plant);
        let first = validate_decisions(&state, &decisions, &constants);
        let second = validate_decisions(&state, &decisions, &constants);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_starvation_matches_rations(
        population in 1i64..10_000,
        feed in 0i64..400_000,
    ) {
        let constants = Constants::default();
        let state = city(population, 1_000_000, 1000, 20);
        let next = advance_turn(
            &state,
            &PlayerDecisions::new(0, 0, feed, 0),
            &constants,
            &mut ScriptedRandom::new(),
        );
        let expected = (population - feed / constants.annual_person_consumption).max(0);
        prop_assert_eq!(next.people_starved, expected);
        prop_assert_eq!(next.history[0].people_starved, expected);
    }

    #[test]
    fn prop_plague_halves_with_floor(population in 0i64..10_000) {
        let constants = Constants::default();
        let state = city(population, 1_000_000, 1000, 20);
        let mut rng = ScriptedRandom::new().with_chances([false, true]);
        let next = advance_turn(
            &state,
            &PlayerDecisions::new(0, 0, population * 20, 0),
            &constants,
            &mut rng,
        );
        prop_assert!(next.plague_occurred);
        prop_assert_eq!(next.population - next.people_arrived, population / 2);
        prop_assert!(next.population >= 0);
    }

    #[test]
    fn prop_history_is_append_only(seed in any::<u64>(), turns in 1usize..10) {
        let constants = Constants::default();
        let mut rng = SeededRandom::new(seed);
        let mut state = city(100, 2800, 1000, 20);
        for _ in 0..turns {
            if state.game_over {
                break;
            }
            let before = state.clone();
            let next = advance_turn(
                &state,
                &PlayerDecisions::new(0, 0, state.grain_needed_to_feed(&constants).min(state.grain), 0),
                &constants,
                &mut rng,
            );
            prop_assert_eq!(&state, &before);
            prop_assert_eq!(next.history.len(), before.history.len() + 1);
            prop_assert_eq!(&next.history[..before.history.len()], &before.history[..]);
            prop_assert_eq!(next.history.len() as i64, next.year - 1);
            state = next;
        }
    }
}
