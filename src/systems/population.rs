use tracing::debug;

use super::Ledger;
use crate::{config::Constants, rng::RandomSource, state::PlayerDecisions};

/// Whoever the fed grain cannot cover starves.
pub(crate) fn starvation(
    ledger: &mut Ledger,
    decisions: &PlayerDecisions,
    constants: &Constants,
) -> i64 {
    let fed = decisions.grain_to_feed / constants.annual_person_consumption;
    let starved = (ledger.population - fed).max(0);
    ledger.population -= starved;
    ledger.record.people_starved = starved;
    if starved > 0 {
        debug!(starved, population = ledger.population, "people starved");
    }
    starved
}

/// Plague halves the population, rounding down.
pub(crate) fn plague(ledger: &mut Ledger, constants: &Constants, rng: &mut impl RandomSource) {
    let struck = rng.chance(constants.chance_of_plague);
    if struck {
        ledger.population = ledger.population.max(0) / 2;
        debug!(population = ledger.population, "plague swept the city");
    }
    ledger.record.plague_occurred = struck;
}

/// Share of the pre-turn population lost to hunger.
pub(crate) fn starvation_rate(starved: i64, pre_turn_population: i64) -> f64 {
    if starved > 0 && pre_turn_population > 0 {
        starved as f64 / pre_turn_population as f64
    } else {
        0.0
    }
}

/// Newcomers arrive only in years without famine, drawn by land and stores.
pub(crate) fn immigration(
    ledger: &mut Ledger,
    starvation_rate: f64,
    constants: &Constants,
    rng: &mut impl RandomSource,
) {
    let arrived = if starvation_rate > 0.0 {
        0
    } else {
        let consumption = constants.annual_person_consumption;
        let potential = (ledger.land * consumption + ledger.grain).div_euclid(consumption * 100);
        (rng.uniform_int(0, 4) + potential).max(0)
    };
    ledger.population += arrived;
    ledger.record.people_arrived = arrived;
    if arrived > 0 {
        debug!(arrived, population = ledger.population, "newcomers arrived");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rng::ScriptedRandom, systems::test_ledger};

    #[test]
    fn partial_feeding_starves_the_remainder() {
        let constants = Constants::default();
        let mut ledger = test_ledger(100, 0, 1000);
        let starved = starvation(&mut ledger, &PlayerDecisions::new(0, 0, 1_519, 0), &constants);

        assert_eq!(starved, 25);
        assert_eq!(ledger.population, 75);
        assert_eq!(ledger.record.people_starved, 25);
    }

    #[test]
    fn surplus_feeding_starves_nobody() {
        let constants = Constants::default();
        let mut ledger = test_ledger(100, 0, 1000);
        let starved = starvation(&mut ledger, &PlayerDecisions::new(0, 0, 9_000, 0), &constants);

        assert_eq!(starved, 0);
        assert_eq!(ledger.population, 100);
    }

    #[test]
    fn plague_floors_half() {
        let constants = Constants::default();
        let mut ledger = test_ledger(77, 0, 1000);
        plague(&mut ledger, &constants, &mut ScriptedRandom::new().with_chances([true]));

        assert_eq!(ledger.population, 38);
        assert!(ledger.record.plague_occurred);
    }

    #[test]
    fn famine_blocks_immigration() {
        let constants = Constants::default();
        let mut ledger = test_ledger(50, 10_000, 1000);
        let mut rng = ScriptedRandom::new().with_ints([4]);
        immigration(&mut ledger, 0.5, &constants, &mut rng);

        assert_eq!(ledger.record.people_arrived, 0);
        assert_eq!(ledger.population, 50);
    }

    #[test]
    fn immigration_follows_land_and_stores() {
        let constants = Constants::default();
        // (1000 + 3300 / 20) / 100 = 11.65 -> 11
        let mut ledger = test_ledger(100, 3300, 1000);
        let mut rng = ScriptedRandom::new().with_ints([3]);
        immigration(&mut ledger, 0.0, &constants, &mut rng);

        assert_eq!(ledger.record.people_arrived, 14);
        assert_eq!(ledger.population, 114);
    }

    #[test]
    fn starvation_rate_guards_empty_city() {
        assert_eq!(starvation_rate(0, 100), 0.0);
        assert_eq!(starvation_rate(5, 0), 0.0);
        assert_eq!(starvation_rate(25, 100), 0.25);
    }
}
