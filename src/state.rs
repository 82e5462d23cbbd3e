use serde::{Deserialize, Serialize};

use crate::{config::Constants, rng::RandomSource};

/// The year a fresh reign starts in.
pub const INITIAL_YEAR: i64 = 1;

/// The realm between turns. Each processed turn produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub year: i64,
    pub population: i64,
    pub grain: i64,
    pub land: i64,
    pub land_price: i64,
    pub people_starved: i64,
    pub people_arrived: i64,
    pub plague_occurred: bool,
    pub game_over: bool,
    pub history: Vec<YearRecord>,
}

/// Inputs and outcomes of one completed turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i64,
    pub population: i64,
    pub land_owned: i64,
    pub land_price: i64,
    pub grain_in_storage: i64,
    pub grain_harvested: i64,
    pub grain_per_acre: i64,
    pub grain_eaten_by_rats: i64,
    pub people_starved: i64,
    pub people_arrived: i64,
    pub plague_occurred: bool,
    pub acres_bought: i64,
    pub acres_sold: i64,
    pub grain_fed: i64,
    pub acres_planted: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDecisions {
    pub acres_to_buy: i64,
    pub acres_to_sell: i64,
    pub grain_to_feed: i64,
    pub acres_to_plant: i64,
}

impl PlayerDecisions {
    pub fn new(acres_to_buy: i64, acres_to_sell: i64, grain_to_feed: i64, acres_to_plant: i64) -> Self {
        Self {
            acres_to_buy,
            acres_to_sell,
            grain_to_feed,
            acres_to_plant,
        }
    }
}

impl YearRecord {
    /// Pre-turn snapshot; outcome fields start at zero.
    pub fn opening(state: &GameState, decisions: &PlayerDecisions) -> Self {
        Self {
            year: state.year,
            population: state.population,
            land_owned: state.land,
            land_price: state.land_price,
            grain_in_storage: state.grain,
            grain_harvested: 0,
            grain_per_acre: 0,
            grain_eaten_by_rats: 0,
            people_starved: 0,
            people_arrived: 0,
            plague_occurred: false,
            acres_bought: decisions.acres_to_buy,
            acres_sold: decisions.acres_to_sell,
            grain_fed: decisions.grain_to_feed,
            acres_planted: decisions.acres_to_plant,
        }
    }
}

impl GameState {
    /// Opening state of a reign; draws the first land price.
    pub fn initial(constants: &Constants, rng: &mut impl RandomSource) -> Self {
        let land_price = rng.uniform_int(constants.min_land_price, constants.max_land_price);
        Self {
            year: INITIAL_YEAR,
            population: constants.initial_population,
            grain: constants.initial_grain,
            land: constants.initial_land,
            land_price,
            people_starved: constants.initial_people_starved,
            people_arrived: constants.initial_people_arrived,
            plague_occurred: false,
            game_over: false,
            history: Vec::new(),
        }
    }

    /// The year every reign starts in; see [`INITIAL_YEAR`].
    pub fn initial_year(&self) -> i64 {
        INITIAL_YEAR
    }

    pub fn years_ruled(&self) -> i64 {
        self.year - self.initial_year()
    }

    pub fn total_starved(&self) -> i64 {
        self.history.iter().map(|record| record.people_starved).sum()
    }

    pub fn grain_needed_to_feed(&self, constants: &Constants) -> i64 {
        self.population.saturating_mul(constants.annual_person_consumption)
    }

    pub fn max_acres_workable(&self, constants: &Constants) -> i64 {
        self.population.saturating_mul(constants.plant_acres_per_person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn initial_state_uses_constants() {
        let constants = Constants::default();
        let mut rng = ScriptedRandom::new().with_ints([22]);
        let state = GameState::initial(&constants, &mut rng);

        assert_eq!(state.year, INITIAL_YEAR);
        assert_eq!(state.population, 100);
        assert_eq!(state.grain, 2800);
        assert_eq!(state.land, 1000);
        assert_eq!(state.land_price, 22);
        assert_eq!(state.people_arrived, 5);
        assert!(!state.game_over);
        assert!(state.history.is_empty());
        assert_eq!(state.initial_year(), 1);
        assert_eq!(state.years_ruled(), 0);
    }

    #[test]
    fn years_ruled_counts_from_the_initial_year() {
        let constants = Constants::default();
        let mut state = GameState::initial(&constants, &mut ScriptedRandom::new());
        state.year = 7;

        assert_eq!(state.initial_year(), INITIAL_YEAR);
        assert_eq!(state.years_ruled(), 6);
    }

    #[test]
    fn workforce_and_food_needs_scale_with_population() {
        let constants = Constants::default();
        let state = GameState::initial(&constants, &mut ScriptedRandom::new());

        assert_eq!(state.grain_needed_to_feed(&constants), 2000);
        assert_eq!(state.max_acres_workable(&constants), 1000);
    }
}
