//! Ordered phases of a single turn. Each phase mutates the working
//! [`Ledger`] and fills in its part of the year's record.

mod agriculture;
mod market;
mod population;

pub(crate) use agriculture::{feed_people, harvest, plant_fields, rats};
pub(crate) use market::{draw_land_price, trade_land};
pub(crate) use population::{immigration, plague, starvation, starvation_rate};

use crate::state::{GameState, PlayerDecisions, YearRecord};

/// Mutable quantities threaded through the phases of one turn.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ledger {
    pub population: i64,
    pub grain: i64,
    pub land: i64,
    pub record: YearRecord,
}

impl Ledger {
    pub(crate) fn open(state: &GameState, decisions: &PlayerDecisions) -> Self {
        Self {
            population: state.population,
            grain: state.grain,
            land: state.land,
            record: YearRecord::opening(state, decisions),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_ledger(population: i64, grain: i64, land: i64) -> Ledger {
    let state = GameState {
        year: 1,
        population,
        grain,
        land,
        land_price: 20,
        people_starved: 0,
        people_arrived: 0,
        plague_occurred: false,
        game_over: false,
        history: Vec::new(),
    };
    Ledger::open(&state, &PlayerDecisions::default())
}
