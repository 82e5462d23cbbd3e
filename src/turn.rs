//! The yearly state transition.

use tracing::{debug, warn};

use crate::{
    config::Constants,
    rng::RandomSource,
    state::{GameState, PlayerDecisions},
    systems::{self, Ledger},
};

/// Derives next year's state from `state` and already-validated `decisions`.
///
/// Decisions are expected to have passed
/// [`validate_decisions`](crate::validation::validate_decisions); unchecked
/// input can leave grain negative. The input state is never modified.
/// Once `game_over` is set, further calls return an unchanged copy.
pub fn advance_turn(
    state: &GameState,
    decisions: &PlayerDecisions,
    constants: &Constants,
    rng: &mut impl RandomSource,
) -> GameState {
    if state.game_over {
        warn!(year = state.year, "turn requested after the reign ended");
        return state.clone();
    }

    let mut ledger = Ledger::open(state, decisions);

    systems::trade_land(&mut ledger, decisions, state.land_price);
    systems::feed_people(&mut ledger, decisions);
    systems::plant_fields(&mut ledger, decisions);
    systems::harvest(&mut ledger, decisions, constants, rng);
    systems::rats(&mut ledger, constants, rng);

    let starved = systems::starvation(&mut ledger, decisions, constants);
    systems::plague(&mut ledger, constants, rng);
    let starvation_rate = systems::starvation_rate(starved, state.population);
    systems::immigration(&mut ledger, starvation_rate, constants, rng);

    let year = state.year + 1;
    let land_price = systems::draw_land_price(constants, rng);
    let game_over = starvation_rate > constants.max_starvation_rate
        || ledger.population <= 0
        || year > constants.max_years;

    debug!(
        year,
        population = ledger.population,
        grain = ledger.grain,
        land = ledger.land,
        starvation_rate,
        game_over,
        "turn resolved"
    );

    let Ledger {
        population,
        grain,
        land,
        record,
    } = ledger;

    let mut history = Vec::with_capacity(state.history.len() + 1);
    history.extend_from_slice(&state.history);
    let people_starved = record.people_starved;
    let people_arrived = record.people_arrived;
    let plague_occurred = record.plague_occurred;
    history.push(record);

    GameState {
        year,
        population,
        grain,
        land,
        land_price,
        people_starved,
        people_arrived,
        plague_occurred,
        game_over,
        history,
    }
}
