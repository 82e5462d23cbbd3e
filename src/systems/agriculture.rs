use tracing::debug;

use super::Ledger;
use crate::{config::Constants, rng::RandomSource, state::PlayerDecisions};

pub(crate) fn feed_people(ledger: &mut Ledger, decisions: &PlayerDecisions) {
    ledger.grain -= decisions.grain_to_feed;
}

/// Seed costs half a bushel per acre, rounded up, whatever the harvest.
pub(crate) fn plant_fields(ledger: &mut Ledger, decisions: &PlayerDecisions) {
    ledger.grain -= seed_grain(decisions.acres_to_plant);
}

pub(crate) fn seed_grain(acres: i64) -> i64 {
    (acres + 1) / 2
}

pub(crate) fn harvest(
    ledger: &mut Ledger,
    decisions: &PlayerDecisions,
    constants: &Constants,
    rng: &mut impl RandomSource,
) {
    let per_acre = rng.uniform_int(
        constants.min_grain_yield_per_acre,
        constants.max_grain_yield_per_acre,
    );
    let harvested = decisions.acres_to_plant * per_acre;
    ledger.grain += harvested;
    ledger.record.grain_per_acre = per_acre;
    ledger.record.grain_harvested = harvested;
    debug!(per_acre, harvested, grain = ledger.grain, "harvest gathered");
}

/// Rats strike with `chance_rats_eat_grain` and take a share of the stores
/// below `max_rat_consumption`. Stores already in deficit lose nothing, so a
/// strike never adds grain.
pub(crate) fn rats(ledger: &mut Ledger, constants: &Constants, rng: &mut impl RandomSource) {
    let eaten = if rng.chance(constants.chance_rats_eat_grain) {
        let share = rng.fraction(constants.max_rat_consumption);
        (ledger.grain.max(0) as f64 * share).floor() as i64
    } else {
        0
    };
    ledger.grain -= eaten;
    ledger.record.grain_eaten_by_rats = eaten;
    if eaten > 0 {
        debug!(eaten, grain = ledger.grain, "rats got into the stores");
    }
}
