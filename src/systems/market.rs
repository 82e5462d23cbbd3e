use tracing::debug;

use super::Ledger;
use crate::{config::Constants, rng::RandomSource, state::PlayerDecisions};

/// Settles the year's land trade at the posted price.
pub(crate) fn trade_land(ledger: &mut Ledger, decisions: &PlayerDecisions, land_price: i64) {
    ledger.land += decisions.acres_to_buy - decisions.acres_to_sell;
    ledger.grain -= decisions.acres_to_buy * land_price;
    ledger.grain += decisions.acres_to_sell * land_price;
    debug!(
        bought = decisions.acres_to_buy,
        sold = decisions.acres_to_sell,
        land_price,
        land = ledger.land,
        grain = ledger.grain,
        "land traded"
    );
}

pub(crate) fn draw_land_price(constants: &Constants, rng: &mut impl RandomSource) -> i64 {
    rng.uniform_int(constants.min_land_price, constants.max_land_price)
}
