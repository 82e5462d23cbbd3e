//! Headless rulers that stand in for a human at the decision prompt.

use crate::{
    config::Constants,
    state::{GameState, PlayerDecisions},
};

pub trait Strategy {
    fn name(&self) -> &str;
    fn decide(&mut self, state: &GameState, constants: &Constants) -> PlayerDecisions;
}

/// Feeds everyone it can and plants as much as grain, hands and land allow.
/// Never trades land.
#[derive(Debug, Clone, Copy, Default)]
pub struct StewardStrategy;

impl StewardStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for StewardStrategy {
    fn name(&self) -> &str {
        "steward"
    }

    fn decide(&mut self, state: &GameState, constants: &Constants) -> PlayerDecisions {
        let (grain_to_feed, acres_to_plant) =
            feed_then_plant(state, constants, state.grain, state.land);
        PlayerDecisions::new(0, 0, grain_to_feed, acres_to_plant)
    }
}

/// Buys land when it is cheap, sells idle land when it is dear, then farms
/// like the steward.
#[derive(Debug, Clone, Copy)]
pub struct SpeculatorStrategy {
    pub buy_at_or_below: i64,
    pub sell_at_or_above: i64,
}

impl SpeculatorStrategy {
    pub fn new(buy_at_or_below: i64, sell_at_or_above: i64) -> Self {
        Self {
            buy_at_or_below,
            sell_at_or_above,
        }
    }
}

impl Default for SpeculatorStrategy {
    fn default() -> Self {
        Self::new(19, 24)
    }
}

impl Strategy for SpeculatorStrategy {
    fn name(&self) -> &str {
        "speculator"
    }

    fn decide(&mut self, state: &GameState, constants: &Constants) -> PlayerDecisions {
        let price = state.land_price;
        let workable = state.max_acres_workable(constants);
        let mut acres_to_buy = 0;
        let mut acres_to_sell = 0;

        if price > 0 && price <= self.buy_at_or_below {
            // Keep enough back to feed everyone and seed every workable acre.
            let reserve = state.grain_needed_to_feed(constants) + (workable + 1) / 2;
            acres_to_buy = ((state.grain - reserve) / price).max(0);
        } else if price > 0 && price >= self.sell_at_or_above {
            acres_to_sell = (state.land - workable).max(0);
        }

        let grain = state.grain - acres_to_buy * price + acres_to_sell * price;
        let land = state.land + acres_to_buy - acres_to_sell;
        let (grain_to_feed, acres_to_plant) = feed_then_plant(state, constants, grain, land);
        PlayerDecisions::new(acres_to_buy, acres_to_sell, grain_to_feed, acres_to_plant)
    }
}

/// Repeats one set of decisions every year.
#[derive(Debug, Clone, Copy)]
pub struct FixedStrategy {
    decisions: PlayerDecisions,
}

impl FixedStrategy {
    pub fn new(decisions: PlayerDecisions) -> Self {
        Self { decisions }
    }
}

impl Strategy for FixedStrategy {
    fn name(&self) -> &str {
        "fixed"
    }

    fn decide(&mut self, _state: &GameState, _constants: &Constants) -> PlayerDecisions {
        self.decisions
    }
}

fn feed_then_plant(state: &GameState, constants: &Constants, grain: i64, land: i64) -> (i64, i64) {
    let grain = grain.max(0);
    let grain_to_feed = state.grain_needed_to_feed(constants).min(grain);
    let seed_budget = grain - grain_to_feed;
    let acres_to_plant = land
        .min(state.max_acres_workable(constants))
        .min(seed_budget.saturating_mul(2))
        .max(0);
    (grain_to_feed, acres_to_plant)
}
