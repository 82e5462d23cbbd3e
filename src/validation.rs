//! Decision checks run before a turn is processed.
//!
//! Rules never short-circuit among themselves: every violated rule yields one
//! [`Violation`]. Buying while selling is the one exception and is reported
//! alone, alongside any negative fields. A negative field only silences the
//! rules that read it; everything else is still checked.

use thiserror::Error;

use crate::{
    config::Constants,
    state::{GameState, PlayerDecisions},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("{field} cannot be negative (got {value}).")]
    Negative { field: &'static str, value: i64 },
    #[error("You cannot buy and sell land in the same year.")]
    BuyAndSell,
    #[error("You can only afford to buy {max_affordable} acres.")]
    CannotAffordLand { max_affordable: i64 },
    #[error("You only have {owned} acres to sell.")]
    NotEnoughLandToSell { owned: i64 },
    #[error(
        "You don't have enough grain to feed your people. Consider buying less, or selling more, land."
    )]
    NotEnoughGrainToFeed,
    #[error("You cannot plant more acres than you own ({land_after_trade}).")]
    PlantingExceedsLand { land_after_trade: i64 },
    #[error("Your population can only plant up to {max_workable} acres.")]
    PlantingExceedsLabor { max_workable: i64 },
    #[error("You only have enough grain to plant {max_seedable} acres.")]
    NotEnoughSeedGrain { max_seedable: i64 },
    #[error("You don't have enough grain for feeding and planting. Please adjust your decisions.")]
    NotEnoughGrainForFeedingAndPlanting,
}

/// Returns every rule the proposed decisions break. Empty means accepted.
pub fn validate_decisions(
    state: &GameState,
    decisions: &PlayerDecisions,
    constants: &Constants,
) -> Vec<Violation> {
    let mut violations = negative_fields(decisions);
    if decisions.acres_to_buy > 0 && decisions.acres_to_sell > 0 {
        violations.push(Violation::BuyAndSell);
        return violations;
    }

    let buy_known = decisions.acres_to_buy >= 0;
    let sell_known = decisions.acres_to_sell >= 0;
    let feed_known = decisions.grain_to_feed >= 0;
    let plant_known = decisions.acres_to_plant >= 0;
    let trade_known = buy_known && sell_known;

    let buy_cost = decisions.acres_to_buy.saturating_mul(state.land_price);
    let sell_proceeds = decisions.acres_to_sell.saturating_mul(state.land_price);

    if buy_known && state.land_price > 0 {
        let max_affordable = state.grain.max(0) / state.land_price;
        if decisions.acres_to_buy > max_affordable {
            violations.push(Violation::CannotAffordLand { max_affordable });
        }
    }

    let overselling = sell_known && decisions.acres_to_sell > state.land;
    if overselling {
        violations.push(Violation::NotEnoughLandToSell { owned: state.land });
    }

    let grain_after_trade = state
        .grain
        .saturating_sub(buy_cost)
        .saturating_add(sell_proceeds);
    if trade_known && feed_known && decisions.grain_to_feed > grain_after_trade {
        violations.push(Violation::NotEnoughGrainToFeed);
    }

    let grain_for_planting = grain_after_trade.saturating_sub(decisions.grain_to_feed);
    let max_seedable = grain_for_planting.saturating_mul(2);
    let max_workable = state.max_acres_workable(constants);
    let land_after_trade = state
        .land
        .saturating_add(decisions.acres_to_buy)
        .saturating_sub(decisions.acres_to_sell);

    // An oversold field count is already reported; land after it is meaningless.
    if trade_known
        && plant_known
        && !overselling
        && decisions.acres_to_plant > land_after_trade
    {
        violations.push(Violation::PlantingExceedsLand { land_after_trade });
    }

    if plant_known && decisions.acres_to_plant > max_workable {
        violations.push(Violation::PlantingExceedsLabor { max_workable });
    }

    if trade_known && feed_known {
        if grain_for_planting < 0 {
            violations.push(Violation::NotEnoughGrainForFeedingAndPlanting);
        } else if plant_known && decisions.acres_to_plant > max_seedable {
            violations.push(Violation::NotEnoughSeedGrain { max_seedable });
        }
    }

    violations
}

/// String form of [`validate_decisions`], ready to relay to a player.
pub fn violation_messages(
    state: &GameState,
    decisions: &PlayerDecisions,
    constants: &Constants,
) -> Vec<String> {
    validate_decisions(state, decisions, constants)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn negative_fields(decisions: &PlayerDecisions) -> Vec<Violation> {
    [
        ("Acres to buy", decisions.acres_to_buy),
        ("Acres to sell", decisions.acres_to_sell),
        ("Grain to feed", decisions.grain_to_feed),
        ("Acres to plant", decisions.acres_to_plant),
    ]
    .into_iter()
    .filter(|&(_, value)| value < 0)
    .map(|(field, value)| Violation::Negative { field, value })
    .collect()
}
