//! Final reckoning of a reign.

use serde::Serialize;

use crate::{config::Constants, state::GameState};

/// Average yearly starvation, relative to the founding population, above
/// which a reign is marked as a hungry one.
pub const HEAVY_STARVATION_RATE: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ScoreTier {
    Collapse,
    Dark,
    Poor,
    Adequate,
    Capable,
    Flourishing,
    Legendary,
}

impl ScoreTier {
    fn from_score(score: i64) -> Self {
        match score {
            s if s > 8000 => ScoreTier::Legendary,
            s if s > 5000 => ScoreTier::Flourishing,
            s if s > 3000 => ScoreTier::Capable,
            s if s > 1000 => ScoreTier::Adequate,
            s if s > 100 => ScoreTier::Poor,
            _ => ScoreTier::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::Collapse => "collapse",
            ScoreTier::Dark => "dark",
            ScoreTier::Poor => "poor",
            ScoreTier::Adequate => "adequate",
            ScoreTier::Capable => "capable",
            ScoreTier::Flourishing => "flourishing",
            ScoreTier::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalScore {
    pub score: i64,
    pub tier: ScoreTier,
    pub average_starvation_rate: f64,
    pub heavy_starvation: bool,
}

pub fn final_score(state: &GameState, constants: &Constants) -> FinalScore {
    let average_starvation_rate = average_starvation_rate(state, constants);
    let heavy_starvation = average_starvation_rate > HEAVY_STARVATION_RATE;

    if state.population <= 0 {
        return FinalScore {
            score: 0,
            tier: ScoreTier::Collapse,
            average_starvation_rate,
            heavy_starvation,
        };
    }

    let score = (state.land as f64 / 10.0
        + state.grain as f64 / 100.0
        + state.population as f64 * 10.0)
        .floor() as i64;

    FinalScore {
        score,
        tier: ScoreTier::from_score(score),
        average_starvation_rate,
        heavy_starvation,
    }
}

fn average_starvation_rate(state: &GameState, constants: &Constants) -> f64 {
    let denominator = state.years_ruled() * constants.initial_population;
    if denominator <= 0 {
        return 0.0;
    }
    state.total_starved() as f64 / denominator as f64
}
