use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::{ConfigError, Constants},
    rng::{RandomSource, SeededRandom},
    score::{final_score, FinalScore},
    state::{GameState, PlayerDecisions, YearRecord},
    strategy::Strategy,
    turn::advance_turn,
    validation::{validate_decisions, Violation},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("decisions rejected: {}", join_violations(.violations))]
    Rejected { violations: Vec<Violation> },
    #[error("the reign ended in year {year}; no further turns can be played")]
    GameOver { year: i64 },
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drives a reign: validates each year's decisions, then advances the state.
pub struct Engine<R: RandomSource> {
    constants: Constants,
    rng: R,
    state: GameState,
}

impl Engine<SeededRandom> {
    pub fn seeded(constants: Constants, seed: u64) -> Result<Self, ConfigError> {
        Self::new(constants, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// Starts a fresh reign. Constants are checked before the first draw.
    pub fn new(constants: Constants, mut rng: R) -> Result<Self, ConfigError> {
        constants.validate()?;
        let state = GameState::initial(&constants, &mut rng);
        Ok(Self {
            constants,
            rng,
            state,
        })
    }

    /// Resumes from an existing state, e.g. a hand-built test fixture.
    pub fn from_state(
        constants: Constants,
        rng: R,
        state: GameState,
    ) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Self {
            constants,
            rng,
            state,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Plays one year. Rejected decisions leave the state untouched.
    pub fn submit(&mut self, decisions: PlayerDecisions) -> Result<&YearRecord, EngineError> {
        if self.state.game_over {
            return Err(EngineError::GameOver {
                year: self.state.year,
            });
        }

        let violations = validate_decisions(&self.state, &decisions, &self.constants);
        if !violations.is_empty() {
            warn!(
                year = self.state.year,
                rejected = violations.len(),
                "decisions rejected"
            );
            return Err(EngineError::Rejected { violations });
        }

        self.state = advance_turn(&self.state, &decisions, &self.constants, &mut self.rng);
        let record = self
            .state
            .history
            .last()
            .ok_or(EngineError::GameOver {
                year: self.state.year,
            })?;
        info!(
            year = record.year,
            population = self.state.population,
            grain = self.state.grain,
            land = self.state.land,
            starved = record.people_starved,
            arrived = record.people_arrived,
            plague = record.plague_occurred,
            "year completed"
        );
        if self.state.game_over {
            info!(year = self.state.year, "the reign has ended");
        }
        Ok(record)
    }

    /// Plays years chosen by `strategy` until the reign ends, calling `hook`
    /// after every completed year.
    pub fn run_with_hook<S, F>(
        &mut self,
        strategy: &mut S,
        mut hook: F,
    ) -> Result<FinalScore, EngineError>
    where
        S: Strategy + ?Sized,
        F: FnMut(&YearRecord),
    {
        while !self.state.game_over {
            let decisions = strategy.decide(&self.state, &self.constants);
            let record = self.submit(decisions)?;
            hook(record);
        }
        Ok(final_score(&self.state, &self.constants))
    }

    pub fn run<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> Result<FinalScore, EngineError> {
        self.run_with_hook(strategy, |_| {})
    }

    pub fn score(&self) -> FinalScore {
        final_score(&self.state, &self.constants)
    }
}
