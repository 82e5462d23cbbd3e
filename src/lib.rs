pub mod config;
pub mod engine;
pub mod logging;
pub mod rng;
pub mod scenario;
pub mod score;
pub mod state;
pub mod strategy;
mod systems;
pub mod turn;
pub mod validation;

pub use config::Constants;
pub use engine::{Engine, EngineError};
pub use state::{GameState, PlayerDecisions, YearRecord};
pub use turn::advance_turn;
pub use validation::{validate_decisions, violation_messages, Violation};
