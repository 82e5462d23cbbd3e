use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    config::{Constants, LoggingConfig},
    engine::Engine,
    rng::SeededRandom,
    strategy::{SpeculatorStrategy, StewardStrategy, Strategy},
};

fn default_seed() -> u64 {
    7
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Steward,
    Speculator,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Steward => Box::new(StewardStrategy::new()),
            StrategyKind::Speculator => Box::new(SpeculatorStrategy::default()),
        }
    }
}

/// A reign to play headlessly: the rules, the seed and who rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default)]
    pub constants: Constants,
    #[serde(default)]
    pub logging: LoggingConfig,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario = Scenario::from_yaml(&data)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(text).context("invalid scenario YAML")?;
        scenario
            .constants
            .validate()
            .with_context(|| format!("scenario '{}' has invalid constants", scenario.name))?;
        Ok(scenario)
    }

    pub fn seed(&self, override_seed: Option<u64>) -> u64 {
        override_seed.unwrap_or(self.seed)
    }

    pub fn build_engine(&self, override_seed: Option<u64>) -> Result<Engine<SeededRandom>> {
        Engine::seeded(self.constants.clone(), self.seed(override_seed))
            .with_context(|| format!("scenario '{}' has invalid constants", self.name))
    }
}
