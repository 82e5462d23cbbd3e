use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use hammurabi::{
    logging,
    scenario::{ScenarioLoader, StrategyKind},
    score::FinalScore,
    GameState,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Headless Hammurabi reign runner")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/classic.yaml")]
    scenario: PathBuf,

    /// Override the scenario seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the ruling strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Print the final state and score as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    scenario: &'a str,
    seed: u64,
    strategy: StrategyKind,
    score: FinalScore,
    state: &'a GameState,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    logging::init(&scenario.logging);

    let seed = scenario.seed(cli.seed);
    let strategy_kind = cli.strategy.unwrap_or(scenario.strategy);
    let mut strategy = strategy_kind.build();
    let mut engine = scenario.build_engine(Some(seed))?;
    info!(
        scenario = %scenario.name,
        seed,
        strategy = strategy.name(),
        "reign begins"
    );

    let score = engine.run(strategy.as_mut())?;
    let state = engine.state();

    if cli.json {
        let report = Report {
            scenario: &scenario.name,
            seed,
            strategy: strategy_kind,
            score,
            state,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Scenario '{}' ended after {} years. Population {}, land {}, grain {}. Score {} ({}){}",
            scenario.name,
            state.years_ruled(),
            state.population,
            state.land,
            state.grain,
            score.score,
            score.tier.label(),
            if score.heavy_starvation {
                ", marred by famine"
            } else {
                ""
            }
        );
    }
    Ok(())
}
