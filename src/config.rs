//! Tunable rules of the realm.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric parameters consumed by the validator and the turn processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constants {
    pub initial_population: i64,
    pub initial_grain: i64,
    pub initial_land: i64,
    pub initial_people_starved: i64,
    pub initial_people_arrived: i64,
    pub min_land_price: i64,
    pub max_land_price: i64,
    pub min_grain_yield_per_acre: i64,
    pub max_grain_yield_per_acre: i64,
    pub chance_of_plague: f64,
    pub chance_rats_eat_grain: f64,
    pub max_rat_consumption: f64,
    pub annual_person_consumption: i64,
    pub plant_acres_per_person: i64,
    pub max_starvation_rate: f64,
    pub max_years: i64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            initial_population: 100,
            initial_grain: 2800,
            initial_land: 1000,
            initial_people_starved: 0,
            initial_people_arrived: 5,
            min_land_price: 17,
            max_land_price: 26,
            min_grain_yield_per_acre: 1,
            max_grain_yield_per_acre: 6,
            chance_of_plague: 0.15,
            chance_rats_eat_grain: 0.10,
            max_rat_consumption: 0.30,
            annual_person_consumption: 20,
            plant_acres_per_person: 10,
            max_starvation_rate: 0.40,
            max_years: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
    #[error("{min_field} ({min}) exceeds {max_field} ({max})")]
    InvertedRange {
        min_field: &'static str,
        min: i64,
        max_field: &'static str,
        max: i64,
    },
    #[error("{field} must lie within [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f64 },
}

impl Constants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("initial_population", self.initial_population),
            ("initial_grain", self.initial_grain),
            ("initial_land", self.initial_land),
            ("initial_people_starved", self.initial_people_starved),
            ("initial_people_arrived", self.initial_people_arrived),
            ("min_grain_yield_per_acre", self.min_grain_yield_per_acre),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        for (field, value) in [
            ("min_land_price", self.min_land_price),
            ("annual_person_consumption", self.annual_person_consumption),
            ("plant_acres_per_person", self.plant_acres_per_person),
            ("max_years", self.max_years),
        ] {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.min_land_price > self.max_land_price {
            return Err(ConfigError::InvertedRange {
                min_field: "min_land_price",
                min: self.min_land_price,
                max_field: "max_land_price",
                max: self.max_land_price,
            });
        }
        if self.min_grain_yield_per_acre > self.max_grain_yield_per_acre {
            return Err(ConfigError::InvertedRange {
                min_field: "min_grain_yield_per_acre",
                min: self.min_grain_yield_per_acre,
                max_field: "max_grain_yield_per_acre",
                max: self.max_grain_yield_per_acre,
            });
        }

        for (field, value) in [
            ("chance_of_plague", self.chance_of_plague),
            ("chance_rats_eat_grain", self.chance_rats_eat_grain),
            ("max_rat_consumption", self.max_rat_consumption),
            ("max_starvation_rate", self.max_starvation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
