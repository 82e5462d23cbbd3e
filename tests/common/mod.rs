#![allow(dead_code)]

use hammurabi::GameState;

/// Year-one city with the classic stores and a fixed land price.
pub fn city(population: i64, grain: i64, land: i64, land_price: i64) -> GameState {
    GameState {
        year: 1,
        population,
        grain,
        land,
        land_price,
        people_starved: 0,
        people_arrived: 5,
        plague_occurred: false,
        game_over: false,
        history: Vec::new(),
    }
}

pub fn classic_city() -> GameState {
    city(100, 2800, 1000, 20)
}
