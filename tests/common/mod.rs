//! Shared test helpers.

#![allow(dead_code)]

use std::collections::VecDeque;

use giftwheel::{ContentTables, Game, GameOptions, GamePhase, Randomness};

/// Randomness that replays queued values.
///
/// Once a queue runs dry, indices fall back to 0 and units to 0.99, which
/// never passes the default surprise-wheel chance.
#[derive(Debug, Default)]
pub struct Scripted {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
}

impl Scripted {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indices(mut self, indices: &[usize]) -> Self {
        self.indices.extend(indices);
        self
    }

    pub fn with_units(mut self, units: &[f64]) -> Self {
        self.units.extend(units);
        self
    }
}

impl Randomness for Scripted {
    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.99)
    }
}

/// Options with the surprise wheel switched off.
pub fn quiet_options() -> GameOptions {
    GameOptions::default().with_wheel_chance(0.0)
}

pub fn scripted_game(options: GameOptions, rng: Scripted) -> Game<Scripted> {
    Game::with_parts(options, ContentTables::default(), rng)
}

/// A game in the first round with players A, B and C.
pub fn started(options: GameOptions, rng: Scripted) -> Game<Scripted> {
    let game = scripted_game(options, rng);
    game.start_game(&["A", "B", "C"]).unwrap();
    game
}

/// A game in the finale with players A, B and C.
pub fn in_finale(options: GameOptions, rng: Scripted) -> Game<Scripted> {
    let game = started(options, rng);
    game.proceed_to_intermission().unwrap();
    game.start_round2().unwrap();
    assert_eq!(game.phase(), GamePhase::Round2);
    game
}

pub fn active_name<R>(game: &Game<R>) -> String {
    game.active_player()
        .map(|player| player.name().to_string())
        .unwrap_or_default()
}
