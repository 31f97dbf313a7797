use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{GameState, Player};

use super::strategy::Strategy;

/// A player that selects uniformly at random from the open columns.
pub struct RandomPlayer {
    player: Player,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(player: Player) -> Self {
        RandomPlayer {
            player,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomPlayer {
    fn choose_column(&mut self, state: &GameState) -> usize {
        let columns = state.open_columns();
        assert!(!columns.is_empty(), "no open columns to choose from");
        columns[self.rng.random_range(0..columns.len())]
    }

    fn hint_opponent(&mut self, state: &GameState) -> usize {
        // A random player has no opinion either way
        self.choose_column(state)
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Random"
    }
}
