use crate::game::{GameState, Player};

use super::heuristic::{Heuristic, WindowHeuristic};
use super::strategy::Strategy;
use super::tree::position_score;

/// One-ply greedy player: tries every open column and keeps the one whose
/// resulting board scores best for the given perspective. Equivalent to a
/// depth-1 search without any persisted tree state.
///
/// Ties break by input order (first maximum), which makes this player
/// fully deterministic for a fixed board.
pub struct ScoringPlayer {
    player: Player,
    heuristic: Box<dyn Heuristic>,
}

impl ScoringPlayer {
    pub fn new(player: Player) -> Self {
        ScoringPlayer {
            player,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(player: Player, heuristic: Box<dyn Heuristic>) -> Self {
        ScoringPlayer { player, heuristic }
    }

    fn best_for(&self, state: &GameState, perspective: Player) -> usize {
        let columns = state.open_columns();
        assert!(!columns.is_empty(), "no open columns to choose from");

        let mut best_column = columns[0];
        let mut best_score = i32::MIN;
        for &column in columns {
            let next = state.apply(column).expect("open column is playable");
            let score = position_score(&next, perspective, self.heuristic.as_ref());
            if score > best_score {
                best_score = score;
                best_column = column;
            }
        }
        best_column
    }
}

impl Strategy for ScoringPlayer {
    fn choose_column(&mut self, state: &GameState) -> usize {
        self.best_for(state, self.player)
    }

    fn hint_opponent(&mut self, state: &GameState) -> usize {
        // Mirror image: the opponent is about to move, score for them
        self.best_for(state, self.player.other())
    }

    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        "Scoring"
    }
}
