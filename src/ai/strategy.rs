use crate::game::{GameState, Player};

/// Common interface for all AI players.
///
/// Implementations may keep internal state between calls (the greedy
/// player carries its search tree across plies), hence `&mut self`.
/// Callers must not request moves on a decided board; while
/// `open_columns()` is non-empty a column is always returned.
pub trait Strategy {
    /// Choose a column for this player's next move.
    fn choose_column(&mut self, state: &GameState) -> usize;

    /// Suggest the strongest reply available to the opponent in the
    /// current position, without committing any move.
    fn hint_opponent(&mut self, state: &GameState) -> usize;

    /// Which side this strategy plays.
    fn player(&self) -> Player;

    /// Display name of the strategy.
    fn name(&self) -> &str;
}
